//! Contenda -- a territorial-conquest engine driven by a command protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one command per line.

use std::io::{self, BufRead};

use contenda::protocol::parser::{parse_command, Command};
use contenda::session::Session;

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => {
                session.handle_hello(&mut out);
            }
            Command::NewGame => {
                session.new_game();
            }
            Command::Map => {
                session.handle_map(&mut out);
            }
            Command::Mission => {
                session.handle_mission(&mut out);
            }
            Command::Attack { attacker, defender } => {
                session.handle_attack(&mut out, attacker, defender);
            }
            Command::Check => {
                session.handle_check(&mut out);
            }
            Command::Reroll => {
                session.handle_reroll(&mut out);
            }
            Command::Keep => {
                session.handle_keep(&mut out);
            }
            Command::Setup { layout } => {
                session.handle_setup(&mut out, &layout);
            }
            Command::Seed { seed } => {
                session.reseed(seed);
            }
            Command::Dump => {
                session.handle_dump(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
