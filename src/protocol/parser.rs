//! Command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the session main loop can dispatch on.

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Hello,

    /// Reset the session: demo roster and a fresh mission.
    NewGame,

    /// List the territory roster.
    Map,

    /// Show the current mission.
    Mission,

    /// Resolve one combat round: `attack <attacker> <defender>` (0-based).
    Attack { attacker: usize, defender: usize },

    /// Evaluate the current mission.
    Check,

    /// Draw a fresh mission after a successful check.
    Reroll,

    /// Keep the current mission after a successful check.
    Keep,

    /// Replace the roster from a JSON layout: `setup <json>`.
    Setup { layout: String },

    /// Reseed the session RNG: `seed <n>`.
    Seed { seed: u64 },

    /// Emit a JSON snapshot of the session state.
    Dump,

    /// Terminate the session process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "hello" => Some(Command::Hello),
        "newgame" => Some(Command::NewGame),
        "map" => Some(Command::Map),
        "mission" => Some(Command::Mission),
        "check" => Some(Command::Check),
        "reroll" => Some(Command::Reroll),
        "keep" => Some(Command::Keep),
        "dump" => Some(Command::Dump),
        "quit" => Some(Command::Quit),

        "attack" => parse_attack(&tokens),
        "setup" => parse_setup(&tokens, trimmed),
        "seed" => parse_seed(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `attack <attacker> <defender>` with 0-based indices.
fn parse_attack(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed attack: expected 'attack <attacker> <defender>'");
        return None;
    }

    let attacker = match tokens[1].parse::<usize>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid attacker index: '{}'", tokens[1]);
            return None;
        }
    };
    let defender = match tokens[2].parse::<usize>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid defender index: '{}'", tokens[2]);
            return None;
        }
    };

    Some(Command::Attack { attacker, defender })
}

/// Parses `setup <json>` -- captures everything after "setup" as the layout
/// document, which may contain spaces.
fn parse_setup(tokens: &[&str], full_line: &str) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setup: expected 'setup <json>'");
        return None;
    }
    let layout = full_line
        .strip_prefix("setup")
        .unwrap_or("")
        .trim()
        .to_string();
    Some(Command::Setup { layout })
}

/// Parses `seed <n>`.
fn parse_seed(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed seed: expected 'seed <n>'");
        return None;
    }
    match tokens[1].parse::<u64>() {
        Ok(seed) => Some(Command::Seed { seed }),
        Err(_) => {
            eprintln!("invalid seed value: '{}'", tokens[1]);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("hello"), Some(Command::Hello));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("map"), Some(Command::Map));
        assert_eq!(parse_command("mission"), Some(Command::Mission));
        assert_eq!(parse_command("check"), Some(Command::Check));
        assert_eq!(parse_command("reroll"), Some(Command::Reroll));
        assert_eq!(parse_command("keep"), Some(Command::Keep));
        assert_eq!(parse_command("dump"), Some(Command::Dump));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_attack_with_indices() {
        let cmd = parse_command("attack 0 3").unwrap();
        assert_eq!(
            cmd,
            Command::Attack {
                attacker: 0,
                defender: 3,
            }
        );
    }

    #[test]
    fn parse_attack_malformed_returns_none() {
        assert_eq!(parse_command("attack"), None);
        assert_eq!(parse_command("attack 1"), None);
        assert_eq!(parse_command("attack 1 2 3"), None);
        assert_eq!(parse_command("attack one two"), None);
        assert_eq!(parse_command("attack -1 2"), None);
    }

    #[test]
    fn parse_setup_captures_full_json() {
        let json = r#"[{"name": "Costa", "color": "Azul", "troops": 2}]"#;
        let cmd = parse_command(&format!("setup {}", json)).unwrap();
        assert_eq!(
            cmd,
            Command::Setup {
                layout: json.to_string(),
            }
        );
    }

    #[test]
    fn parse_setup_malformed_returns_none() {
        assert_eq!(parse_command("setup"), None);
    }

    #[test]
    fn parse_seed_value() {
        let cmd = parse_command("seed 42").unwrap();
        assert_eq!(cmd, Command::Seed { seed: 42 });
    }

    #[test]
    fn parse_seed_malformed_returns_none() {
        assert_eq!(parse_command("seed"), None);
        assert_eq!(parse_command("seed abc"), None);
        assert_eq!(parse_command("seed 1 2"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  hello  "), Some(Command::Hello));
        assert_eq!(parse_command("  attack 0 1  "), Some(Command::Attack {
            attacker: 0,
            defender: 1,
        }));
    }
}
