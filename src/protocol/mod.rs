//! Command protocol for driving a game session.
//!
//! A line-oriented text protocol in the UCI family: one lowercase command
//! per line on stdin, machine-parsable responses on stdout, diagnostics for
//! malformed input on stderr.

pub mod parser;

pub use parser::{parse_command, Command};
