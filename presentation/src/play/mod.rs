//! Interactive play in the terminal

pub mod repl;

pub use repl::{QuizRepl, parse_action, parse_yes, read_action};
