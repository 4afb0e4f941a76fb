//! Presentation layer for guess-the-flag
//!
//! This crate contains the CLI definition, output formatters,
//! the progress display, and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod play;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use play::QuizRepl;
pub use progress::reporter::ConsoleProgress;
