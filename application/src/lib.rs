//! Application layer for guess-the-flag
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_source::{AnswerSource, AnswerSourceError, PlayerAction, ScriptedAnswers},
    progress::{GameProgressNotifier, NoProgress},
};
pub use use_cases::play_game::{
    GameReport, MAX_INVALID_CHOICES, PlayGameError, PlayGameUseCase, RoundRecord,
};
