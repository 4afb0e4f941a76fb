//! Domain layer for guess-the-flag
//!
//! This crate contains the quiz engine, its entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Rounds
//!
//! Every round shows three distinct items drawn from an [`ItemPool`] and
//! asks the player to find one of them (the target).
//!
//! ## Games
//!
//! A game is a fixed number of rounds ([`GameRules`]). Correct answers add
//! one point, wrong answers take two away. The [`QuizEngine`] drives the
//! `Playing -> AwaitingAdvance -> GameOver` cycle.
//!
//! ## Randomness
//!
//! Shuffles and target selection go through an injected
//! [`random::RandomSource`], never a global generator.

pub mod config;
pub mod core;
pub mod game;
pub mod random;

// Re-export commonly used types
pub use config::OutputFormat;
pub use self::core::{error::QuizError, item::Item};
pub use game::{
    Advance, AnswerResult, CHOICES_PER_ROUND, DEFAULT_ROUNDS_PER_GAME, GamePhase, GameRules,
    GameState, ItemPool, Outcome, QuizEngine, Round, RoundView,
};
pub use random::{RandomSource, SequenceRandom};
