//! Answer source port
//!
//! Defines where a game's answers come from.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerSource`] - defined here in application layer
//! - **Adapter**: `QuizRepl` - interactive terminal input in the presentation layer
//!
//! # Flow
//!
//! ```text
//! round dealt
//!      ↓
//! AnswerSource::choose()        → PlayerAction::Choose(i) / PlayerAction::Quit
//!      ↓
//! engine.submit_answer(i)
//!      ↓
//! AnswerSource::acknowledge()   ("Continue")
//!      ↓
//! engine.advance()
//! ```
//!
//! # Built-in Implementations
//!
//! - [`ScriptedAnswers`] - Replays a fixed list of actions, then quits

use flagquiz_domain::{AnswerResult, RoundView};
use std::collections::VecDeque;

/// What the player did when asked for an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Pick the choice at this position
    Choose(usize),
    /// Abandon the game
    Quit,
}

/// Error type for answer source operations.
///
/// These represent failures to obtain input, not wrong answers.
#[derive(Debug, Clone)]
pub enum AnswerSourceError {
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
    /// Input stream ended.
    Closed,
}

impl std::fmt::Display for AnswerSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSourceError::IoError(msg) => write!(f, "I/O error: {}", msg),
            AnswerSourceError::Closed => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for AnswerSourceError {}

/// Port for obtaining the player's answers.
///
/// Implementations only forward what the player did; validation and
/// scoring stay in the engine.
pub trait AnswerSource {
    /// Ask for an answer to the displayed round.
    ///
    /// `score` is the score before answering.
    fn choose(&mut self, round: &RoundView, score: i64) -> Result<PlayerAction, AnswerSourceError>;

    /// Called after a result was shown, before moving on.
    ///
    /// Interactive sources wait for the player here.
    fn acknowledge(&mut self, _result: &AnswerResult) -> Result<(), AnswerSourceError> {
        Ok(())
    }
}

/// Replays a fixed list of actions, then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    actions: VecDeque<PlayerAction>,
    acknowledged: usize,
}

impl ScriptedAnswers {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            acknowledged: 0,
        }
    }

    /// Shorthand for a list of choices
    pub fn choices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(indices.into_iter().map(PlayerAction::Choose))
    }

    /// Number of results acknowledged so far
    pub fn acknowledged(&self) -> usize {
        self.acknowledged
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn choose(
        &mut self,
        _round: &RoundView,
        _score: i64,
    ) -> Result<PlayerAction, AnswerSourceError> {
        Ok(self.actions.pop_front().unwrap_or(PlayerAction::Quit))
    }

    fn acknowledge(&mut self, _result: &AnswerResult) -> Result<(), AnswerSourceError> {
        self.acknowledged += 1;
        Ok(())
    }
}
