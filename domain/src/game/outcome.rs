//! Answer outcome and result types

use crate::core::item::Item;
use serde::{Deserialize, Serialize};

/// Classification of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Correct => write!(f, "Correct"),
            Outcome::Incorrect => write!(f, "Incorrect"),
        }
    }
}

/// Result of submitting an answer for the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Round number (1-indexed) the answer belongs to
    pub round: usize,
    pub outcome: Outcome,
    /// Score after applying this answer
    pub score_after: i64,
    /// Position the player picked
    pub chosen_index: usize,
    /// Item the player picked; only worth showing when the answer was wrong
    pub chosen: Item,
    /// Item the player was asked to find
    pub correct: Item,
    /// Whether this answer completed the game
    pub game_over: bool,
}

impl AnswerResult {
    pub fn is_correct(&self) -> bool {
        self.outcome.is_correct()
    }

    /// The item picked by mistake, if the answer was wrong
    pub fn mistaken_item(&self) -> Option<&Item> {
        if self.is_correct() {
            None
        } else {
            Some(&self.chosen)
        }
    }
}

/// What comes after a dismissed result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    NextRound(super::round::RoundView),
    GameOver { final_score: i64 },
}

impl Advance {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Advance::GameOver { .. })
    }
}
