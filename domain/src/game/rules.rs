//! Game rules value object

use crate::core::error::QuizError;
use serde::{Deserialize, Serialize};

/// Number of choices shown in every round
pub const CHOICES_PER_ROUND: usize = 3;

/// Default number of rounds in one game
pub const DEFAULT_ROUNDS_PER_GAME: usize = 3;

/// Fixed parameters of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    rounds_per_game: usize,
}

impl GameRules {
    pub fn new(rounds_per_game: usize) -> Result<Self, QuizError> {
        if rounds_per_game == 0 {
            return Err(QuizError::InvalidRules(
                "rounds_per_game must be at least 1".to_string(),
            ));
        }
        Ok(Self { rounds_per_game })
    }

    pub fn rounds_per_game(&self) -> usize {
        self.rounds_per_game
    }

    pub fn choices_per_round(&self) -> usize {
        CHOICES_PER_ROUND
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            rounds_per_game: DEFAULT_ROUNDS_PER_GAME,
        }
    }
}
