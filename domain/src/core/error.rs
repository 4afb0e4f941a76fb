//! Domain error types

use crate::game::state::GamePhase;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Invalid choice {index}: expected a position in 0..{choices}")]
    InvalidChoice { index: usize, choices: usize },

    #[error("Cannot {operation} while {phase}")]
    InvalidState {
        operation: &'static str,
        phase: GamePhase,
    },

    #[error("Item pool has {size} items, at least {required} are required")]
    PoolTooSmall { size: usize, required: usize },

    #[error("Duplicate item in pool: {0}")]
    DuplicateItem(String),

    #[error("Item name cannot be empty")]
    EmptyItemName,

    #[error("Invalid game rules: {0}")]
    InvalidRules(String),
}

impl QuizError {
    /// Check if this error was caused by the caller's input rather than engine state
    pub fn is_invalid_choice(&self) -> bool {
        matches!(self, QuizError::InvalidChoice { .. })
    }

    /// Check if this error represents an operation attempted in the wrong phase
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, QuizError::InvalidState { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_display() {
        let error = QuizError::InvalidChoice {
            index: 3,
            choices: 3,
        };
        assert_eq!(
            error.to_string(),
            "Invalid choice 3: expected a position in 0..3"
        );
    }

    #[test]
    fn test_invalid_state_display() {
        let error = QuizError::InvalidState {
            operation: "submit an answer",
            phase: GamePhase::GameOver,
        };
        assert_eq!(error.to_string(), "Cannot submit an answer while game over");
    }

    #[test]
    fn test_error_kind_checks() {
        assert!(QuizError::InvalidChoice { index: 7, choices: 3 }.is_invalid_choice());
        assert!(!QuizError::EmptyItemName.is_invalid_choice());
        assert!(
            QuizError::InvalidState {
                operation: "advance",
                phase: GamePhase::Playing
            }
            .is_invalid_state()
        );
        assert!(!QuizError::DuplicateItem("France".to_string()).is_invalid_state());
    }
}
