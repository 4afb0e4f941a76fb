//! Round entity and its display view

use super::rules::CHOICES_PER_ROUND;
use crate::core::item::Item;
use serde::{Deserialize, Serialize};

/// One round: three displayed items and the position of the correct one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    number: usize,
    choices: [Item; CHOICES_PER_ROUND],
    correct_index: usize,
}

impl Round {
    /// Create a round
    ///
    /// # Panics
    /// Panics if `correct_index` is not a valid choice position
    pub fn new(number: usize, choices: [Item; CHOICES_PER_ROUND], correct_index: usize) -> Self {
        assert!(
            correct_index < CHOICES_PER_ROUND,
            "correct index {correct_index} out of range"
        );
        Self {
            number,
            choices,
            correct_index,
        }
    }

    /// Round number (1-indexed)
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn choices(&self) -> &[Item; CHOICES_PER_ROUND] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The item the player has to find
    pub fn target(&self) -> &Item {
        &self.choices[self.correct_index]
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// The display-safe view of this round
    pub fn view(&self) -> RoundView {
        RoundView {
            number: self.number,
            target: self.target().clone(),
            choices: self.choices.clone(),
        }
    }
}

/// What the display layer is allowed to see of a round
///
/// Carries the item to find and the three choices in display order, but
/// not the position of the correct choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Round number (1-indexed)
    pub number: usize,
    /// Item the player is asked to find
    pub target: Item,
    /// Displayed choices
    pub choices: [Item; CHOICES_PER_ROUND],
}

impl RoundView {
    /// Position of a choice by name
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.choices.iter().position(|item| item.name() == name)
    }
}
