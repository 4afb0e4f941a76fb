//! Game state entity

use super::outcome::Outcome;
use super::rules::GameRules;
use super::scoring;
use serde::{Deserialize, Serialize};

/// Phase of a game
///
/// ```text
/// start_game ──► Playing ──submit_answer──► AwaitingAdvance
///                  ▲                              │
///                  └──── advance (rounds left) ───┤
///                                                 └── advance (last round) ──► GameOver
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// A round is displayed and waiting for an answer
    Playing,
    /// An answer was submitted; the result is on screen
    AwaitingAdvance,
    /// All rounds were played and the final score was shown
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::AwaitingAdvance => "awaiting_advance",
            GamePhase::GameOver => "game_over",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::AwaitingAdvance => "awaiting advance",
            GamePhase::GameOver => "game over",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Score and progress of the current game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    score: i64,
    rounds_played: usize,
    rounds_per_game: usize,
    phase: GamePhase,
}

impl GameState {
    /// A fresh game: no score, no rounds played
    pub fn new(rules: &GameRules) -> Self {
        Self {
            score: 0,
            rounds_played: 0,
            rounds_per_game: rules.rounds_per_game(),
            phase: GamePhase::Playing,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn rounds_per_game(&self) -> usize {
        self.rounds_per_game
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// True once every round of the game has been answered
    pub fn is_game_over(&self) -> bool {
        self.rounds_played >= self.rounds_per_game
    }

    /// Record an answer: update the score and count the round
    pub(crate) fn record(&mut self, outcome: Outcome) -> i64 {
        self.score = scoring::apply(self.score, outcome);
        self.rounds_played += 1;
        self.phase = GamePhase::AwaitingAdvance;
        self.score
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }
}
