//! Game progress notification port
//!
//! Defines the interface for reporting what happens during a game.

use crate::use_cases::play_game::GameReport;
use flagquiz_domain::{AnswerResult, RoundView};

/// Callback for progress updates during a game
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, log, etc.)
pub trait GameProgressNotifier {
    /// Called when a round is dealt
    fn on_round_start(&self, round: &RoundView, score: i64);

    /// Called after an answer was scored
    fn on_answer(&self, result: &AnswerResult);

    /// Called once the game ends, whether finished or abandoned
    fn on_game_over(&self, report: &GameReport);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GameProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: &RoundView, _score: i64) {}
    fn on_answer(&self, _result: &AnswerResult) {}
    fn on_game_over(&self, _report: &GameReport) {}
}
