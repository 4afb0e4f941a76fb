//! Progress reporting for a running game

use crate::output::console::ConsoleFormatter;
use flagquiz_application::{GameProgressNotifier, GameReport};
use flagquiz_domain::{AnswerResult, RoundView};

/// Prints rounds, results and the game-over screen to stdout
pub struct ConsoleProgress {
    rounds_per_game: usize,
}

impl ConsoleProgress {
    pub fn new(rounds_per_game: usize) -> Self {
        Self { rounds_per_game }
    }
}

impl GameProgressNotifier for ConsoleProgress {
    fn on_round_start(&self, round: &RoundView, score: i64) {
        println!();
        print!(
            "{}",
            ConsoleFormatter::format_round(round, score, self.rounds_per_game)
        );
    }

    fn on_answer(&self, result: &AnswerResult) {
        print!("{}", ConsoleFormatter::format_result(result));
    }

    fn on_game_over(&self, report: &GameReport) {
        print!("{}", ConsoleFormatter::format_game_over(report));
    }
}
