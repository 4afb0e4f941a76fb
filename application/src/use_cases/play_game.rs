//! Play Game use case
//!
//! Drives one full game through the engine: deal, ask, score, acknowledge,
//! advance, until the game is over or the player quits.

use crate::ports::answer_source::{AnswerSource, AnswerSourceError, PlayerAction};
use crate::ports::progress::{GameProgressNotifier, NoProgress};
use flagquiz_domain::{
    Advance, AnswerResult, Outcome, QuizEngine, QuizError, RandomSource, RoundView,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Invalid choices tolerated in a single round before giving up on the source
pub const MAX_INVALID_CHOICES: usize = 10;

/// Errors that can occur while playing a game
#[derive(Error, Debug)]
pub enum PlayGameError {
    #[error("Answer source failed: {0}")]
    AnswerSource(#[from] AnswerSourceError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Gave up after {0} invalid choices in one round")]
    TooManyInvalidChoices(usize),
}

/// One answered round, as kept in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    pub target: String,
    pub chosen: String,
    pub outcome: Outcome,
    pub score_after: i64,
}

impl From<&AnswerResult> for RoundRecord {
    fn from(result: &AnswerResult) -> Self {
        Self {
            round: result.round,
            target: result.correct.name().to_string(),
            chosen: result.chosen.name().to_string(),
            outcome: result.outcome,
            score_after: result.score_after,
        }
    }
}

/// Summary of a played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub final_score: i64,
    pub rounds_played: usize,
    pub rounds_per_game: usize,
    /// False when the player quit before the last round
    pub completed: bool,
    pub rounds: Vec<RoundRecord>,
}

impl GameReport {
    pub fn correct_count(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.outcome.is_correct())
            .count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.rounds.len() - self.correct_count()
    }
}

/// Use case for playing games on one engine
pub struct PlayGameUseCase<R: RandomSource> {
    engine: QuizEngine<R>,
}

impl<R: RandomSource> PlayGameUseCase<R> {
    pub fn new(engine: QuizEngine<R>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &QuizEngine<R> {
        &self.engine
    }

    /// Play a fresh game with default (no-op) progress
    pub fn execute(
        &mut self,
        answers: &mut dyn AnswerSource,
    ) -> Result<GameReport, PlayGameError> {
        self.execute_with_progress(answers, &NoProgress)
    }

    /// Play a fresh game with progress callbacks
    pub fn execute_with_progress(
        &mut self,
        answers: &mut dyn AnswerSource,
        progress: &dyn GameProgressNotifier,
    ) -> Result<GameReport, PlayGameError> {
        let mut view = self.engine.start_game();
        let mut records = Vec::new();

        info!(
            "Starting game with {} rounds over {} items",
            self.engine.rounds_per_game(),
            self.engine.pool().len()
        );

        loop {
            progress.on_round_start(&view, self.engine.current_score());

            let Some(result) = self.answer_round(&view, answers)? else {
                info!(
                    "Game abandoned after {} of {} rounds",
                    self.engine.rounds_played(),
                    self.engine.rounds_per_game()
                );
                return Ok(self.finish(records, false, progress));
            };

            debug!(
                "Round {}: {} (target {}, chosen {}), score {}",
                result.round, result.outcome, result.correct, result.chosen, result.score_after
            );
            progress.on_answer(&result);
            records.push(RoundRecord::from(&result));
            answers.acknowledge(&result)?;

            match self.engine.advance()? {
                Advance::NextRound(next) => view = next,
                Advance::GameOver { final_score } => {
                    info!("Game over, final score {}", final_score);
                    return Ok(self.finish(records, true, progress));
                }
            }
        }
    }

    /// Ask until the source gives a usable answer or quits
    fn answer_round(
        &mut self,
        view: &RoundView,
        answers: &mut dyn AnswerSource,
    ) -> Result<Option<AnswerResult>, PlayGameError> {
        let mut invalid = 0;

        loop {
            let index = match answers.choose(view, self.engine.current_score())? {
                PlayerAction::Quit => return Ok(None),
                PlayerAction::Choose(index) => index,
            };

            match self.engine.submit_answer(index) {
                Ok(result) => return Ok(Some(result)),
                Err(e) if e.is_invalid_choice() => {
                    invalid += 1;
                    warn!("Rejected answer for round {}: {}", view.number, e);
                    if invalid >= MAX_INVALID_CHOICES {
                        return Err(PlayGameError::TooManyInvalidChoices(invalid));
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn finish(
        &self,
        rounds: Vec<RoundRecord>,
        completed: bool,
        progress: &dyn GameProgressNotifier,
    ) -> GameReport {
        let report = GameReport {
            final_score: self.engine.current_score(),
            rounds_played: self.engine.rounds_played(),
            rounds_per_game: self.engine.rounds_per_game(),
            completed,
            rounds,
        };
        progress.on_game_over(&report);
        report
    }
}
