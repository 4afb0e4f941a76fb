//! Quiz engine
//!
//! Owns the item pool, the current round and the game state, and moves
//! them through the game's phases. The only side effect is drawing from
//! the injected [`RandomSource`].

use super::outcome::{Advance, AnswerResult, Outcome};
use super::pool::ItemPool;
use super::round::{Round, RoundView};
use super::rules::{CHOICES_PER_ROUND, GameRules};
use super::state::{GamePhase, GameState};
use crate::core::error::QuizError;
use crate::random::RandomSource;

/// Round-based quiz engine
///
/// # Example
///
/// ```
/// use flagquiz_domain::{Advance, GameRules, ItemPool, QuizEngine};
/// use flagquiz_domain::random::SequenceRandom;
///
/// let pool = ItemPool::from_names(["France", "Germany", "Italy", "Spain"]).unwrap();
/// let mut engine = QuizEngine::new(pool, GameRules::default(), SequenceRandom::zeros());
///
/// let view = engine.current_round();
/// let correct = view.position_of(view.target.name()).unwrap();
/// let result = engine.submit_answer(correct).unwrap();
/// assert!(result.is_correct());
/// assert_eq!(engine.current_score(), 1);
///
/// assert!(matches!(engine.advance().unwrap(), Advance::NextRound(_)));
/// ```
#[derive(Debug)]
pub struct QuizEngine<R: RandomSource> {
    pool: ItemPool,
    rules: GameRules,
    rng: R,
    round: Round,
    state: GameState,
}

impl<R: RandomSource> QuizEngine<R> {
    /// Create an engine with its first game already started
    pub fn new(pool: ItemPool, rules: GameRules, rng: R) -> Self {
        let mut pool = pool;
        let mut rng = rng;
        let round = draw_round(&mut pool, &mut rng, 1);

        Self {
            pool,
            rules,
            rng,
            round,
            state: GameState::new(&rules),
        }
    }

    /// Reset score and round count, and deal the first round of a new game
    pub fn start_game(&mut self) -> RoundView {
        self.state = GameState::new(&self.rules);
        self.new_round()
    }

    /// Reshuffle the pool and deal a new round
    ///
    /// This does not check whether the game is over; [`QuizEngine::advance`]
    /// is the guarded way to move on. Calling this after the last answer
    /// without [`QuizEngine::start_game`] breaks the round count.
    pub fn new_round(&mut self) -> RoundView {
        let number = self.state.rounds_played() + 1;
        self.round = draw_round(&mut self.pool, &mut self.rng, number);
        self.state.set_phase(GamePhase::Playing);
        self.round.view()
    }

    /// Answer the current round with the choice at `choice_index`
    ///
    /// Fails without touching any state when no round is waiting for an
    /// answer, or when the index is not one of the displayed positions.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<AnswerResult, QuizError> {
        let phase = self.state.phase();
        if phase != GamePhase::Playing {
            return Err(QuizError::InvalidState {
                operation: "submit an answer",
                phase,
            });
        }
        if choice_index >= CHOICES_PER_ROUND {
            return Err(QuizError::InvalidChoice {
                index: choice_index,
                choices: CHOICES_PER_ROUND,
            });
        }

        let outcome = if self.round.is_correct(choice_index) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        let score_after = self.state.record(outcome);

        Ok(AnswerResult {
            round: self.round.number(),
            outcome,
            score_after,
            chosen_index: choice_index,
            chosen: self.round.choices()[choice_index].clone(),
            correct: self.round.target().clone(),
            game_over: self.state.is_game_over(),
        })
    }

    /// Dismiss the last result
    ///
    /// Deals the next round while rounds remain. Once the last round was
    /// answered it moves to [`GamePhase::GameOver`] and only reports the
    /// final score; repeated calls keep reporting it.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        match self.state.phase() {
            GamePhase::Playing => Err(QuizError::InvalidState {
                operation: "advance",
                phase: GamePhase::Playing,
            }),
            GamePhase::GameOver => Ok(Advance::GameOver {
                final_score: self.state.score(),
            }),
            GamePhase::AwaitingAdvance if self.state.is_game_over() => {
                self.state.set_phase(GamePhase::GameOver);
                Ok(Advance::GameOver {
                    final_score: self.state.score(),
                })
            }
            GamePhase::AwaitingAdvance => Ok(Advance::NextRound(self.new_round())),
        }
    }

    pub fn current_score(&self) -> i64 {
        self.state.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The round on display, without the correct position
    pub fn current_round(&self) -> RoundView {
        self.round.view()
    }

    pub fn rounds_played(&self) -> usize {
        self.state.rounds_played()
    }

    pub fn rounds_per_game(&self) -> usize {
        self.rules.rounds_per_game()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }
}

/// Shuffle the pool and take the first three items as the round's choices
fn draw_round<R: RandomSource>(pool: &mut ItemPool, rng: &mut R, number: usize) -> Round {
    rng.shuffle(pool.items_mut());

    let items = pool.items();
    let choices = [items[0].clone(), items[1].clone(), items[2].clone()];
    let correct_index = rng.pick(CHOICES_PER_ROUND) % CHOICES_PER_ROUND;

    Round::new(number, choices, correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use std::collections::HashSet;

    const COUNTRIES: [&str; 11] = [
        "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia",
        "Spain", "UK", "US",
    ];

    fn engine_with(rng: SequenceRandom) -> QuizEngine<SequenceRandom> {
        let pool = ItemPool::from_names(COUNTRIES).unwrap();
        QuizEngine::new(pool, GameRules::default(), rng)
    }

    fn engine() -> QuizEngine<SequenceRandom> {
        engine_with(SequenceRandom::new(vec![4, 1, 9, 2, 7, 0, 5, 3, 8, 6]))
    }

    fn correct_index(engine: &QuizEngine<SequenceRandom>) -> usize {
        let view = engine.current_round();
        view.position_of(view.target.name()).unwrap()
    }

    fn wrong_index(engine: &QuizEngine<SequenceRandom>) -> usize {
        (correct_index(engine) + 1) % CHOICES_PER_ROUND
    }

    #[test]
    fn test_new_engine_starts_playing() {
        let engine = engine();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.rounds_played(), 0);
        assert!(!engine.is_game_over());
        assert_eq!(engine.current_round().number, 1);
    }

    #[test]
    fn test_all_correct_scores_three_and_ends_game() {
        let mut engine = engine();

        for round in 1..=3 {
            let result = engine.submit_answer(correct_index(&engine)).unwrap();
            assert!(result.is_correct());
            assert_eq!(result.round, round);
            assert_eq!(result.score_after, round as i64);

            if round < 3 {
                assert!(!result.game_over);
                assert!(matches!(engine.advance().unwrap(), Advance::NextRound(_)));
            } else {
                assert!(result.game_over);
            }
        }

        assert_eq!(engine.current_score(), 3);
        assert!(engine.is_game_over());
        assert_eq!(
            engine.advance().unwrap(),
            Advance::GameOver { final_score: 3 }
        );
        assert_eq!(engine.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_one_wrong_then_two_correct_scores_zero() {
        let mut engine = engine();

        let wrong = wrong_index(&engine);
        let result = engine.submit_answer(wrong).unwrap();
        assert_eq!(result.outcome, Outcome::Incorrect);
        assert_eq!(result.score_after, -2);
        assert_eq!(
            result.mistaken_item(),
            Some(&engine.current_round().choices[wrong])
        );
        engine.advance().unwrap();

        engine.submit_answer(correct_index(&engine)).unwrap();
        engine.advance().unwrap();
        let last = engine.submit_answer(correct_index(&engine)).unwrap();

        assert_eq!(last.score_after, 0);
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_score_update_law() {
        let mut engine = engine();
        let picks = [0, 2, 1];

        for pick in picks {
            let before = engine.current_score();
            let expected = if pick == correct_index(&engine) {
                before + 1
            } else {
                before - 2
            };
            let result = engine.submit_answer(pick).unwrap();
            assert_eq!(result.score_after, expected);
            assert_eq!(engine.current_score(), expected);
            engine.advance().unwrap();
        }
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut engine = engine();
        for _ in 0..3 {
            let wrong = wrong_index(&engine);
            engine.submit_answer(wrong).unwrap();
            engine.advance().unwrap();
        }
        assert_eq!(engine.current_score(), -6);
    }

    #[test]
    fn test_no_submit_after_game_over() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.submit_answer(0).unwrap();
            engine.advance().unwrap();
        }
        assert!(engine.is_game_over());

        let err = engine.submit_answer(0).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidState {
                operation: "submit an answer",
                phase: GamePhase::GameOver
            }
        );
    }

    #[test]
    fn test_no_second_submit_before_advance() {
        let mut engine = engine();
        engine.submit_answer(1).unwrap();

        let err = engine.submit_answer(1).unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(engine.rounds_played(), 1);
    }

    #[test]
    fn test_submit_after_last_answer_rejected_before_advance() {
        let mut engine = engine();
        for i in 0..3 {
            engine.submit_answer(0).unwrap();
            if i < 2 {
                engine.advance().unwrap();
            }
        }
        assert!(engine.is_game_over());
        assert_eq!(engine.phase(), GamePhase::AwaitingAdvance);
        assert!(engine.submit_answer(0).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_out_of_range_choice_leaves_state_unchanged() {
        let mut engine = engine();
        let state_before = engine.state().clone();
        let round_before = engine.current_round();

        let err = engine.submit_answer(3).unwrap_err();

        assert_eq!(
            err,
            QuizError::InvalidChoice {
                index: 3,
                choices: 3
            }
        );
        assert_eq!(engine.state(), &state_before);
        assert_eq!(engine.current_round(), round_before);
        // The round is still answerable
        assert!(engine.submit_answer(0).is_ok());
    }

    #[test]
    fn test_advance_while_playing_is_rejected() {
        let mut engine = engine();
        let err = engine.advance().unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidState {
                operation: "advance",
                phase: GamePhase::Playing
            }
        );
    }

    #[test]
    fn test_advance_after_game_over_keeps_signalling() {
        let mut engine = engine();
        for _ in 0..3 {
            engine.submit_answer(2).unwrap();
            engine.advance().unwrap();
        }
        let score = engine.current_score();
        let round = engine.current_round();

        assert_eq!(
            engine.advance().unwrap(),
            Advance::GameOver { final_score: score }
        );
        assert_eq!(engine.current_round(), round);
        assert_eq!(engine.rounds_played(), 3);
    }

    #[test]
    fn test_start_game_resets_after_game_over() {
        let mut engine = engine();
        for _ in 0..3 {
            let wrong = wrong_index(&engine);
            engine.submit_answer(wrong).unwrap();
            engine.advance().unwrap();
        }
        assert_eq!(engine.phase(), GamePhase::GameOver);

        let view = engine.start_game();

        assert_eq!(view.number, 1);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.rounds_played(), 0);
        assert!(!engine.is_game_over());
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.current_round(), view);
        assert!(engine.submit_answer(correct_index(&engine)).is_ok());
    }

    #[test]
    fn test_start_game_mid_game_restarts() {
        let mut engine = engine();
        engine.submit_answer(wrong_index(&engine)).unwrap();

        engine.start_game();

        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_rounds_have_distinct_choices_and_valid_target() {
        let values: Vec<usize> = (0..97).map(|i| (i * 7 + 3) % 13).collect();
        let mut engine = engine_with(SequenceRandom::new(values));

        for _ in 0..50 {
            let view = engine.new_round();
            let names: HashSet<&str> = view.choices.iter().map(|item| item.name()).collect();
            assert_eq!(names.len(), CHOICES_PER_ROUND);
            assert!(names.iter().all(|name| engine.pool().contains(name)));

            let index = view.position_of(view.target.name()).unwrap();
            assert!(index < CHOICES_PER_ROUND);
        }
    }

    #[test]
    fn test_misbehaving_random_source_cannot_break_correct_index() {
        struct Huge;
        impl RandomSource for Huge {
            fn pick(&mut self, upper: usize) -> usize {
                upper + 41
            }
            fn shuffle<T>(&mut self, _items: &mut [T])
            where
                Self: Sized,
            {
            }
        }

        let pool = ItemPool::from_names(["a", "b", "c"]).unwrap();
        let engine = QuizEngine::new(pool, GameRules::default(), Huge);
        let view = engine.current_round();
        assert!(view.position_of(view.target.name()).unwrap() < CHOICES_PER_ROUND);
    }

    #[test]
    fn test_same_sequence_same_game() {
        let a = engine();
        let b = engine();
        assert_eq!(a.current_round(), b.current_round());
    }

    #[test]
    fn test_read_accessors_are_idempotent() {
        let engine = engine();
        assert_eq!(engine.current_score(), engine.current_score());
        assert_eq!(engine.is_game_over(), engine.is_game_over());
        assert_eq!(engine.current_round(), engine.current_round());
        assert_eq!(engine.phase(), engine.phase());
    }

    #[test]
    fn test_custom_round_count() {
        let pool = ItemPool::from_names(COUNTRIES).unwrap();
        let mut engine = QuizEngine::new(pool, GameRules::new(5).unwrap(), SequenceRandom::zeros());

        for _ in 0..4 {
            engine.submit_answer(0).unwrap();
            assert!(matches!(engine.advance().unwrap(), Advance::NextRound(_)));
        }
        engine.submit_answer(0).unwrap();
        assert!(engine.advance().unwrap().is_game_over());
        assert_eq!(engine.rounds_per_game(), 5);
    }
}
