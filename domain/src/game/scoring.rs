//! Scoring policy
//!
//! A correct answer earns one point, a wrong one costs two. The score is
//! not clamped in either direction, so a bad game ends below zero.

use super::outcome::Outcome;

/// Points awarded for a correct answer
pub const CORRECT_POINTS: i64 = 1;

/// Points deducted for an incorrect answer
pub const INCORRECT_PENALTY: i64 = 2;

/// Score change for an outcome
pub fn score_delta(outcome: Outcome) -> i64 {
    match outcome {
        Outcome::Correct => CORRECT_POINTS,
        Outcome::Incorrect => -INCORRECT_PENALTY,
    }
}

/// Apply an outcome to a score
pub fn apply(score: i64, outcome: Outcome) -> i64 {
    score + score_delta(outcome)
}
