//! Core domain concepts shared across the quiz.
//!
//! - [`item::Item`] : a labelled candidate (a country and its flag)
//! - [`error::QuizError`] : domain-level errors

pub mod error;
pub mod item;
