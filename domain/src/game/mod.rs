//! Game domain
//!
//! Rounds, scoring and the engine that ties them together.
//!
//! # Flow
//!
//! ```text
//! ┌──────────────┐  submit_answer   ┌──────────────────┐
//! │ Playing (N)  │ ───────────────► │ AwaitingAdvance  │
//! └──────────────┘                  └──────────────────┘
//!        ▲                             │            │
//!        │   advance (N < rounds)      │            │ advance (N == rounds)
//!        └─────────────────────────────┘            ▼
//!                                           ┌──────────────┐
//!          start_game ◄──────────────────── │   GameOver   │
//!                                           └──────────────┘
//! ```
//!
//! A correct answer is worth +1, a wrong one -2.

pub mod engine;
pub mod outcome;
pub mod pool;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod state;

pub use engine::QuizEngine;
pub use outcome::{Advance, AnswerResult, Outcome};
pub use pool::ItemPool;
pub use round::{Round, RoundView};
pub use rules::{CHOICES_PER_ROUND, DEFAULT_ROUNDS_PER_GAME, GameRules};
pub use state::{GamePhase, GameState};
