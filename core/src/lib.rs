//! Core domain logic for RestReveal.
//!
//! This crate owns the quiz state machine and the scoring engine. Everything
//! here is synchronous and deterministic; animation and timing belong to the
//! engine and the TUI.

mod answers;
pub mod errors;
mod quiz;
pub mod scoring;

pub use answers::AnswerSet;
pub use errors::QuizError;
pub use quiz::{Advance, Phase, Progress, Quiz};
pub use scoring::{CategoryScore, NeedRank, ScoreResult, compute_results, rank_categories};
