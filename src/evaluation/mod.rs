//! Assignment scoring.
//!
//! Provides the [`Score`] type (vehicles used, then wasted capacity,
//! compared lexicographically) and the [`evaluate`] function that computes
//! it for a candidate assignment.

mod evaluator;
mod score;

pub use evaluator::evaluate;
pub use score::Score;
