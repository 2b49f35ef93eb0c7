//! A bounded ranked set: keeps the best `top` entries of an unbounded stream of
//! keyed score updates, with O(1) lookup by key, O(log N) updates and
//! best-first iteration.
//!
//! The `leaderboard` binary drives it with randomly generated player scores.

mod arena;
pub mod args;
pub mod config;
pub mod errors;
pub mod player_score;
pub mod ranked_set;
pub mod simulation;
pub mod traits;


pub use player_score::PlayerScore;
pub use ranked_set::{Iter, RankedSet, DEFAULT_TOP};
pub use simulation::run;
pub use traits::Scored;
