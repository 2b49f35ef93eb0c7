use std::fmt;

use crate::traits::Scored;

/// A player's current score and the moment it was last updated.
///
/// `updated_at` is an epoch timestamp in milliseconds. Among players with the
/// same score, the one that reached it earlier ranks higher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerScore {
    pub score: u32,
    pub updated_at: i64,
}

impl PlayerScore {
    pub fn new(score: u32, updated_at: i64) -> Self {
        Self { score, updated_at }
    }
}

impl Scored for PlayerScore {
    type Score = u32;
    type TieBreaker = i64;

    fn score(&self) -> u32 {
        self.score
    }

    fn tie_breaker(&self) -> i64 {
        self.updated_at
    }
}

impl fmt::Display for PlayerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score: {}", self.score)
    }
}
