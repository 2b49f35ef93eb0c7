/// Exposes the two components a [`RankedSet`](crate::RankedSet) orders its values by.
///
/// An entry ranks above another when its score is greater, or when the scores
/// are equal and its tie-breaker is smaller. A tie-breaker is typically the
/// time of the last update, so that among equal scores whoever got there first
/// ranks higher.
///
/// # Examples
///
/// ```
/// use leaderboard::traits::Scored;
///
/// struct Lap {
///     points: u16,
///     finished_at: u64,
/// }
///
/// impl Scored for Lap {
///     type Score = u16;
///     type TieBreaker = u64;
///
///     fn score(&self) -> u16 {
///         self.points
///     }
///
///     fn tie_breaker(&self) -> u64 {
///         self.finished_at
///     }
/// }
///
/// let lap = Lap { points: 12, finished_at: 3 };
/// assert_eq!(lap.score(), 12);
/// assert_eq!(lap.tie_breaker(), 3);
/// ```
pub trait Scored {
    /// Primary ordering component; higher ranks higher.
    type Score: Ord + Clone;

    /// Secondary ordering component; lower ranks higher among equal scores.
    type TieBreaker: Ord + Clone;

    fn score(&self) -> Self::Score;

    fn tie_breaker(&self) -> Self::TieBreaker;
}

/// `(score, tie_breaker)` pairs rank like any other scored value.
///
/// ```
/// use leaderboard::traits::Scored;
/// let pair = (42_i64, 7_u32);
/// assert_eq!(pair.score(), 42);
/// assert_eq!(pair.tie_breaker(), 7);
/// ```
impl<S, T> Scored for (S, T)
where
    S: Ord + Clone,
    T: Ord + Clone,
{
    type Score = S;
    type TieBreaker = T;

    fn score(&self) -> S {
        self.0.clone()
    }

    fn tie_breaker(&self) -> T {
        self.1.clone()
    }
}
