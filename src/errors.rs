/// Error type for the leaderboard simulation.
///
/// The ranked set itself has no failure modes; these errors come from
/// validating the command line and from setting up the worker pool that
/// generates score updates.
#[derive(Debug)]
pub enum LeaderboardError {
    /// The lowest possible score is above the highest one.
    InvalidScoreRange { min: u32, max: u32 },

    /// Updates were requested for an empty player pool.
    NoPlayers,

    /// Updates cannot be generated in batches of zero.
    ZeroBatchSize,

    /// The rayon thread pool could not be built.
    ///
    /// Wraps [`rayon::ThreadPoolBuildError`], which is exposed as the error's source.
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl From<rayon::ThreadPoolBuildError> for LeaderboardError {
    /// Lets pool construction use the `?` operator.
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        LeaderboardError::ThreadPool(err)
    }
}

impl std::fmt::Display for LeaderboardError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use leaderboard::errors::LeaderboardError;
    /// let err = LeaderboardError::InvalidScoreRange { min: 90, max: 10 };
    /// assert_eq!(format!("{}", err), "Invalid score range: min 90 is greater than max 10");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::InvalidScoreRange { min, max } => write!(
                f,
                "Invalid score range: min {} is greater than max {}",
                min, max
            ),
            LeaderboardError::NoPlayers => write!(f, "Invalid player count: at least one player is required"),
            LeaderboardError::ZeroBatchSize => write!(f, "Invalid batch size: must be at least 1"),
            LeaderboardError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
        }
    }
}

impl std::error::Error for LeaderboardError {
    /// Only [`LeaderboardError::ThreadPool`] wraps another error.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}
