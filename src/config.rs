use crate::args::Args;
use crate::errors::LeaderboardError;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `top` - Requested board capacity, `None` or `Some(0)` selects the default
/// * `players` - Player ids are drawn from `1..=players`
/// * `updates` - Total number of score updates to simulate
/// * `min_score` - Lowest score an update can carry
/// * `max_score` - Highest score an update can carry
/// * `show` - Number of ranks to print, `None` prints the whole board
/// * `batch_size` - Number of updates generated per batch
/// * `num_threads` - Number of threads used to generate batches
/// * `seed` - Seed of the first batch, later batches offset it by their index
/// * `queries` - Player ids whose rank is reported after the run
///
#[derive(Clone, Debug)]
pub struct Config {
    pub top: Option<usize>,
    pub players: u32,
    pub updates: usize,
    pub min_score: u32,
    pub max_score: u32,
    pub show: Option<usize>,
    pub batch_size: usize,
    pub num_threads: usize,
    pub seed: u64,
    pub queries: Vec<u32>,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Details
    ///
    /// This function performs the following setup:
    /// 1. Validates the score range, the player count and the batch size
    /// 2. Uses the requested thread count, or the number of available CPU cores
    /// 3. Uses the requested seed, or draws and logs a random one so the run can be replayed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `min_score` is greater than `max_score`
    /// * `players` is 0 while updates were requested
    /// * `batch_size` is 0
    ///
    pub fn build(args: &Args) -> Result<Config, LeaderboardError> {
        if args.min_score > args.max_score {
            return Err(LeaderboardError::InvalidScoreRange {
                min: args.min_score,
                max: args.max_score,
            });
        }
        if args.players == 0 && args.updates > 0 {
            return Err(LeaderboardError::NoPlayers);
        }
        if args.batch_size == 0 {
            return Err(LeaderboardError::ZeroBatchSize);
        }

        let num_threads = match args.threads {
            Some(threads) if threads > 0 => threads,
            _ => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };
        log::debug!("Generating updates using {} threads", num_threads);

        let seed = args.seed.unwrap_or_else(|| {
            let seed = rand::random();
            log::info!("No seed provided, using {}", seed);
            seed
        });

        Ok(Config {
            top: args.top,
            players: args.players,
            updates: args.updates,
            min_score: args.min_score,
            max_score: args.max_score,
            show: args.show,
            batch_size: args.batch_size,
            num_threads,
            seed,
            queries: args.queries.clone(),
        })
    }
}
