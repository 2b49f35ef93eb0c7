use chrono::Utc;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::Config;
use crate::errors::LeaderboardError;
use crate::player_score::PlayerScore;
use crate::ranked_set::RankedSet;

/// Board of player ids ranked by their latest score.
pub type Leaderboard = RankedSet<u32, PlayerScore>;

/// One simulated submission: `player` now has `score`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub player: u32,
    pub score: PlayerScore,
}

/// Runs the whole simulation and prints the resulting board.
///
/// The simulated clock starts at the current wall time.
pub fn run(config: &Config) -> Result<(), LeaderboardError> {
    let mut board = Leaderboard::new(config.top);
    let clock_origin = Utc::now().timestamp_millis();

    simulate(config, &mut board, clock_origin)?;
    info!(
        "Applied {} updates from {} players, {} ranked (top {})",
        config.updates,
        config.players,
        board.len(),
        board.top()
    );

    for line in format_board(&board, config.show) {
        println!("{}", line);
    }
    for line in format_queries(&board, &config.queries) {
        println!("{}", line);
    }

    Ok(())
}

/// Generates `config.updates` score updates and applies them to `board`.
///
/// Batches are generated in parallel, a wave of `num_threads` batches at a time,
/// then applied on the calling thread in batch order. Every batch seeds its own
/// generator from `config.seed` and its index, so the outcome only depends on
/// the seed and `clock_origin`.
pub fn simulate(
    config: &Config,
    board: &mut Leaderboard,
    clock_origin: i64,
) -> Result<(), LeaderboardError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build()?;

    let num_batches = config.updates.div_ceil(config.batch_size);
    debug!(
        "Generating {} updates in {} batches of up to {}",
        config.updates, num_batches, config.batch_size
    );

    let progress = if num_batches > 1 {
        ProgressBar::new(num_batches as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {wide_bar} {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let batches: Vec<usize> = (0..num_batches).collect();
    for wave in batches.chunks(config.num_threads.max(1)) {
        let generated: Vec<Vec<ScoreUpdate>> = pool.install(|| {
            wave.par_iter()
                .progress_with(progress.clone())
                .map(|&batch| generate_batch(config, batch, clock_origin))
                .collect()
        });

        for updates in generated {
            board.extend(updates.into_iter().map(|update| (update.player, update.score)));
        }
    }
    progress.finish_and_clear();

    Ok(())
}

/// Generates the updates of batch number `batch`.
///
/// Update `n` of the whole run is stamped `clock_origin + n`: the clock ticks one
/// millisecond per update, so a later update loses a tie against an earlier one.
pub fn generate_batch(config: &Config, batch: usize, clock_origin: i64) -> Vec<ScoreUpdate> {
    let start = batch.saturating_mul(config.batch_size).min(config.updates);
    let end = start.saturating_add(config.batch_size).min(config.updates);
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(batch as u64));

    (start..end)
        .map(|tick| ScoreUpdate {
            player: rng.gen_range(1..=config.players),
            score: PlayerScore::new(
                rng.gen_range(config.min_score..=config.max_score),
                clock_origin + tick as i64,
            ),
        })
        .collect()
}

/// One line per ranked player, best first, limited to `show` lines when set.
pub fn format_board(board: &Leaderboard, show: Option<usize>) -> Vec<String> {
    board
        .iter()
        .take(show.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, (player, score))| format!("rank: {}, userid: {}, {}", index + 1, player, score))
        .collect()
}

/// Reports the rank of each queried player.
pub fn format_queries(board: &Leaderboard, queries: &[u32]) -> Vec<String> {
    queries
        .iter()
        .map(|player| match board.find(player) {
            Some(score) => format!("userid: {}, rank: {}, {}", player, board.rank(player), score),
            None => format!("userid: {}, not ranked", player),
        })
        .collect()
}
