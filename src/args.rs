use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) Number of entries the board retains, 0 or unset uses the default of 1000
    #[arg(short = 'n', long = "top")]
    pub top: Option<usize>,

    /// (optional) Number of distinct players submitting scores
    #[arg(short = 'p', long = "players", default_value_t = 10)]
    pub players: u32,

    /// (optional) Number of score updates to simulate
    #[arg(short = 'u', long = "updates", default_value_t = 10)]
    pub updates: usize,

    /// (optional) Lowest score a single update can carry
    #[arg(long = "min-score", default_value_t = 50)]
    pub min_score: u32,

    /// (optional) Highest score a single update can carry
    #[arg(long = "max-score", default_value_t = 100)]
    pub max_score: u32,

    /// (optional) Number of ranks to print, defaults to the whole board
    #[arg(short = 's', long = "show")]
    pub show: Option<usize>,

    /// (optional) Number of updates generated per batch
    #[arg(short = 'b', long = "batch-size", default_value_t = 1000)]
    pub batch_size: usize,

    /// (optional) Worker threads used to generate updates, defaults to available parallelism
    #[arg(short = 'j', long = "threads")]
    pub threads: Option<usize>,

    /// (optional) Seed for the score generator, random when unset
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// (optional) Player id whose rank should be reported, may be repeated
    #[arg(short = 'q', long = "query")]
    pub queries: Vec<u32>,

    #[arg(short, long)]
    pub verbose: bool,
}
