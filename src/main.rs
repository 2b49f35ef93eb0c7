use std::process;

use clap::Parser;
use env_logger::Env;

use leaderboard::args::Args;
use leaderboard::config::Config;

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    if let Err(e) = leaderboard::run(&config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
