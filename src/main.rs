//! # Main — CLI Entry Point
//!
//! Parses flags into a [`RunConfig`], initialises logging, and runs the
//! simulator against an OS-seeded random stream.
//!
//! ## Options
//!
//! - `--trials`: games per strategy in the aggregate pass (default 100000).
//! - `--examples`: example games printed per strategy (default 3).
//! - `--no-trials` / `--no-examples`: skip a pass.
//! - `--strategies`: comma-separated subset of A, B, C (default all).
//! - `--exact`: show closed-form odds next to simulated rates.
//! - `--format`: `text` (default) or `json`.
//!
//! Results are written to stdout; logs go to stderr (`LOG_FORMAT=json` for
//! JSON lines, `RUST_LOG` to filter).

mod cli;

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hide_and_peek::config::{DEFAULT_EXAMPLES, DEFAULT_TRIALS};
use hide_and_peek::{OutputFormat, Strategy};

#[derive(Parser)]
#[command(
    name = "hide-and-peek",
    about = "Estimate hider win odds in the hide-and-peek mini-game"
)]
struct Cli {
    /// Games simulated per strategy in the aggregate pass
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// Example games printed per strategy
    #[arg(long, default_value_t = DEFAULT_EXAMPLES)]
    examples: u64,

    /// Skip the aggregate pass
    #[arg(long)]
    no_trials: bool,

    /// Skip the example games
    #[arg(long)]
    no_examples: bool,

    /// Strategies to simulate, comma-separated (A: all random, B: one joke hider, C: two joke hiders)
    #[arg(long, value_delimiter = ',', default_values_t = Strategy::ALL.to_vec())]
    strategies: Vec<Strategy>,

    /// Show the exact hider win probability next to each simulated rate
    #[arg(long)]
    exact: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    cli::init_logging();

    let cli = Cli::parse();
    let config = cli::run_config(&cli);

    let mut rng = SmallRng::from_os_rng();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hide_and_peek::run::run(&config, &mut rng, &mut out)
}
