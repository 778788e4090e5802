//! # CLI Helpers
//!
//! Kept out of `main.rs` so the entry point stays slim: logging setup and
//! the mapping from parsed flags to a [`RunConfig`].

use hide_and_peek::RunConfig;
use tracing_subscriber::EnvFilter;

use super::Cli;

/// Structured logging to stderr: `LOG_FORMAT=json` for JSON lines,
/// human-readable otherwise. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

pub fn run_config(cli: &Cli) -> RunConfig {
    RunConfig {
        run_trials: !cli.no_trials,
        num_trials: cli.trials,
        run_examples: !cli.no_examples,
        num_examples: cli.examples,
        strategies: cli.strategies.clone(),
        show_exact: cli.exact,
        format: cli.format,
    }
}
