//! # Run — Top-Level Orchestration
//!
//! Drives one simulator invocation from a [`RunConfig`]:
//!
//! 1. validate the configuration,
//! 2. aggregate pass: `num_trials` games per strategy reduced to win rates,
//! 3. example pass: `num_examples` recorded games per strategy,
//! 4. render the [`Report`] as text or JSON into the given writer.
//!
//! The random stream is borrowed for the whole run and consumed in that
//! order, so a seeded generator reproduces the same report.

use anyhow::Result;
use rand::Rng;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::{OutputFormat, RunConfig};
use crate::engine;
use crate::exact::exact_hider_win_probability;
use crate::report::{self, ExampleSet, Report, StrategyResult, TrialSummary};

/// Run every enabled pass and collect the results.
pub fn build_report<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<Report> {
    config.validate()?;

    let mut report = Report::default();

    if config.run_trials {
        let start = Instant::now();
        let mut results = Vec::with_capacity(config.strategies.len());
        for &strategy in &config.strategies {
            let win_rate = engine::win_rate(strategy, config.num_trials, &mut *rng)?;
            info!(
                strategy = %strategy,
                trials = config.num_trials,
                win_rate = format_args!("{:.4}", win_rate),
                "strategy simulated"
            );
            results.push(StrategyResult {
                strategy,
                win_rate,
                exact: config
                    .show_exact
                    .then(|| exact_hider_win_probability(strategy)),
            });
        }
        info!(
            strategies = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "trial pass complete"
        );
        report.summary = Some(TrialSummary::new(config.num_trials, results));
    }

    if config.run_examples {
        for &strategy in &config.strategies {
            let games = engine::example_games(strategy, config.num_examples, &mut *rng);
            report.examples.push(ExampleSet { strategy, games });
        }
    }

    if config.is_idle() {
        warn!("trials and examples are both disabled");
    }

    Ok(report)
}

/// Build the report and write it to `out` in the configured format.
pub fn run<R: Rng + ?Sized, W: Write>(config: &RunConfig, rng: &mut R, out: &mut W) -> Result<()> {
    info!(
        run_trials = config.run_trials,
        num_trials = config.num_trials,
        run_examples = config.run_examples,
        num_examples = config.num_examples,
        "simulation starting"
    );
    let report = build_report(config, rng)?;
    match config.format {
        OutputFormat::Text => out.write_all(report::render_text(&report).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&report)?)?,
    }
    out.flush()?;
    Ok(())
}
