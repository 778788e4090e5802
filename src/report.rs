//! # Report — Console and JSON Rendering
//!
//! Turns engine output into what the operator sees: per-strategy hider win
//! percentages, the best strategy (ties are called out explicitly instead of
//! letting the first strategy win), and example game listings.
//!
//! Text rendering is line-for-line stable so it can be asserted on in CLI
//! tests. JSON rendering serialises the same [`Report`] with serde.

use serde::Serialize;
use std::fmt::Write;

use crate::spot::format_spots;
use crate::strategy::Strategy;
use crate::trial::Trial;

/// Aggregate result for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub win_rate: f64,
    /// Closed-form hider win probability, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<f64>,
}

/// Winner of the strategy comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Best {
    Single { strategy: Strategy, win_rate: f64 },
    Tie { strategies: Vec<Strategy>, win_rate: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSummary {
    pub trials: u64,
    pub results: Vec<StrategyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Best>,
}

impl TrialSummary {
    pub fn new(trials: u64, results: Vec<StrategyResult>) -> Self {
        let best = best_strategy(&results);
        TrialSummary {
            trials,
            results,
            best,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleSet {
    pub strategy: Strategy,
    pub games: Vec<Trial>,
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TrialSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ExampleSet>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.examples.is_empty()
    }
}

pub const NOTHING_ENABLED: &str = "Both set to false; enable something!";

/// Highest win rate, or every strategy sharing it. `None` for no results.
pub fn best_strategy(results: &[StrategyResult]) -> Option<Best> {
    let top = results
        .iter()
        .map(|r| r.win_rate)
        .fold(None, |best: Option<f64>, rate| match best {
            Some(b) if b >= rate => Some(b),
            _ => Some(rate),
        })?;
    let leaders: Vec<Strategy> = results
        .iter()
        .filter(|r| r.win_rate == top)
        .map(|r| r.strategy)
        .collect();
    match leaders.as_slice() {
        [only] => Some(Best::Single {
            strategy: *only,
            win_rate: top,
        }),
        _ => Some(Best::Tie {
            strategies: leaders,
            win_rate: top,
        }),
    }
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// "A", "A and B", "A, B and C".
fn join_labels(strategies: &[Strategy]) -> String {
    match strategies {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|s| s.to_string()).collect();
            format!("{} and {}", head.join(", "), last)
        }
    }
}

pub fn format_best(best: &Best) -> String {
    match best {
        Best::Single { strategy, win_rate } => format!(
            "Best strategy: Strategy {} with {} hider win rate",
            strategy,
            percent(*win_rate)
        ),
        Best::Tie {
            strategies,
            win_rate,
        } => format!(
            "Strategies {} tie with {} hider win rate",
            join_labels(strategies),
            percent(*win_rate)
        ),
    }
}

pub fn format_summary(summary: &TrialSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Simulation results ---");
    let _ = writeln!(out, "{} trials run for all strategies", summary.trials);
    let _ = writeln!(out);
    for result in &summary.results {
        let _ = write!(
            out,
            "Strategy {} hider win percentage: {}",
            result.strategy,
            percent(result.win_rate)
        );
        if let Some(exact) = result.exact {
            let _ = write!(out, " (exact: {})", percent(exact));
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out);
    if let Some(best) = &summary.best {
        let _ = writeln!(out, "{}", format_best(best));
        let _ = writeln!(out);
    }
    out
}

pub fn format_examples(examples: &ExampleSet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "-- {} example games for Strategy {} --",
        examples.games.len(),
        examples.strategy
    );
    for (i, game) in examples.games.iter().enumerate() {
        let _ = writeln!(out, "Game {}:", i + 1);
        let _ = writeln!(out, "  Hider spots: {}", format_spots(game.hider_spots));
        let _ = writeln!(out, "  Search spots: {}", format_spots(game.search_spots.iter()));
        let _ = writeln!(out, "  Winner: {}", game.winner);
        let _ = writeln!(out);
    }
    out
}

/// Console rendering. Each section is preceded by a blank line.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    if let Some(summary) = &report.summary {
        out.push('\n');
        out.push_str(&format_summary(summary));
    }
    if !report.examples.is_empty() {
        out.push('\n');
        for set in &report.examples {
            out.push_str(&format_examples(set));
        }
    }
    if report.is_empty() {
        out.push('\n');
        out.push_str(NOTHING_ENABLED);
        out.push_str("\n\n");
    }
    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
