//! Run configuration: which passes to run, how many games, which strategies,
//! and how to render the result.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

pub const DEFAULT_TRIALS: u64 = 100_000;
pub const DEFAULT_EXAMPLES: u64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one simulator run.
///
/// The defaults run both passes: 100,000 aggregate trials per strategy and
/// three example games per strategy, for strategies A, B and C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub run_trials: bool,
    pub num_trials: u64,
    pub run_examples: bool,
    pub num_examples: u64,
    pub strategies: Vec<Strategy>,
    /// Print the closed-form odds next to each simulated rate.
    pub show_exact: bool,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            run_trials: true,
            num_trials: DEFAULT_TRIALS,
            run_examples: true,
            num_examples: DEFAULT_EXAMPLES,
            strategies: Strategy::ALL.to_vec(),
            show_exact: false,
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.run_trials && self.num_trials == 0 {
            anyhow::bail!("num_trials must be at least 1 when trials are enabled");
        }
        if self.strategies.is_empty() {
            anyhow::bail!("at least one strategy is required");
        }
        for (i, s) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(s) {
                anyhow::bail!("strategy {} is listed more than once", s);
            }
        }
        Ok(())
    }

    /// Neither pass is enabled.
    pub fn is_idle(&self) -> bool {
        !self.run_trials && !self.run_examples
    }
}
