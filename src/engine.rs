//! # Engine — Batched Trials per Strategy
//!
//! Runs `trial_count` independent games for one strategy and either reduces
//! them to a hider win rate (aggregate mode) or hands back every game record
//! (detail mode). Trials share nothing but the random stream, which is
//! consumed sequentially in the order the games are played.

use rand::Rng;
use tracing::debug;

use crate::error::SimError;
use crate::strategy::Strategy;
use crate::trial::{play_trial, Trial};

/// What a batch produced: a win rate, or the games themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    WinRate(f64),
    Games(Vec<Trial>),
}

/// Run `trial_count` games of `strategy`.
///
/// Aggregate mode (`want_details == false`) fails with
/// [`SimError::InvalidTrialCount`] when `trial_count` is zero, since the win
/// rate would be undefined. Detail mode returns exactly `trial_count`
/// records, so zero simply yields an empty list.
pub fn run_strategy<R: Rng + ?Sized>(
    strategy: Strategy,
    trial_count: u64,
    want_details: bool,
    rng: &mut R,
) -> Result<RunOutcome, SimError> {
    if want_details {
        Ok(RunOutcome::Games(example_games(strategy, trial_count, rng)))
    } else {
        win_rate(strategy, trial_count, rng).map(RunOutcome::WinRate)
    }
}

/// Count hider wins over `trial_count` games.
pub fn hider_wins<R: Rng + ?Sized>(strategy: Strategy, trial_count: u64, rng: &mut R) -> u64 {
    (0..trial_count)
        .filter(|_| play_trial(strategy, &mut *rng).hiders_win())
        .count() as u64
}

/// Empirical hider win rate over `trial_count` games, in [0, 1].
pub fn win_rate<R: Rng + ?Sized>(
    strategy: Strategy,
    trial_count: u64,
    rng: &mut R,
) -> Result<f64, SimError> {
    if trial_count == 0 {
        return Err(SimError::InvalidTrialCount(trial_count));
    }
    let wins = hider_wins(strategy, trial_count, rng);
    debug!(strategy = %strategy, trials = trial_count, hider_wins = wins, "batch complete");
    Ok(wins as f64 / trial_count as f64)
}

/// Play `count` games and keep every record.
pub fn example_games<R: Rng + ?Sized>(strategy: Strategy, count: u64, rng: &mut R) -> Vec<Trial> {
    (0..count).map(|_| play_trial(strategy, &mut *rng)).collect()
}
