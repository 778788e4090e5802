//! Property-based tests for the hide-and-peek trial engine.
//!
//! These tests use `proptest` to check invariants over randomly chosen
//! strategies, seeds and trial counts. The seed drives a `SmallRng`, so any
//! failing case shrinks to a reproducible (strategy, seed, count) triple.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! # Properties
//!
//! - **Trials**: searched sets hold exactly five distinct spots with the joke
//!   spot present iff forced; the winner matches the spot membership rule.
//! - **Engine**: aggregate rates lie in [0, 1]; detail mode returns exactly
//!   the requested number of records.
//! - **Convergence**: large batches land within 1% of the exact odds.

use hide_and_peek::{
    engine, exact_hider_win_probability, play_trial, run_strategy, RunOutcome, SimError,
    Strategy as HidingStrategy, Winner,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn any_strategy() -> impl Strategy<Value = HidingStrategy> {
    prop_oneof![Just(HidingStrategy::A), Just(HidingStrategy::B), Just(HidingStrategy::C)]
}

// == Trial Properties ==========================================================

proptest! {
    /// The seeker always searches exactly five distinct spots. The joke spot
    /// is among them exactly when the strategy hides someone there; the rest
    /// are legitimate.
    #[test]
    fn prop_search_set_shape(strategy in any_strategy(), seed in any::<u64>()) {
        let trial = play_trial(strategy, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(trial.search_spots.len(), 5);
        let jokes = trial.search_spots.iter().filter(|s| s.is_joke()).count();
        prop_assert_eq!(jokes == 1, strategy.forces_joke_search());
        prop_assert!(trial.search_spots.iter().all(|s| s.is_legit() || s.is_joke()));
    }

    /// Hiders win iff at least one hider spot is absent from the searched set.
    #[test]
    fn prop_winner_rule(strategy in any_strategy(), seed in any::<u64>()) {
        let trial = play_trial(strategy, &mut SmallRng::seed_from_u64(seed));
        let escaped = trial.hider_spots.iter().any(|s| !trial.search_spots.contains(*s));
        let expected = if escaped { Winner::Hiders } else { Winner::Seeker };
        prop_assert_eq!(trial.winner, expected);
    }

    /// Joke hiders are never the ones who escape.
    #[test]
    fn prop_joke_hiders_always_found(strategy in any_strategy(), seed in any::<u64>()) {
        let trial = play_trial(strategy, &mut SmallRng::seed_from_u64(seed));
        for spot in trial.hider_spots.iter().filter(|s| s.is_joke()) {
            prop_assert!(trial.search_spots.contains(*spot));
        }
    }
}

// == Engine Properties =========================================================

proptest! {
    #[test]
    fn prop_win_rate_in_unit_interval(
        strategy in any_strategy(),
        seed in any::<u64>(),
        trials in 1u64..2000,
    ) {
        let rate = engine::win_rate(strategy, trials, &mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn prop_detail_mode_count(
        strategy in any_strategy(),
        seed in any::<u64>(),
        count in 0u64..200,
    ) {
        let outcome = run_strategy(strategy, count, true, &mut SmallRng::seed_from_u64(seed)).unwrap();
        match outcome {
            RunOutcome::Games(games) => {
                prop_assert_eq!(games.len() as u64, count);
                prop_assert!(games.iter().all(|g| g.strategy == strategy));
            }
            RunOutcome::WinRate(_) => prop_assert!(false, "detail mode returned a rate"),
        }
    }
}

// == Convergence ===============================================================

#[test]
fn win_rates_converge_to_exact_odds() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    for strategy in HidingStrategy::ALL {
        let simulated = engine::win_rate(strategy, 100_000, &mut rng).unwrap();
        let exact = exact_hider_win_probability(strategy);
        assert!(
            (simulated - exact).abs() < 0.01,
            "strategy {}: simulated {:.4} vs exact {:.4}",
            strategy,
            simulated,
            exact
        );
    }
}

#[test]
fn zero_trials_is_an_error_not_a_nan() {
    let err = run_strategy(HidingStrategy::A, 0, false, &mut SmallRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, SimError::InvalidTrialCount(0));
    assert!(err.to_string().contains("invalid trial count"));
}
