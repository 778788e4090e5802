//! # Exact — Closed-Form Hider Odds
//!
//! Computes the exact hider win probability for each strategy by
//! enumerating the sample space the simulator draws from:
//!
//! - every placement of the random hiders (6^k equally likely sequences,
//!   since each hider draws uniformly with replacement), and
//! - every legitimate search subset of the required size. Rejection
//!   sampling into a set yields each subset with equal probability, so
//!   the subsets are weighted uniformly.
//!
//! Joke hiders are always found when present, because the seeker is then
//! forced to search the joke spot; only random hiders can escape.
//!
//! Known values: A = 91/216 ≈ 0.4213, B = 5/9 ≈ 0.5556, C = 1/3.

use crate::spot::{Spot, SpotSet, LEGIT_SPOTS, LEGIT_SPOT_COUNT, SEARCH_COUNT};
use crate::strategy::Strategy;
use crate::trial::{decide_winner, Winner};

/// All legitimate-spot subsets of the given size.
fn legit_subsets(size: usize) -> Vec<SpotSet> {
    (0u8..(1 << LEGIT_SPOT_COUNT))
        .filter(|mask| mask.count_ones() as usize == size)
        .map(|mask| {
            LEGIT_SPOTS
                .iter()
                .copied()
                .filter(|spot| mask & (1 << spot.index()) != 0)
                .collect()
        })
        .collect()
}

/// All sequences of `len` legitimate spots (with repetition).
fn legit_sequences(len: usize) -> Vec<Vec<Spot>> {
    let mut sequences = vec![Vec::new()];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|prefix| {
                LEGIT_SPOTS.iter().map(move |&spot| {
                    let mut next = prefix.clone();
                    next.push(spot);
                    next
                })
            })
            .collect();
    }
    sequences
}

/// Exact probability that the hiders win under `strategy`.
pub fn exact_hider_win_probability(strategy: Strategy) -> f64 {
    let legit_searches = if strategy.forces_joke_search() {
        SEARCH_COUNT - 1
    } else {
        SEARCH_COUNT
    };
    let searches = legit_subsets(legit_searches);
    let placements = legit_sequences(strategy.random_hiders());

    let mut hider_wins = 0u64;
    for searched in &searches {
        for hiders in &placements {
            if decide_winner(hiders, searched) == Winner::Hiders {
                hider_wins += 1;
            }
        }
    }
    hider_wins as f64 / (searches.len() * placements.len()) as f64
}
