//! # Trial — One Simulated Game
//!
//! A trial places the hiders according to a [`Strategy`], lets the seeker
//! pick five distinct spots, and decides the winner: the seeker wins only if
//! every hider's spot is in the searched set.
//!
//! The searched set is built by rejection sampling: draw a legitimate spot
//! uniformly, insert it, and repeat until the set holds five spots. Duplicate
//! draws are discarded, so a trial consumes a variable number of random
//! draws (always at least as many as the spots still missing). When the
//! strategy puts a hider in the joke spot the set starts out holding the
//! joke spot and only four legitimate spots are drawn.

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::spot::{Spot, SpotSet, HIDER_COUNT, JOKE_SPOT, LEGIT_SPOTS, SEARCH_COUNT};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Winner {
    Seeker,
    Hiders,
}

impl Winner {
    pub fn label(self) -> &'static str {
        match self {
            Winner::Seeker => "Seeker",
            Winner::Hiders => "Hiders",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full record of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trial {
    pub strategy: Strategy,
    /// Joke hiders first, then the random ones in draw order.
    pub hider_spots: [Spot; HIDER_COUNT],
    pub search_spots: SpotSet,
    pub winner: Winner,
}

impl Trial {
    pub fn hiders_win(&self) -> bool {
        self.winner == Winner::Hiders
    }
}

/// Seeker wins iff every hider spot was searched.
pub fn decide_winner(hider_spots: &[Spot], search_spots: &SpotSet) -> Winner {
    if hider_spots.iter().all(|&spot| search_spots.contains(spot)) {
        Winner::Seeker
    } else {
        Winner::Hiders
    }
}

/// Uniform draw from the legitimate spots.
pub fn random_legit_spot<R: Rng + ?Sized>(rng: &mut R) -> Spot {
    LEGIT_SPOTS[rng.random_range(0..LEGIT_SPOTS.len())]
}

/// Hider placement for one game.
pub fn place_hiders<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> [Spot; HIDER_COUNT] {
    let mut spots = [JOKE_SPOT; HIDER_COUNT];
    for spot in spots.iter_mut().skip(strategy.joke_hiders()) {
        *spot = random_legit_spot(rng);
    }
    spots
}

/// The seeker's five searched spots.
pub fn choose_search_spots<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> SpotSet {
    let mut searched = SpotSet::new();
    if strategy.forces_joke_search() {
        searched.insert(JOKE_SPOT);
    }
    while searched.len() < SEARCH_COUNT {
        searched.insert(random_legit_spot(rng));
    }
    searched
}

/// Play one game. Hiders are placed before the seeker searches, so the
/// draw order on the stream is hiders first, then search spots.
pub fn play_trial<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> Trial {
    let hider_spots = place_hiders(strategy, rng);
    let search_spots = choose_search_spots(strategy, rng);
    let winner = decide_winner(&hider_spots, &search_spots);
    Trial {
        strategy,
        hider_spots,
        search_spots,
        winner,
    }
}
