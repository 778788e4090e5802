//! # Strategy — Hider Placement Policies
//!
//! A strategy decides where the three hiders go in one game, and as a
//! consequence whether the seeker has to spend a search on the joke spot.
//!
//! | Strategy | Joke hiders | Random hiders | Seeker searches joke |
//! |----------|-------------|---------------|----------------------|
//! | A        | 0           | 3             | no (5 legit)         |
//! | B        | 1           | 2             | yes (joke + 4 legit) |
//! | C        | 2           | 1             | yes (joke + 4 legit) |
//!
//! Random hiders pick uniformly from the six legitimate spots, with
//! replacement, so two hiders can share a spot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;
use crate::spot::HIDER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// All hiders pick random legitimate spots.
    A,
    /// One hider sits in the joke spot.
    B,
    /// Two hiders sit in the joke spot.
    C,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::A, Strategy::B, Strategy::C];

    /// Hiders deliberately placed in the joke spot.
    pub fn joke_hiders(self) -> usize {
        match self {
            Strategy::A => 0,
            Strategy::B => 1,
            Strategy::C => 2,
        }
    }

    /// Hiders that pick a legitimate spot at random.
    pub fn random_hiders(self) -> usize {
        HIDER_COUNT - self.joke_hiders()
    }

    /// Whether the seeker is forced to spend one search on the joke spot.
    pub fn forces_joke_search(self) -> bool {
        self.joke_hiders() > 0
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::A => "A",
            Strategy::B => "B",
            Strategy::C => "C",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Strategy::A),
            "B" => Ok(Strategy::B),
            "C" => Ok(Strategy::C),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}
