//! # Spot — Hiding Locations and the Seeker's Search Set
//!
//! The game board has seven hiding spots. Spots 0–5 are "legitimate" hiding
//! places; spot 6 is the "joke" spot that every seeker knows about and always
//! checks when a hider might be sitting in it.
//!
//! [`SpotSet`] is the seeker's searched set: at most seven distinct spots,
//! stored as a bitmask so membership checks and inserts are a single bit
//! operation. Iteration yields spots in ascending order, which is also the
//! order used when a set is rendered as a list.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of spots on the board (legitimate + joke).
pub const SPOT_COUNT: u8 = 7;

/// Number of legitimate spots (0..=5).
pub const LEGIT_SPOT_COUNT: u8 = 6;

/// Number of spots the seeker may search per game.
pub const SEARCH_COUNT: usize = 5;

/// Number of hiders per game.
pub const HIDER_COUNT: usize = 3;

/// One of the seven hiding spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Spot(u8);

/// The joke spot.
pub const JOKE_SPOT: Spot = Spot(6);

/// The six legitimate spots, in order.
pub const LEGIT_SPOTS: [Spot; LEGIT_SPOT_COUNT as usize] =
    [Spot(0), Spot(1), Spot(2), Spot(3), Spot(4), Spot(5)];

impl Spot {
    /// Returns the spot with the given index, or `None` if it is off the board.
    pub fn new(index: u8) -> Option<Spot> {
        (index < SPOT_COUNT).then_some(Spot(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn is_joke(self) -> bool {
        self == JOKE_SPOT
    }

    pub fn is_legit(self) -> bool {
        self.0 < LEGIT_SPOT_COUNT
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of distinct spots (the seeker's searched spots).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpotSet {
    bits: u8,
}

impl SpotSet {
    pub fn new() -> Self {
        SpotSet { bits: 0 }
    }

    /// Inserts a spot. Returns `true` if it was not already present.
    pub fn insert(&mut self, spot: Spot) -> bool {
        let mask = 1u8 << spot.0;
        let added = self.bits & mask == 0;
        self.bits |= mask;
        added
    }

    pub fn contains(&self, spot: Spot) -> bool {
        self.bits & (1u8 << spot.0) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Spots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Spot> + '_ {
        (0..SPOT_COUNT)
            .filter(move |i| self.bits & (1u8 << i) != 0)
            .map(Spot)
    }

    pub fn to_vec(&self) -> Vec<Spot> {
        self.iter().collect()
    }
}

impl FromIterator<Spot> for SpotSet {
    fn from_iter<I: IntoIterator<Item = Spot>>(iter: I) -> Self {
        let mut set = SpotSet::new();
        for spot in iter {
            set.insert(spot);
        }
        set
    }
}

impl Serialize for SpotSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Renders spots as `[a, b, c]`.
pub fn format_spots(spots: impl IntoIterator<Item = Spot>) -> String {
    let inner: Vec<String> = spots.into_iter().map(|s| s.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Spot ────────────────────────────────────────────────────────

    #[test]
    fn legit_and_joke_partition_the_board() {
        for i in 0..SPOT_COUNT {
            let spot = Spot::new(i).unwrap();
            assert_ne!(spot.is_legit(), spot.is_joke(), "spot {} must be exactly one kind", i);
        }
        assert!(JOKE_SPOT.is_joke());
        assert!(LEGIT_SPOTS.iter().all(|s| s.is_legit()));
    }

    #[test]
    fn spot_new_rejects_off_board_index() {
        assert_eq!(Spot::new(6), Some(JOKE_SPOT));
        assert_eq!(Spot::new(7), None);
        assert_eq!(Spot::new(255), None);
    }

    // ── SpotSet ─────────────────────────────────────────────────────

    #[test]
    fn insert_ignores_duplicates() {
        let mut set = SpotSet::new();
        assert!(set.insert(LEGIT_SPOTS[2]));
        assert!(!set.insert(LEGIT_SPOTS[2]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_is_ascending() {
        let set: SpotSet = [JOKE_SPOT, LEGIT_SPOTS[3], LEGIT_SPOTS[0]].into_iter().collect();
        assert_eq!(set.to_vec(), vec![LEGIT_SPOTS[0], LEGIT_SPOTS[3], JOKE_SPOT]);
    }

    #[test]
    fn contains_matches_inserted() {
        let set: SpotSet = LEGIT_SPOTS[1..].iter().copied().collect();
        assert!(!set.contains(LEGIT_SPOTS[0]));
        assert!(!set.contains(JOKE_SPOT));
        for spot in &LEGIT_SPOTS[1..] {
            assert!(set.contains(*spot));
        }
    }

    #[test]
    fn empty_set() {
        let set = SpotSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(format_spots(set.iter()), "[]");
    }

    #[test]
    fn format_matches_list_rendering() {
        assert_eq!(format_spots([Spot(6), Spot(0), Spot(5)]), "[6, 0, 5]");
    }

    #[test]
    fn serializes_as_number_list() {
        let set: SpotSet = [LEGIT_SPOTS[4], JOKE_SPOT].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[4,6]");
    }
}
