//! Building floors.
//!
//! Floors are numbered from 0 (ground) up to and including the configured
//! top floor, so a building with `floors = 20` has 21 distinct stops.

use std::fmt;

/// A floor number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// Where every run starts.
    pub const GROUND: Floor = Floor(0);

    /// Number of single-floor steps between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step closer to `target`, or `self` if already there.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        use std::cmp::Ordering;
        match self.0.cmp(&target.0) {
            Ordering::Less    => Floor(self.0 + 1),
            Ordering::Greater => Floor(self.0 - 1),
            Ordering::Equal   => self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
