//! Strongly typed passenger identifier.
//!
//! The inner integer is the passenger's position in the generated stream, so
//! it stays stable while the passenger moves from the pending queue to the
//! onboard roster and out again.

use std::fmt;

/// Index of a passenger in its [`PassengerStream`][crate::PassengerStream].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PassengerId({})", self.0)
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PassengerId, Self::Error> {
        u32::try_from(n).map(PassengerId)
    }
}
