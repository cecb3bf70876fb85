//! The passenger request record.

use crate::{Floor, PassengerId};

/// One request for service: appear at `source` at `arrival_time`, ride to
/// `destination`.
///
/// Passengers are immutable once generated.  A run moves each one from the
/// pending queue to the onboard roster to the exited set, never duplicating
/// it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:           PassengerId,
    /// Simulated seconds since the start of the run.
    pub arrival_time: f64,
    pub source:       Floor,
    pub destination:  Floor,
}

impl Passenger {
    pub fn new(id: PassengerId, arrival_time: f64, source: Floor, destination: Floor) -> Self {
        Self { id, arrival_time, source, destination }
    }

    /// A request whose origin equals its destination.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.source == self.destination
    }

    /// Has this passenger arrived by `time`?
    #[inline]
    pub fn is_visible_at(&self, time: f64) -> bool {
        self.arrival_time <= time
    }

    /// `true` if the ride from `floor` to this passenger's destination goes up.
    #[inline]
    pub fn rides_up_from(&self, floor: Floor) -> bool {
        self.destination > floor
    }
}
