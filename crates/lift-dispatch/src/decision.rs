//! What a dispatch policy asks the elevator to do next.

use lift_core::Floor;

/// The outcome of one dispatch decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// Travel to `Floor` now (may be the current floor).
    MoveTo(Floor),

    /// Nothing was visible: idle until `until`, then travel to `floor`.
    ///
    /// `floor` equals the current floor when one of the newly arrived
    /// passengers is already here.
    WaitThenMoveTo { until: f64, floor: Floor },

    /// Nobody onboard and nobody left to serve.
    Idle,
}

impl Decision {
    /// Target floor of this decision, given the elevator is at `current`.
    pub fn target(&self, current: Floor) -> Floor {
        match *self {
            Decision::MoveTo(floor) | Decision::WaitThenMoveTo { floor, .. } => floor,
            Decision::Idle => current,
        }
    }
}
