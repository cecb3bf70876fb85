//! Read-only elevator state passed to every dispatch decision.

use lift_core::{Floor, Passenger};

/// A read-only snapshot of the elevator and its demand at decision time.
///
/// Built by the simulation driver after the loading stage; the policy never
/// mutates the queues.
pub struct DispatchContext<'a> {
    /// Where the elevator currently is.
    pub floor: Floor,

    /// Current simulated time (seconds).
    pub time: f64,

    /// Passengers inside the elevator, in boarding order.
    pub onboard: &'a [Passenger],

    /// Passengers not yet boarded, in stream order.  Includes passengers
    /// whose arrival time is still in the future.
    pub pending: &'a [Passenger],
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(floor: Floor, time: f64, onboard: &'a [Passenger], pending: &'a [Passenger]) -> Self {
        Self { floor, time, onboard, pending }
    }

    /// Pending passengers who have arrived by now, in queue order.
    pub fn visible(&self) -> Vec<&'a Passenger> {
        visible_at(self.pending, self.time)
    }
}

pub(crate) fn visible_at(pending: &[Passenger], time: f64) -> Vec<&Passenger> {
    pending.iter().filter(|p| p.is_visible_at(time)).collect()
}
