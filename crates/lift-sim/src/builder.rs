//! Fluent builder for constructing a [`Simulation`].

use lift_core::PassengerStream;
use lift_dispatch::DispatchPolicy;

use crate::{Elevator, Simulation, SimError, SimResult};

/// Roster size used when the builder is not told otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// Fluent builder for [`Simulation<P>`].
///
/// # Required inputs
///
/// - `P: DispatchPolicy`: the policy to drive
/// - [`PassengerStream`]: the demand, speed and loading rate of this run
///
/// # Optional inputs (have defaults)
///
/// | Method                            | Default              |
/// |-----------------------------------|----------------------|
/// | `.capacity(n)`                    | [`DEFAULT_CAPACITY`] |
/// | `.policy_seed(s)`                 | `0`                  |
/// | `.charge_en_route_boarding(b)`    | `false`              |
///
/// # Example
///
/// ```rust,ignore
/// let stream = PassengerStream::generate(&StreamConfig::default(), TrialSeeds::new(42, 0))?;
/// let result = SimBuilder::new(PolicyKind::NearestDestination, stream)
///     .capacity(10)
///     .build()?
///     .run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    policy:      P,
    stream:      PassengerStream,
    capacity:    usize,
    policy_seed: u64,
    charge_en_route_boarding: bool,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    pub fn new(policy: P, stream: PassengerStream) -> Self {
        Self {
            policy,
            stream,
            capacity:    DEFAULT_CAPACITY,
            policy_seed: 0,
            charge_en_route_boarding: false,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seed for the policy's tie-breaks and random choices.
    pub fn policy_seed(mut self, seed: u64) -> Self {
        self.policy_seed = seed;
        self
    }

    /// Add en-route boarding time to the elevator clock.
    ///
    /// Only matters for policies that pick up en route.  Off by default:
    /// passengers board while passing through at no cost.
    pub fn charge_en_route_boarding(mut self, charge: bool) -> Self {
        self.charge_en_route_boarding = charge;
        self
    }

    /// Validate inputs and return a ready-to-run [`Simulation`].
    ///
    /// A zero-capacity elevator facing anyone it would have to deliver is
    /// rejected with [`SimError::NoPassengersDelivered`]: it would wait
    /// forever.
    pub fn build(self) -> SimResult<Simulation<P>> {
        let PassengerStream { passengers, speed, loading_rate } = self.stream;

        for (what, v) in [("speed", speed), ("loading rate", loading_rate)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(SimError::Config(format!("{what} must be finite and non-negative, got {v}")));
            }
        }

        if self.capacity == 0 {
            let discards = self.policy.discards_degenerate();
            let deliverable = passengers
                .iter()
                .filter(|p| !(discards && p.is_degenerate()))
                .count();
            if deliverable > 0 {
                return Err(SimError::NoPassengersDelivered(format!(
                    "capacity 0 cannot carry {deliverable} passengers"
                )));
            }
        }

        Ok(Simulation::new(
            self.policy,
            Elevator::new(self.capacity, speed, loading_rate),
            passengers,
            self.policy_seed,
            self.charge_en_route_boarding,
        ))
    }
}
