//! The baseline: every choice is uniform at random.

use lift_core::{Floor, Passenger, SimRng};

use crate::{DispatchContext, DispatchPolicy};

/// Deliver a random onboard passenger; otherwise fetch a random waiting one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl DispatchPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn deliver(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Floor {
        rng.choose(ctx.onboard).map_or(ctx.floor, |p| p.destination)
    }

    fn fetch(&self, ctx: &DispatchContext<'_>, visible: &[&Passenger], rng: &mut SimRng) -> Floor {
        rng.choose(visible).map_or(ctx.floor, |p| p.source)
    }

    fn fetch_after_wait(&self, floor: Floor, arrived: &[&Passenger], rng: &mut SimRng) -> Floor {
        rng.choose(arrived).map_or(floor, |p| p.source)
    }
}
