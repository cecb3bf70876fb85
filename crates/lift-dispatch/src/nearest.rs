//! Greedy nearest-destination dispatch.

use lift_core::{Floor, Passenger, SimRng};

use crate::select::{busiest_floor, first_nearest_source, nearest_by, pick_tied};
use crate::{DispatchContext, DispatchPolicy};

/// Deliver the closest destination (random among ties); fetch from the
/// floor with the most people waiting (nearest, then first seen, among ties).
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestDestinationPolicy;

impl DispatchPolicy for NearestDestinationPolicy {
    fn name(&self) -> &'static str {
        "nearest-destination"
    }

    fn deliver(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Floor {
        let closest = nearest_by(ctx.onboard, ctx.floor, |p| p.destination);
        pick_tied(&closest, rng).map_or(ctx.floor, |p| p.destination)
    }

    fn fetch(&self, ctx: &DispatchContext<'_>, visible: &[&Passenger], _rng: &mut SimRng) -> Floor {
        busiest_floor(visible, ctx.floor).unwrap_or(ctx.floor)
    }

    fn fetch_after_wait(&self, floor: Floor, arrived: &[&Passenger], _rng: &mut SimRng) -> Floor {
        first_nearest_source(arrived, floor).unwrap_or(floor)
    }
}
