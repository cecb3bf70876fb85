//! Direction-aware dispatch with en-route pickups.

use std::cmp::Ordering;

use lift_core::{Floor, Passenger, SimRng};

use crate::select::{busiest_floor, first_nearest_source, nearest_by, pick_tied};
use crate::{DispatchContext, DispatchPolicy};

/// [`NearestDestinationPolicy`][crate::NearestDestinationPolicy] plus:
///
/// - ties for the nearest destination are broken by direction: the larger of
///   the tied up/down groups wins, then the direction more of the whole
///   roster is travelling, then a uniform random pick;
/// - the elevator boards waiting passengers at every floor it passes;
/// - same-floor requests are discarded without service.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadOptimalPolicy;

impl DispatchPolicy for LookaheadOptimalPolicy {
    fn name(&self) -> &'static str {
        "lookahead-optimal"
    }

    fn deliver(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Floor {
        let closest = nearest_by(ctx.onboard, ctx.floor, |p| p.destination);
        if closest.len() <= 1 {
            return closest.first().map_or(ctx.floor, |p| p.destination);
        }

        // Destination exactly at the current floor counts as "down".
        let (up, down): (Vec<&Passenger>, Vec<&Passenger>) =
            closest.iter().copied().partition(|p| p.rides_up_from(ctx.floor));

        let chosen = match up.len().cmp(&down.len()) {
            Ordering::Greater => up.first().copied(),
            Ordering::Less    => down.first().copied(),
            Ordering::Equal   => {
                let roster_up = ctx.onboard.iter().filter(|p| p.rides_up_from(ctx.floor)).count();
                let roster_down = ctx.onboard.len() - roster_up;
                match roster_up.cmp(&roster_down) {
                    Ordering::Greater => up.first().copied(),
                    Ordering::Less    => down.first().copied(),
                    Ordering::Equal   => pick_tied(&closest, rng),
                }
            }
        };
        chosen.map_or(ctx.floor, |p| p.destination)
    }

    fn fetch(&self, ctx: &DispatchContext<'_>, visible: &[&Passenger], _rng: &mut SimRng) -> Floor {
        busiest_floor(visible, ctx.floor).unwrap_or(ctx.floor)
    }

    fn fetch_after_wait(&self, floor: Floor, arrived: &[&Passenger], _rng: &mut SimRng) -> Floor {
        first_nearest_source(arrived, floor).unwrap_or(floor)
    }

    fn discards_degenerate(&self) -> bool {
        true
    }

    fn picks_up_en_route(&self) -> bool {
        true
    }
}
