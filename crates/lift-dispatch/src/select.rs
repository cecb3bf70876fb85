//! Floor-selection helpers shared by the policies.
//!
//! All helpers preserve input order, so "first" always means first in queue
//! (or boarding) order.

use lift_core::{Floor, Passenger, SimRng};

use crate::DispatchContext;
use crate::context::visible_at;

/// Every passenger whose `key` floor is at minimum distance from `floor`,
/// in input order.
pub fn nearest_by<'a, I, F>(passengers: I, floor: Floor, key: F) -> Vec<&'a Passenger>
where
    I: IntoIterator<Item = &'a Passenger>,
    F: Fn(&Passenger) -> Floor,
{
    let mut best = u32::MAX;
    let mut closest = Vec::new();
    for p in passengers {
        let d = key(p).distance(floor);
        if d < best {
            best = d;
            closest.clear();
            closest.push(p);
        } else if d == best {
            closest.push(p);
        }
    }
    closest
}

/// Uniform choice among `tied`.  Draws from `rng` only when there is more
/// than one candidate.
pub fn pick_tied<'a>(tied: &[&'a Passenger], rng: &mut SimRng) -> Option<&'a Passenger> {
    match tied {
        []     => None,
        [only] => Some(*only),
        _      => rng.choose(tied).copied(),
    }
}

/// The source floor with the most visible passengers waiting.
///
/// Ties on count go to the floor nearest `floor`; a remaining tie goes to
/// the floor that appears first in `visible`.
pub fn busiest_floor(visible: &[&Passenger], floor: Floor) -> Option<Floor> {
    // Insertion-ordered counts: at most floors + 1 entries.
    let mut counts: Vec<(Floor, usize)> = Vec::new();
    for p in visible {
        match counts.iter_mut().find(|(f, _)| *f == p.source) {
            Some((_, n)) => *n += 1,
            None         => counts.push((p.source, 1)),
        }
    }

    let most = counts.iter().map(|&(_, n)| n).max()?;
    let mut best: Option<(Floor, u32)> = None;
    for &(f, n) in &counts {
        if n != most {
            continue;
        }
        let d = f.distance(floor);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((f, d));
        }
    }
    best.map(|(f, _)| f)
}

/// Source floor of the first passenger (in input order) nearest `floor`.
pub fn first_nearest_source(passengers: &[&Passenger], floor: Floor) -> Option<Floor> {
    nearest_by(passengers.iter().copied(), floor, |p| p.source)
        .first()
        .map(|p| p.source)
}

/// Let time pass in whole seconds from `ctx.time` until at least one pending
/// passenger has arrived.
///
/// Returns the new time and everyone visible at it, or `None` if nothing is
/// pending.  Always advances by at least one second; the number of seconds
/// is computed directly, so the size of an arrival gap does not matter.
pub fn wait_for_arrivals<'a>(ctx: &DispatchContext<'a>) -> Option<(f64, Vec<&'a Passenger>)> {
    let earliest = ctx
        .pending
        .iter()
        .map(|p| p.arrival_time)
        .fold(f64::INFINITY, f64::min);
    if !earliest.is_finite() {
        return None;
    }

    let seconds = (earliest - ctx.time).ceil().max(1.0);
    let mut time = ctx.time + seconds;
    // Rounding in the subtraction can land one second off either way.
    if time < earliest {
        time += 1.0;
    } else if seconds > 1.0 && time - 1.0 >= earliest {
        time -= 1.0;
    }
    Some((time, visible_at(ctx.pending, time)))
}
