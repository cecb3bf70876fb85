//! The `DispatchPolicy` trait, the extension point for new strategies.

use lift_core::{Floor, Passenger, SimRng};

use crate::select::wait_for_arrivals;
use crate::{Decision, DispatchContext};

/// Pluggable floor selection.
///
/// Implementors provide the three selectors; [`decide`][Self::decide]
/// routes between them.  Every method receives the run's own [`SimRng`] so
/// random choices are reproducible per trial.
///
/// # Flags read by the driver
///
/// - [`discards_degenerate`][Self::discards_degenerate]: the loading stage
///   drops same-floor requests from the pending queue before boarding.
/// - [`picks_up_en_route`][Self::picks_up_en_route]: the movement stage runs
///   the loading stage at every floor it passes through.
///
/// # Thread safety
///
/// Trials may run in parallel, so implementations must be `Send + Sync` and
/// keep no per-run state.
pub trait DispatchPolicy: Send + Sync {
    /// Short machine-readable name, e.g. `"nearest-destination"`.
    fn name(&self) -> &'static str;

    /// Onboard roster is non-empty: the destination to head for.
    fn deliver(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Floor;

    /// Roster empty, `visible` (non-empty) passengers waiting: the floor to
    /// fetch from.
    fn fetch(&self, ctx: &DispatchContext<'_>, visible: &[&Passenger], rng: &mut SimRng) -> Floor;

    /// After idling, `arrived` (non-empty, none at `floor`) became visible:
    /// the floor to fetch from.
    fn fetch_after_wait(&self, floor: Floor, arrived: &[&Passenger], rng: &mut SimRng) -> Floor;

    fn discards_degenerate(&self) -> bool {
        false
    }

    fn picks_up_en_route(&self) -> bool {
        false
    }

    /// Choose the next move.
    fn decide(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Decision {
        if !ctx.onboard.is_empty() {
            return Decision::MoveTo(self.deliver(ctx, rng));
        }

        let visible = ctx.visible();
        if !visible.is_empty() {
            return Decision::MoveTo(self.fetch(ctx, &visible, rng));
        }

        match wait_for_arrivals(ctx) {
            None => Decision::Idle,
            Some((until, arrived)) => {
                let floor = if arrived.iter().any(|p| p.source == ctx.floor) {
                    ctx.floor
                } else {
                    self.fetch_after_wait(ctx.floor, &arrived, rng)
                };
                Decision::WaitThenMoveTo { until, floor }
            }
        }
    }
}
