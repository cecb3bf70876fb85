//! The `Simulation` struct and its driver loop.

use lift_core::{Floor, Passenger, SimRng};
use lift_dispatch::{Decision, DispatchContext, DispatchPolicy};
use tracing::debug;

use crate::{Elevator, LoadRecord, MoveRecord, RunResult, SimObserver, UnloadRecord};

/// Driver state.  A run starts `Running` and becomes `Terminated` once both
/// the pending queue and the roster are empty after an unloading stage.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    Running,
    Terminated,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One run of one policy over one passenger stream.
///
/// Each iteration of the driver loop is:
///
/// 1. **Load** at the current floor (clock charged).
/// 2. **Dispatch**: ask the policy for a [`Decision`]; an idle wait moves
///    the clock forward first.
/// 3. **Move** to the target, floor by floor with an en-route load after
///    every step for policies that pick up en route, otherwise in one jump.
///    Counted even when the target is the current floor.
/// 4. **Unload** everyone whose destination is here, recording wait times.
///
/// The pending queue and roster are owned here exclusively; each passenger
/// is in exactly one of pending / onboard / delivered / discarded.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: DispatchPolicy> {
    pub policy:   P,
    pub elevator: Elevator,
    /// Not yet boarded, in stream order.
    pub pending:  Vec<Passenger>,
    rng:          SimRng,
    charge_en_route_boarding: bool,
    state:        RunState,
    moves:        u64,
    waits:        Vec<f64>,
    generated:    usize,
    discarded:    usize,
}

impl<P: DispatchPolicy> Simulation<P> {
    pub(crate) fn new(
        policy:   P,
        elevator: Elevator,
        pending:  Vec<Passenger>,
        seed:     u64,
        charge_en_route_boarding: bool,
    ) -> Self {
        let generated = pending.len();
        Self {
            policy,
            elevator,
            pending,
            rng: SimRng::new(seed),
            charge_en_route_boarding,
            state: RunState::Running,
            moves: 0,
            waits: Vec::with_capacity(generated),
            generated,
            discarded: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Wait times recorded so far.
    #[inline]
    pub fn waits(&self) -> &[f64] {
        &self.waits
    }

    /// Run the driver loop to termination and return the result.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> RunResult {
        observer.on_run_start(self.policy.name(), self.generated);
        while self.step(observer) == RunState::Running {}

        let result = RunResult {
            policy:     self.policy.name(),
            total_time: self.elevator.time,
            moves:      self.moves,
            waits:      self.waits,
            generated:  self.generated,
            discarded:  self.discarded,
        };
        debug!(
            policy     = result.policy,
            moves      = result.moves,
            total_time = result.total_time,
            delivered  = result.delivered(),
            discarded  = result.discarded,
            "run finished"
        );
        observer.on_run_end(&result);
        result
    }

    /// Execute one load → dispatch → move → unload iteration.
    ///
    /// Does nothing once the run has terminated.  Useful for tests and
    /// incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> RunState {
        if self.state == RunState::Terminated {
            return self.state;
        }
        let cycle_start = self.elevator.time;

        // ── ① Load ────────────────────────────────────────────────────────
        self.load(false, observer);

        // ── ② Dispatch ────────────────────────────────────────────────────
        let decision = {
            let ctx = DispatchContext::new(
                self.elevator.floor,
                self.elevator.time,
                &self.elevator.onboard,
                &self.pending,
            );
            self.policy.decide(&ctx, &mut self.rng)
        };
        if let Decision::WaitThenMoveTo { until, .. } = decision {
            self.elevator.time = until;
        }
        let target = decision.target(self.elevator.floor);

        // ── ③ Move ────────────────────────────────────────────────────────
        self.travel(target, observer);
        self.moves += 1;

        // ── ④ Unload ──────────────────────────────────────────────────────
        let unloading = self.elevator.unload(&mut self.waits);
        observer.on_unload(&UnloadRecord {
            exiting:    unloading.exited,
            time_taken: unloading.time_taken,
            time_after: self.elevator.time,
            cycle_time: self.elevator.time - cycle_start,
        });

        if self.pending.is_empty() && self.elevator.onboard.is_empty() {
            self.state = RunState::Terminated;
        }
        self.state
    }

    // ── Stages ────────────────────────────────────────────────────────────

    fn load<O: SimObserver>(&mut self, en_route: bool, observer: &mut O) {
        let time_before = self.elevator.time;
        let boarding = self
            .elevator
            .board(&mut self.pending, self.policy.discards_degenerate());
        self.discarded += boarding.discarded;

        let charged = !en_route || self.charge_en_route_boarding;
        if charged {
            self.elevator.time += boarding.time_taken;
        }

        observer.on_load(&LoadRecord {
            floor:      self.elevator.floor,
            time_before,
            time_taken: if charged { boarding.time_taken } else { 0.0 },
            boarded:    boarding.boarded,
            onboard:    self.elevator.onboard.len(),
            time_after: self.elevator.time,
            pending:    self.pending.len(),
            en_route,
        });
    }

    fn travel<O: SimObserver>(&mut self, target: Floor, observer: &mut O) {
        let from = self.elevator.floor;
        if self.policy.picks_up_en_route() {
            while self.elevator.floor != target {
                self.elevator.step_toward(target);
                self.load(true, observer);
            }
        } else {
            self.elevator.travel_to(target);
        }

        observer.on_move(&MoveRecord {
            from,
            to:         target,
            move_time:  f64::from(from.distance(target)) * self.elevator.speed,
            time_after: self.elevator.time,
        });
    }
}
