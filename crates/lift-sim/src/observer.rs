//! Per-stage records and the observer trait that receives them.

use crate::RunResult;
use lift_core::Floor;

/// One loading stage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoadRecord {
    pub floor:       Floor,
    pub time_before: f64,
    pub time_taken:  f64,
    pub boarded:     usize,
    /// Roster size after boarding.
    pub onboard:     usize,
    pub time_after:  f64,
    /// Passengers still pending after boarding.
    pub pending:     usize,
    /// Boarded while passing through during a move.
    pub en_route:    bool,
}

/// One movement stage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveRecord {
    pub from:       Floor,
    pub to:         Floor,
    /// `distance * speed`; excludes idle waiting and en-route boarding.
    pub move_time:  f64,
    pub time_after: f64,
}

/// One unloading stage, closing a driver iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnloadRecord {
    pub exiting:    usize,
    pub time_taken: f64,
    pub time_after: f64,
    /// `time_after` minus the time before this iteration's load.
    pub cycle_time: f64,
}

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at every
/// stage of the driver loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Per iteration the order is: one `on_load`, zero or more en-route
/// `on_load`s, one `on_move`, one `on_unload`.
///
/// # Example: move counter
///
/// ```rust,ignore
/// struct LongMoves(usize);
///
/// impl SimObserver for LongMoves {
///     fn on_move(&mut self, rec: &MoveRecord) {
///         if rec.from.distance(rec.to) > 10 {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first iteration.
    fn on_run_start(&mut self, _policy: &'static str, _stream_len: usize) {}

    fn on_load(&mut self, _rec: &LoadRecord) {}

    fn on_move(&mut self, _rec: &MoveRecord) {}

    fn on_unload(&mut self, _rec: &UnloadRecord) {}

    /// Called once after the driver terminates.
    fn on_run_end(&mut self, _result: &RunResult) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
