//! `CycleLogObserver<W>` bridges `SimObserver` to a `ReportWriter`.

use lift_sim::{LoadRecord, MoveRecord, RunResult, SimObserver, UnloadRecord};

use crate::row::CycleRow;
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that folds each driver iteration into one [`CycleRow`]
/// and writes it to any [`ReportWriter`] backend.
///
/// The same observer can be handed to several runs in turn; cycle numbers
/// restart at every `on_run_start`.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CycleLogObserver<W: ReportWriter> {
    writer:     W,
    row:        CycleRow,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> CycleLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row:        CycleRow::default(),
            rows:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows written so far, across all runs.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to write the comparison report).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> SimObserver for CycleLogObserver<W> {
    fn on_run_start(&mut self, policy: &'static str, _stream_len: usize) {
        self.row = CycleRow { policy, ..CycleRow::default() };
    }

    fn on_load(&mut self, rec: &LoadRecord) {
        if rec.en_route {
            self.row.en_route_boarded += rec.boarded;
            return;
        }
        self.row.floor            = rec.floor.0;
        self.row.time_before_load = rec.time_before;
        self.row.load_time        = rec.time_taken;
        self.row.onboard          = rec.onboard;
        self.row.time_after_load  = rec.time_after;
        self.row.en_route_boarded = 0;
    }

    fn on_move(&mut self, rec: &MoveRecord) {
        self.row.src_floor       = rec.from.0;
        self.row.dst_floor       = rec.to.0;
        self.row.move_time       = rec.move_time;
        self.row.time_after_move = rec.time_after;
    }

    fn on_unload(&mut self, rec: &UnloadRecord) {
        self.row.exiting         = rec.exiting;
        self.row.unload_time     = rec.time_taken;
        self.row.time_after_exit = rec.time_after;
        self.row.cycle_time      = rec.cycle_time;

        let result = self.writer.write_cycle(&self.row);
        self.store_err(result);
        self.rows += 1;
        self.row.cycle += 1;
    }

    fn on_run_end(&mut self, _result: &RunResult) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
