//! The `ReportWriter` trait implemented by all backend writers.

use lift_sim::ComparisonReport;

use crate::{ChartRow, CycleRow, OutputResult, SummaryRow};

/// Trait implemented by report backends.
///
/// Errors raised while a run is in progress are stored by
/// [`CycleLogObserver`][crate::CycleLogObserver] and retrieved with
/// [`take_error`][crate::CycleLogObserver::take_error].
pub trait ReportWriter {
    /// Write one driver-iteration row of a detailed run.
    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()>;

    /// Write per-policy summary rows.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Write chart series rows.
    fn write_charts(&mut self, rows: &[ChartRow]) -> OutputResult<()>;

    /// Push buffered rows to the underlying files.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write the summary and chart rows of `report`.
    fn write_report(&mut self, report: &ComparisonReport) -> OutputResult<()> {
        self.write_summary(&SummaryRow::from_report(report))?;
        self.write_charts(&ChartRow::from_charts(&report.charts()))
    }
}
