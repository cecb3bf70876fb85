//! `lift-output` — report and chart writers for the rust_lift simulator.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `single_run.csv`, `summary.csv`, `charts.csv`   |
//!
//! The backend implements [`ReportWriter`].  Per-cycle rows come from
//! [`CycleLogObserver`], which implements `lift_sim::SimObserver`; the
//! comparison report and its charts are written with
//! [`ReportWriter::write_report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvReportWriter, CycleLogObserver, ReportWriter};
//!
//! let writer = CsvReportWriter::new(Path::new("./output"))?;
//! let mut obs = CycleLogObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//!
//! let mut writer = obs.into_writer();
//! writer.write_report(&report)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CycleLogObserver;
pub use row::{ChartRow, CycleRow, SummaryRow};
pub use writer::ReportWriter;
