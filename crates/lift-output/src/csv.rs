//! CSV report backend.
//!
//! Creates three files in the configured output directory:
//! - `single_run.csv`
//! - `summary.csv`
//! - `charts.csv`
//!
//! Times are written with four decimal places.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ChartRow, CycleRow, OutputResult, SummaryRow};

pub const CYCLE_HEADERS: [&str; 17] = [
    "policy", "cycle", "floor", "t_before_load", "load_t", "onboard", "t_after_load",
    "src_floor", "dst_floor", "move_t", "t_after_move", "en_route_boarded",
    "exiting", "unload_t", "t_after_exit", "total_cycle_t", "move_floors",
];

pub const SUMMARY_HEADERS: [&str; 15] = [
    "policy", "label", "rounds", "last_mean_wait", "mean_wait", "mean_total_time",
    "min_total_time", "max_total_time", "mean_moves", "min_moves", "max_moves",
    "wait_wins", "wait_win_pct", "move_wins", "move_win_pct",
];

pub const CHART_HEADERS: [&str; 5] = ["title", "x_label", "y_label", "bar", "value"];

#[inline]
fn secs(v: f64) -> String {
    format!("{v:.4}")
}

/// Writes reports to three CSV files.
pub struct CsvReportWriter {
    cycles:    Writer<File>,
    summaries: Writer<File>,
    charts:    Writer<File>,
    finished:  bool,
}

impl CsvReportWriter {
    /// Create `dir` if needed, open (or truncate) the three CSV files and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut cycles = Writer::from_path(dir.join("single_run.csv"))?;
        cycles.write_record(CYCLE_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("summary.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        let mut charts = Writer::from_path(dir.join("charts.csv"))?;
        charts.write_record(CHART_HEADERS)?;

        Ok(Self {
            cycles,
            summaries,
            charts,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()> {
        self.cycles.write_record(&[
            row.policy.to_string(),
            row.cycle.to_string(),
            row.floor.to_string(),
            secs(row.time_before_load),
            secs(row.load_time),
            row.onboard.to_string(),
            secs(row.time_after_load),
            row.src_floor.to_string(),
            row.dst_floor.to_string(),
            secs(row.move_time),
            secs(row.time_after_move),
            row.en_route_boarded.to_string(),
            row.exiting.to_string(),
            secs(row.unload_time),
            secs(row.time_after_exit),
            secs(row.cycle_time),
            row.src_floor.abs_diff(row.dst_floor).to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.policy.to_string(),
                row.label.to_string(),
                row.rounds.to_string(),
                secs(row.last_mean_wait),
                secs(row.mean_wait),
                secs(row.mean_total_time),
                secs(row.min_total_time),
                secs(row.max_total_time),
                secs(row.mean_moves),
                row.min_moves.to_string(),
                row.max_moves.to_string(),
                row.wait_wins.to_string(),
                format!("{:.3}", row.wait_win_pct),
                row.move_wins.to_string(),
                format!("{:.3}", row.move_win_pct),
            ])?;
        }
        Ok(())
    }

    fn write_charts(&mut self, rows: &[ChartRow]) -> OutputResult<()> {
        for row in rows {
            self.charts.write_record(&[
                row.title.to_string(),
                row.x_label.to_string(),
                row.y_label.to_string(),
                row.bar.to_string(),
                secs(row.value),
            ])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.cycles.flush()?;
        self.summaries.flush()?;
        self.charts.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
