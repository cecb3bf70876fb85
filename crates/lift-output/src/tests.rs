//! Tests for the CSV backend and the cycle-log observer.

use tempfile::TempDir;

use crate::csv::{CHART_HEADERS, CYCLE_HEADERS, SUMMARY_HEADERS};
use crate::{CsvReportWriter, CycleRow, ReportWriter};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

fn headers(path: &std::path::Path) -> Vec<String> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.headers().unwrap().iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("single_run.csv")), CYCLE_HEADERS);
        assert_eq!(headers(&dir.path().join("summary.csv")), SUMMARY_HEADERS);
        assert_eq!(headers(&dir.path().join("charts.csv")), CHART_HEADERS);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvReportWriter::new(&nested).unwrap();
        assert!(nested.join("summary.csv").exists());
    }

    #[test]
    fn cycle_row_formatting() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        let row = CycleRow {
            policy:           "nearest-destination",
            cycle:            3,
            floor:            2,
            time_before_load: 1.0,
            load_time:        0.6,
            onboard:          3,
            time_after_load:  1.6,
            src_floor:        2,
            dst_floor:        7,
            move_time:        5.0,
            time_after_move:  6.6,
            en_route_boarded: 0,
            exiting:          1,
            unload_time:      0.2,
            time_after_exit:  6.8,
            cycle_time:       5.8,
        };
        w.write_cycle(&row).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join("single_run.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "nearest-destination");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][4], "0.6000");
        assert_eq!(&rows[0][15], "5.8000");
        assert_eq!(&rows[0][16], "5");
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_core::PassengerStream;
    use lift_dispatch::PolicyKind;
    use lift_sim::{SimBuilder, SimObserver, UnloadRecord};

    use super::*;
    use crate::{ChartRow, CycleLogObserver, OutputError, OutputResult, SummaryRow};

    fn scenario() -> PassengerStream {
        PassengerStream::from_requests(&[(0.0, 0, 5), (0.0, 0, 5), (1.0, 5, 0)], 1.0, 0.0)
    }

    #[test]
    fn one_row_per_cycle() {
        let dir = tmp();
        let writer = CsvReportWriter::new(dir.path()).unwrap();
        let mut obs = CycleLogObserver::new(writer);

        let result = SimBuilder::new(PolicyKind::NearestDestination, scenario())
            .capacity(2)
            .build()
            .unwrap()
            .run(&mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), result.moves);
        obs.into_writer().finish().unwrap();

        let rows = read_rows(&dir.path().join("single_run.csv"));
        assert_eq!(rows.len(), 2);
        // Cycle 0: board two at 0, ride to 5, both exit.
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[0][5], "2");
        assert_eq!(&rows[0][7], "0");
        assert_eq!(&rows[0][8], "5");
        assert_eq!(&rows[0][10], "5.0000");
        assert_eq!(&rows[0][12], "2");
        // Cycle 1: back down.
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][8], "0");
        assert_eq!(&rows[1][14], "10.0000");
    }

    #[test]
    fn en_route_boardings_are_counted() {
        let dir = tmp();
        let mut obs = CycleLogObserver::new(CsvReportWriter::new(dir.path()).unwrap());
        let stream = PassengerStream::from_requests(&[(0.0, 0, 4), (0.0, 2, 3)], 1.0, 0.0);
        SimBuilder::new(PolicyKind::LookaheadOptimal, stream)
            .build()
            .unwrap()
            .run(&mut obs);
        obs.into_writer().finish().unwrap();

        let rows = read_rows(&dir.path().join("single_run.csv"));
        assert_eq!(&rows[0][11], "1");
        assert_eq!(&rows[1][11], "0");
    }

    #[test]
    fn cycle_numbers_restart_per_run() {
        let dir = tmp();
        let mut obs = CycleLogObserver::new(CsvReportWriter::new(dir.path()).unwrap());
        for kind in [PolicyKind::Random, PolicyKind::NearestDestination] {
            SimBuilder::new(kind, scenario()).capacity(2).build().unwrap().run(&mut obs);
        }
        obs.into_writer().finish().unwrap();

        let rows = read_rows(&dir.path().join("single_run.csv"));
        let firsts: Vec<(&str, &str)> = rows
            .iter()
            .filter(|r| &r[1] == "0")
            .map(|r| (r.get(0).unwrap(), r.get(1).unwrap()))
            .collect();
        assert_eq!(firsts, vec![("random", "0"), ("nearest-destination", "0")]);
    }

    /// Fails every cycle write; used to check error capture.
    struct FailingWriter;

    impl ReportWriter for FailingWriter {
        fn write_cycle(&mut self, _row: &CycleRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_summary(&mut self, _rows: &[SummaryRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_charts(&mut self, _rows: &[ChartRow]) -> OutputResult<()> {
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = CycleLogObserver::new(FailingWriter);
        let rec = UnloadRecord { exiting: 0, time_taken: 0.0, time_after: 0.0, cycle_time: 0.0 };
        obs.on_unload(&rec);
        obs.on_unload(&rec);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}

#[cfg(test)]
mod report_tests {
    use lift_core::StreamConfig;
    use lift_sim::{CompareConfig, PolicyPair, compare};

    use super::*;
    use crate::{ChartRow, SummaryRow};

    fn report() -> lift_sim::ComparisonReport {
        let cfg = CompareConfig {
            rounds: 2,
            stream: StreamConfig { passengers: 100, ..StreamConfig::default() },
            ..CompareConfig::default()
        };
        compare(&cfg, PolicyPair::default()).unwrap()
    }

    #[test]
    fn summary_rows_follow_report_order() {
        let r = report();
        let rows = SummaryRow::from_report(&r);
        assert_eq!(rows[0].policy, "lookahead-optimal");
        assert_eq!(rows[1].label, "Strategy Elevator");
        assert_eq!(rows[0].rounds, 2);
        assert_eq!(rows[0].wait_win_pct, r.win_percentage(r.first.wait_wins));
    }

    #[test]
    fn chart_rows_flatten_bars() {
        let r = report();
        let rows = ChartRow::from_charts(&r.charts());
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].title, "Average Wait Time Comparison");
        assert_eq!(rows[0].bar, "Optimal Elevator");
        assert_eq!(rows[1].bar, "Strategy Elevator");
        assert_eq!(rows[7].y_label, "Average Elevator Moves");
    }

    #[test]
    fn write_report_fills_both_files() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.write_report(&report()).unwrap();
        w.finish().unwrap();

        let summary = read_rows(&dir.path().join("summary.csv"));
        assert_eq!(summary.len(), 2);
        assert_eq!(&summary[0][0], "lookahead-optimal");
        let charts = read_rows(&dir.path().join("charts.csv"));
        assert_eq!(charts.len(), 8);
        assert_eq!(&charts[2][0], "Average of Average Wait Times (all runs) Comparison");
    }
}
