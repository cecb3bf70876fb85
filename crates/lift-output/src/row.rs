//! Plain data row types written by report backends.

use lift_dispatch::DispatchPolicy;
use lift_sim::{Chart, ComparisonReport, PolicyStats};

/// One driver iteration of a run: load, move, unload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleRow {
    pub policy:           &'static str,
    /// 0-based iteration index within the run.
    pub cycle:            u64,
    pub floor:            u32,
    pub time_before_load: f64,
    pub load_time:        f64,
    /// Roster size after the cycle's first load.
    pub onboard:          usize,
    pub time_after_load:  f64,
    pub src_floor:        u32,
    pub dst_floor:        u32,
    pub move_time:        f64,
    pub time_after_move:  f64,
    /// Passengers boarded while passing through during the move.
    pub en_route_boarded: usize,
    pub exiting:          usize,
    pub unload_time:      f64,
    pub time_after_exit:  f64,
    pub cycle_time:       f64,
}

/// Aggregate statistics of one policy in a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub policy:          &'static str,
    pub label:           &'static str,
    pub rounds:          u32,
    pub last_mean_wait:  f64,
    pub mean_wait:       f64,
    pub mean_total_time: f64,
    pub min_total_time:  f64,
    pub max_total_time:  f64,
    pub mean_moves:      f64,
    pub min_moves:       u64,
    pub max_moves:       u64,
    pub wait_wins:       u32,
    pub wait_win_pct:    f64,
    pub move_wins:       u32,
    pub move_win_pct:    f64,
}

impl SummaryRow {
    /// One row per policy, in report order.
    pub fn from_report(report: &ComparisonReport) -> [SummaryRow; 2] {
        let row = |s: &PolicyStats| SummaryRow {
            policy:          s.policy.name(),
            label:           s.label(),
            rounds:          report.rounds,
            last_mean_wait:  s.last_mean_wait,
            mean_wait:       s.mean_wait,
            mean_total_time: s.mean_total_time,
            min_total_time:  s.min_total_time,
            max_total_time:  s.max_total_time,
            mean_moves:      s.mean_moves,
            min_moves:       s.min_moves,
            max_moves:       s.max_moves,
            wait_wins:       s.wait_wins,
            wait_win_pct:    report.win_percentage(s.wait_wins),
            move_wins:       s.move_wins,
            move_win_pct:    report.win_percentage(s.move_wins),
        };
        [row(&report.first), row(&report.second)]
    }
}

/// One bar of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub title:   &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bar:     &'static str,
    pub value:   f64,
}

impl ChartRow {
    /// Flatten `charts` into one row per bar, keeping chart and bar order.
    pub fn from_charts(charts: &[Chart]) -> Vec<ChartRow> {
        charts
            .iter()
            .flat_map(|c| {
                c.bars.iter().map(move |&(bar, value)| ChartRow {
                    title:   c.title,
                    x_label: c.x_label,
                    y_label: c.y_label,
                    bar,
                    value,
                })
            })
            .collect()
    }
}
