//! Named scalar comparisons for a plotting collaborator.

use crate::{ComparisonReport, PolicyStats};

/// One bar chart: a value per policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title:   &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `(policy label, value)` in report order.
    pub bars:    Vec<(&'static str, f64)>,
}

const X_LABEL: &str = "Simulation Name";

impl ComparisonReport {
    /// The four comparison charts, in a fixed order.
    pub fn charts(&self) -> Vec<Chart> {
        let chart = |title: &'static str, y_label: &'static str, metric: fn(&PolicyStats) -> f64| Chart {
            title,
            x_label: X_LABEL,
            y_label,
            bars: [&self.first, &self.second]
                .into_iter()
                .map(|s| (s.label(), metric(s)))
                .collect(),
        };

        vec![
            chart("Average Wait Time Comparison", "Average Wait Time (s)", |s| s.last_mean_wait),
            chart(
                "Average of Average Wait Times (all runs) Comparison",
                "Average Wait Time (s)",
                |s| s.mean_wait,
            ),
            chart("Average Total Time (all runs) Comparison", "Average Total Time (s)", |s| {
                s.mean_total_time
            }),
            chart("Average Elevator Moves (all runs) Comparison", "Average Elevator Moves", |s| {
                s.mean_moves
            }),
        ]
    }
}
