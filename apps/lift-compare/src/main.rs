//! lift-compare — single-elevator dispatch policy comparison.
//!
//! Runs each policy of a pair once on trial 0's passenger stream with the
//! per-cycle log attached, then runs the full multi-trial comparison and
//! prints win counts.  Everything the run produces lands in the output
//! directory as CSV.
//!
//! ```text
//! lift-compare --seed 42 --rounds 10 --capacity 10
//! lift-compare --pair random,nearest-destination --independent-streams
//! lift-compare --config compare.json --rounds 100
//! RUST_LOG=lift_sim=debug lift-compare --rounds 2
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_dispatch::PolicyKind;
use lift_output::{CsvReportWriter, CycleLogObserver, ReportWriter};
use lift_sim::{CompareConfig, ComparisonReport, PolicyPair, PolicyStats, RunResult, compare, run_trial};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_LOG_FILTER: &str = "lift_compare=info,lift_sim=info";
const DEFAULT_OUTPUT_DIR: &str = "output/lift-compare";

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Every flag overrides the matching field of the config file (or of the
/// built-in defaults when no file is given).
#[derive(Parser)]
#[command(
    name = "lift-compare",
    about = "Compare elevator dispatch policies over many simulated trials"
)]
struct Cli {
    /// JSON file with a full or partial CompareConfig
    #[arg(long)]
    config: Option<PathBuf>,

    /// Global seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of trials
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: Option<u32>,

    /// Elevator capacity (passengers)
    #[arg(long)]
    capacity: Option<usize>,

    /// Policies to compare, e.g. `random,nearest-destination`
    #[arg(long, value_parser = parse_pair)]
    pair: Option<PolicyPair>,

    /// Give each policy its own passenger stream instead of sharing one
    #[arg(long)]
    independent_streams: bool,

    /// Charge boarding time for en-route pickups
    #[arg(long)]
    charge_en_route_boarding: bool,

    /// Top floor (floors run from 0)
    #[arg(long)]
    floors: Option<u32>,

    /// Passengers per run
    #[arg(long)]
    passengers: Option<usize>,

    /// Directory for the CSV output
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn parse_pair(s: &str) -> Result<PolicyPair, String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two policies separated by ',', got '{s}'"))?;
    let first: PolicyKind = a.parse().map_err(|e| format!("{e}"))?;
    let second: PolicyKind = b.parse().map_err(|e| format!("{e}"))?;
    Ok(PolicyPair::new(first, second))
}

impl Cli {
    /// Config file (or defaults) with the command-line overrides applied.
    fn compare_config(&self) -> Result<CompareConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => CompareConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if self.independent_streams {
            config.shared_stream = false;
        }
        if self.charge_en_route_boarding {
            config.charge_en_route_boarding = true;
        }
        if let Some(floors) = self.floors {
            config.stream.floors = floors;
        }
        if let Some(passengers) = self.passengers {
            config.stream.passengers = passengers;
        }

        config.validate()?;
        Ok(config)
    }
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_run(run: &RunResult, label: &str) -> Result<()> {
    println!(
        "  {:<18} mean wait {:>9.4} s | total {:>10.2} s | moves {:>6} | delivered {:>5} | discarded {:>3}",
        label,
        run.mean_wait()?,
        run.total_time,
        run.moves,
        run.delivered(),
        run.discarded,
    );
    Ok(())
}

fn print_stats(s: &PolicyStats) {
    println!("{} Statistics", s.label());
    println!("  average wait time (last run):          {:.4} s", s.last_mean_wait);
    println!("  average of average wait times:         {:.4} s", s.mean_wait);
    println!("  average total time across all runs:    {:.4} s", s.mean_total_time);
    println!("  average elevator moves across all runs: {:.4}", s.mean_moves);
    println!("  total time min / max:                  {:.4} / {:.4} s", s.min_total_time, s.max_total_time);
    println!("  elevator moves min / max:              {} / {}", s.min_moves, s.max_moves);
    println!();
}

fn print_wins(report: &ComparisonReport) {
    let (a, b) = (&report.first, &report.second);
    println!("Wins by average wait time ({} rounds)", report.rounds);
    println!("  {:<18} {:>5}  ({:.3} %)", a.label(), a.wait_wins, report.win_percentage(a.wait_wins));
    println!("  {:<18} {:>5}  ({:.3} %)", b.label(), b.wait_wins, report.win_percentage(b.wait_wins));
    println!("  {:<18} {:>5}", "ties", report.wait_ties());
    println!("Wins by elevator moves");
    println!("  {:<18} {:>5}  ({:.3} %)", a.label(), a.move_wins, report.win_percentage(a.move_wins));
    println!("  {:<18} {:>5}  ({:.3} %)", b.label(), b.move_wins, report.win_percentage(b.move_wins));
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.compare_config()?;
    let pair = cli.pair.unwrap_or_default();

    println!("=== lift-compare: rust_lift elevator simulator ===");
    println!("{} vs {}", pair.first.label(), pair.second.label());
    println!(
        "Seed: {}  |  Rounds: {}  |  Capacity: {}  |  Floors: 0..={}  |  Passengers: {}",
        config.seed, config.rounds, config.capacity, config.stream.floors, config.stream.passengers
    );
    println!(
        "Streams: {}  |  En-route boarding: {}",
        if config.shared_stream { "shared" } else { "independent" },
        if config.charge_en_route_boarding { "charged" } else { "free" },
    );
    println!();

    // 1. Output.
    let writer = CsvReportWriter::new(&cli.output)
        .with_context(|| format!("creating output in {}", cli.output.display()))?;
    let mut obs = CycleLogObserver::new(writer);

    // 2. Single detailed run on trial 0's stream.
    let t0 = Instant::now();
    let single = run_trial(&config, pair, 0, &mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!("Single run");
    print_run(&single.first, pair.first.label())?;
    print_run(&single.second, pair.second.label())?;
    println!();

    // 3. Multi-trial comparison.
    let report = compare(&config, pair)?;
    let elapsed = t0.elapsed();

    print_stats(&report.first);
    print_stats(&report.second);
    print_wins(&report);

    // 4. Summary and chart series.
    let cycle_rows = obs.rows_written();
    let mut writer = obs.into_writer();
    writer.write_report(&report)?;
    writer.finish()?;
    info!(dir = %cli.output.display(), cycle_rows, "reports written");

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  single_run.csv : {cycle_rows} rows");
    println!("  summary.csv    : 2 rows");
    println!("  charts.csv     : {} rows", report.charts().iter().map(|c| c.bars.len()).sum::<usize>());

    Ok(())
}
