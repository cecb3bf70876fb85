//! Run aggregator: many independent trials of two policies, folded into one
//! report.
//!
//! Trial `n` always sees the same demand for a given seed, whichever thread
//! runs it.  With the `parallel` feature trials run on Rayon's pool; the
//! results are folded in trial order either way, so the report is identical.

use std::fmt;

use lift_core::{PassengerStream, StreamConfig, TrialSeeds};
use lift_dispatch::PolicyKind;
use tracing::{info, warn};

use crate::{DEFAULT_CAPACITY, NoopObserver, RunResult, SimBuilder, SimError, SimObserver, SimResult};

// ── CompareConfig ─────────────────────────────────────────────────────────────

/// Parameters of a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareConfig {
    /// Roster size of the elevator.
    pub capacity: usize,

    /// Number of trials.  Must be at least 1.
    pub rounds: u32,

    /// Global seed; every trial derives its own seeds from it.
    pub seed: u64,

    /// Both policies of a trial serve the same stream.  When `false` the
    /// second policy gets an independently generated stream.
    pub shared_stream: bool,

    /// Charge en-route boarding time to the elevator clock.
    pub charge_en_route_boarding: bool,

    pub stream: StreamConfig,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            capacity:                 DEFAULT_CAPACITY,
            rounds:                   10,
            seed:                     42,
            shared_stream:            true,
            charge_en_route_boarding: false,
            stream:                   StreamConfig::default(),
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.rounds == 0 {
            return Err(SimError::Config("rounds must be at least 1".into()));
        }
        self.stream.validate()?;
        Ok(())
    }
}

// ── PolicyPair ────────────────────────────────────────────────────────────────

/// The two policies compared, in report order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyPair {
    pub first:  PolicyKind,
    pub second: PolicyKind,
}

impl PolicyPair {
    pub fn new(first: PolicyKind, second: PolicyKind) -> Self {
        Self { first, second }
    }
}

impl Default for PolicyPair {
    fn default() -> Self {
        Self::new(PolicyKind::LookaheadOptimal, PolicyKind::NearestDestination)
    }
}

impl fmt::Display for PolicyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

// ── Single trial ──────────────────────────────────────────────────────────────

/// Both runs of one trial.
#[derive(Clone, Debug)]
pub struct TrialOutcome {
    pub trial:  u32,
    pub first:  RunResult,
    pub second: RunResult,
}

/// Run trial `trial` of `config` for both policies of `pair`, first then
/// second, reporting both runs to `observer`.
///
/// The policy RNG of each run is seeded with the trial index.
pub fn run_trial<O: SimObserver>(
    config:   &CompareConfig,
    pair:     PolicyPair,
    trial:    u32,
    observer: &mut O,
) -> SimResult<TrialOutcome> {
    let seeds = TrialSeeds::new(config.seed, trial);
    let first_stream = PassengerStream::generate(&config.stream, seeds)?;
    let second_stream = if config.shared_stream {
        first_stream.clone()
    } else {
        PassengerStream::generate(&config.stream, seeds.with_slot(1))?
    };

    let first = simulate(config, pair.first, first_stream, seeds.policy, observer)?;
    let second = simulate(config, pair.second, second_stream, seeds.policy, observer)?;
    Ok(TrialOutcome { trial, first, second })
}

fn simulate<O: SimObserver>(
    config:   &CompareConfig,
    kind:     PolicyKind,
    stream:   PassengerStream,
    seed:     u64,
    observer: &mut O,
) -> SimResult<RunResult> {
    let sim = SimBuilder::new(kind, stream)
        .capacity(config.capacity)
        .policy_seed(seed)
        .charge_en_route_boarding(config.charge_en_route_boarding)
        .build()?;
    Ok(sim.run(observer))
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Aggregate statistics of one policy over all trials.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyStats {
    pub policy:           PolicyKind,
    /// Mean wait time of each trial, in trial order.
    pub trial_mean_waits: Vec<f64>,
    /// Mean wait time of the last trial.
    pub last_mean_wait:   f64,
    /// Mean of `trial_mean_waits`.
    pub mean_wait:        f64,
    pub mean_total_time:  f64,
    pub min_total_time:   f64,
    pub max_total_time:   f64,
    pub mean_moves:       f64,
    pub min_moves:        u64,
    pub max_moves:        u64,
    /// Trials where this policy's mean wait was strictly lower.
    pub wait_wins:        u32,
    /// Trials where this policy moved strictly fewer times.
    pub move_wins:        u32,
}

impl PolicyStats {
    /// Label used in reports and charts.
    pub fn label(&self) -> &'static str {
        self.policy.label()
    }
}

/// Result of [`compare`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    pub rounds: u32,
    pub first:  PolicyStats,
    pub second: PolicyStats,
}

impl ComparisonReport {
    /// `wins / rounds * 100`.
    pub fn win_percentage(&self, wins: u32) -> f64 {
        f64::from(wins) / f64::from(self.rounds) * 100.0
    }

    /// Trials in which neither policy won on wait time.
    pub fn wait_ties(&self) -> u32 {
        self.rounds - self.first.wait_wins - self.second.wait_wins
    }
}

/// Per-policy accumulator, filled in trial order.
#[derive(Default)]
struct Tally {
    mean_waits:  Vec<f64>,
    total_times: Vec<f64>,
    moves:       Vec<u64>,
    wait_wins:   u32,
    move_wins:   u32,
}

impl Tally {
    fn push(&mut self, trial: u32, run: &RunResult) -> SimResult<f64> {
        let mean = run.mean_wait().inspect_err(|_| {
            warn!(trial, policy = run.policy, "trial delivered no passengers");
        })?;
        self.mean_waits.push(mean);
        self.total_times.push(run.total_time);
        self.moves.push(run.moves);
        Ok(mean)
    }

    fn into_stats(self, policy: PolicyKind) -> PolicyStats {
        let n = self.mean_waits.len().max(1) as f64;
        PolicyStats {
            policy,
            last_mean_wait:  self.mean_waits.last().copied().unwrap_or(0.0),
            mean_wait:       self.mean_waits.iter().sum::<f64>() / n,
            mean_total_time: self.total_times.iter().sum::<f64>() / n,
            min_total_time:  self.total_times.iter().copied().fold(f64::INFINITY, f64::min),
            max_total_time:  self.total_times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean_moves:      self.moves.iter().sum::<u64>() as f64 / n,
            min_moves:       self.moves.iter().copied().min().unwrap_or(0),
            max_moves:       self.moves.iter().copied().max().unwrap_or(0),
            wait_wins:       self.wait_wins,
            move_wins:       self.move_wins,
            trial_mean_waits: self.mean_waits,
        }
    }
}

/// Run `config.rounds` trials of `pair` and aggregate them.
///
/// Fails with [`SimError::NoPassengersDelivered`] if any run delivers
/// nobody, since its mean wait is undefined.
pub fn compare(config: &CompareConfig, pair: PolicyPair) -> SimResult<ComparisonReport> {
    config.validate()?;
    info!(
        %pair,
        rounds   = config.rounds,
        seed     = config.seed,
        capacity = config.capacity,
        shared   = config.shared_stream,
        "comparison started"
    );

    let outcomes = run_trials(config, pair);

    let mut first = Tally::default();
    let mut second = Tally::default();
    for outcome in outcomes {
        let outcome = outcome?;
        let a = first.push(outcome.trial, &outcome.first)?;
        let b = second.push(outcome.trial, &outcome.second)?;

        if a < b {
            first.wait_wins += 1;
        } else if b < a {
            second.wait_wins += 1;
        }
        if outcome.first.moves < outcome.second.moves {
            first.move_wins += 1;
        } else if outcome.second.moves < outcome.first.moves {
            second.move_wins += 1;
        }
    }

    let report = ComparisonReport {
        rounds: config.rounds,
        first:  first.into_stats(pair.first),
        second: second.into_stats(pair.second),
    };
    info!(
        first_wins  = report.first.wait_wins,
        second_wins = report.second.wait_wins,
        "comparison finished"
    );
    Ok(report)
}

#[cfg(not(feature = "parallel"))]
fn run_trials(config: &CompareConfig, pair: PolicyPair) -> Vec<SimResult<TrialOutcome>> {
    (0..config.rounds)
        .map(|trial| run_trial(config, pair, trial, &mut NoopObserver))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_trials(config: &CompareConfig, pair: PolicyPair) -> Vec<SimResult<TrialOutcome>> {
    use rayon::prelude::*;

    // Indexed collect keeps trial order.
    (0..config.rounds)
        .into_par_iter()
        .map(|trial| run_trial(config, pair, trial, &mut NoopObserver))
        .collect()
}
