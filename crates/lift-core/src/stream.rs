//! Passenger stream generation.
//!
//! One stream is the complete demand for one run: `passengers` requests with
//! non-decreasing arrival times, plus the elevator speed and loading rate the
//! run uses.
//!
//! - Arrival times are cumulative sums of Poisson(`arrival_rate`) increments
//!   starting at 0, so ties are allowed.
//! - Source and destination floors are independent uniform draws from
//!   `0..=floors`.  Nothing stops them from being equal; policies that care
//!   discard such requests themselves.
//! - Speed and loading rate are the first elements of the shuffled candidate
//!   lists.

use rand_distr::Poisson;

use crate::{CoreError, CoreResult, Floor, Passenger, PassengerId, TrialSeeds};

pub const DEFAULT_FLOORS: u32 = 20;
pub const DEFAULT_PASSENGERS: usize = 1_000;
pub const DEFAULT_ARRIVAL_RATE: f64 = 1.0;
/// Seconds per floor.
pub const DEFAULT_SPEEDS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];
/// Seconds per passenger boarding or exiting.
pub const DEFAULT_LOADING_RATES: [f64; 3] = [0.2, 0.3, 0.4];

// ── StreamConfig ──────────────────────────────────────────────────────────────

/// Shape of the demand generated for every run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamConfig {
    /// Top floor.  Floors run from 0 to `floors` inclusive.
    pub floors: u32,

    /// Passengers per run.
    pub passengers: usize,

    /// Poisson λ for the arrival increments.
    pub arrival_rate: f64,

    /// Candidate elevator speeds (seconds per floor).
    pub speeds: Vec<f64>,

    /// Candidate loading rates (seconds per passenger).
    pub loading_rates: Vec<f64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            floors:        DEFAULT_FLOORS,
            passengers:    DEFAULT_PASSENGERS,
            arrival_rate:  DEFAULT_ARRIVAL_RATE,
            speeds:        DEFAULT_SPEEDS.to_vec(),
            loading_rates: DEFAULT_LOADING_RATES.to_vec(),
        }
    }
}

impl StreamConfig {
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floors)
    }

    /// Reject configurations the generator cannot sample from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors == 0 {
            return Err(CoreError::Config("building needs at least one floor above ground".into()));
        }
        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            return Err(CoreError::Config(format!(
                "arrival rate must be positive and finite, got {}",
                self.arrival_rate
            )));
        }
        check_candidates("speeds", &self.speeds)?;
        check_candidates("loading_rates", &self.loading_rates)?;
        if PassengerId::try_from(self.passengers).is_err() {
            return Err(CoreError::Config(format!(
                "{} passengers exceeds the id space",
                self.passengers
            )));
        }
        Ok(())
    }
}

fn check_candidates(what: &str, values: &[f64]) -> CoreResult<()> {
    if values.is_empty() {
        return Err(CoreError::Config(format!("{what} must not be empty")));
    }
    if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
        return Err(CoreError::Config(format!("{what} contains invalid value {bad}")));
    }
    Ok(())
}

// ── PassengerStream ───────────────────────────────────────────────────────────

/// The demand for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct PassengerStream {
    /// Ordered by non-decreasing `arrival_time`.
    pub passengers:   Vec<Passenger>,
    /// Seconds per floor.
    pub speed:        f64,
    /// Seconds per passenger boarding or exiting.
    pub loading_rate: f64,
}

impl PassengerStream {
    /// Generate a stream from `config`, drawing floors and arrivals from
    /// `seeds.stream` and the speed/loading-rate shuffles from `seeds.shuffle`.
    pub fn generate(config: &StreamConfig, seeds: TrialSeeds) -> CoreResult<Self> {
        config.validate()?;

        let poisson = Poisson::new(config.arrival_rate)
            .map_err(|e| CoreError::Distribution(e.to_string()))?;

        let mut shuffles = seeds.shuffle_rng();
        let mut speeds = config.speeds.clone();
        let mut loading_rates = config.loading_rates.clone();
        shuffles.shuffle(&mut speeds);
        shuffles.shuffle(&mut loading_rates);

        let mut draws = seeds.stream_rng();
        let mut passengers = Vec::with_capacity(config.passengers);
        let mut t = 0.0_f64;
        for i in 0..config.passengers {
            let step: f64 = draws.sample(&poisson);
            t += step;
            let source = Floor(draws.gen_range(0..=config.floors));
            let destination = Floor(draws.gen_range(0..=config.floors));
            // validate() guarantees the index fits.
            passengers.push(Passenger::new(PassengerId(i as u32), t, source, destination));
        }

        Ok(Self {
            passengers,
            speed:        speeds[0],
            loading_rate: loading_rates[0],
        })
    }

    /// Build a stream from `(arrival_time, source, destination)` triples.
    ///
    /// Ids are assigned in order.  Arrival times are taken as given; callers
    /// are responsible for keeping them non-decreasing.
    pub fn from_requests(requests: &[(f64, u32, u32)], speed: f64, loading_rate: f64) -> Self {
        let passengers = requests
            .iter()
            .enumerate()
            .map(|(i, &(t, src, dst))| {
                Passenger::new(PassengerId(i as u32), t, Floor(src), Floor(dst))
            })
            .collect();
        Self { passengers, speed, loading_rate }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Number of requests whose origin equals their destination.
    pub fn degenerate_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_degenerate()).count()
    }
}
