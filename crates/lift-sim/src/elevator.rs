//! Elevator state and the three stage operations that mutate it.

use lift_core::{Floor, Passenger};

/// Round a wait time to 4 decimal places.
#[inline]
pub fn round_wait(secs: f64) -> f64 {
    (secs * 10_000.0).round() / 10_000.0
}

/// Outcome of one loading stage.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boarding {
    pub boarded:    usize,
    /// Degenerate requests dropped from the pending queue.
    pub discarded:  usize,
    /// `boarded * loading_rate`.  Not yet applied to the clock.
    pub time_taken: f64,
}

/// Outcome of one unloading stage.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Unloading {
    pub exited:     usize,
    pub time_taken: f64,
}

/// The single elevator of a run.
///
/// Starts at the ground floor at time 0.  `time` never decreases.
#[derive(Clone, Debug)]
pub struct Elevator {
    pub floor:        Floor,
    pub time:         f64,
    pub capacity:     usize,
    /// Seconds per floor.
    pub speed:        f64,
    /// Seconds per passenger boarding or exiting.
    pub loading_rate: f64,
    /// In boarding order.  Never longer than `capacity`.
    pub onboard:      Vec<Passenger>,
}

impl Elevator {
    pub fn new(capacity: usize, speed: f64, loading_rate: f64) -> Self {
        Self {
            floor: Floor::GROUND,
            time: 0.0,
            capacity,
            speed,
            loading_rate,
            onboard: Vec::new(),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.onboard.len() >= self.capacity
    }

    /// Loading stage.
    ///
    /// Walks `pending` in queue order and boards every passenger waiting on
    /// this floor who has arrived, until the roster is full.  With
    /// `discard_degenerate`, same-floor requests are dropped first, wherever
    /// they are.  `pending` is rebuilt from the retained passengers.
    ///
    /// The caller decides whether the returned `time_taken` is charged.
    pub fn board(&mut self, pending: &mut Vec<Passenger>, discard_degenerate: bool) -> Boarding {
        let mut retained = Vec::with_capacity(pending.len());
        let mut out = Boarding::default();

        for p in pending.drain(..) {
            if discard_degenerate && p.is_degenerate() {
                out.discarded += 1;
                continue;
            }
            if !self.is_full() && p.source == self.floor && p.is_visible_at(self.time) {
                self.onboard.push(p);
                out.boarded += 1;
            } else {
                retained.push(p);
            }
        }

        *pending = retained;
        out.time_taken = out.boarded as f64 * self.loading_rate;
        out
    }

    /// Unloading stage.
    ///
    /// Everyone whose destination is this floor exits; the clock advances by
    /// `exited * loading_rate` and each exit appends its wait time
    /// (`time - arrival_time`, rounded) to `waits`, in boarding order.
    pub fn unload(&mut self, waits: &mut Vec<f64>) -> Unloading {
        let floor = self.floor;
        let (exiting, staying): (Vec<Passenger>, Vec<Passenger>) =
            self.onboard.drain(..).partition(|p| p.destination == floor);
        self.onboard = staying;

        let time_taken = exiting.len() as f64 * self.loading_rate;
        self.time += time_taken;
        waits.extend(exiting.iter().map(|p| round_wait(self.time - p.arrival_time)));

        Unloading { exited: exiting.len(), time_taken }
    }

    /// Move one floor toward `target`, paying `speed`.  No-op when already
    /// there.
    pub fn step_toward(&mut self, target: Floor) {
        if self.floor != target {
            self.floor = self.floor.step_toward(target);
            self.time += self.speed;
        }
    }

    /// Move straight to `target`, paying `distance * speed` in one go.
    pub fn travel_to(&mut self, target: Floor) {
        self.time += f64::from(self.floor.distance(target)) * self.speed;
        self.floor = target;
    }
}
