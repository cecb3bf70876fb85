use crate::{SimError, SimResult};

/// Everything one run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    pub policy:     &'static str,
    /// Elevator clock at termination.
    pub total_time: f64,
    /// Driver iterations, including no-op moves.
    pub moves:      u64,
    /// One entry per delivered passenger, in delivery order.
    pub waits:      Vec<f64>,
    /// Passengers in the stream.
    pub generated:  usize,
    /// Degenerate requests dropped without service.
    pub discarded:  usize,
}

impl RunResult {
    #[inline]
    pub fn delivered(&self) -> usize {
        self.waits.len()
    }

    /// Mean wait time, or `NoPassengersDelivered` for an empty run.
    pub fn mean_wait(&self) -> SimResult<f64> {
        if self.waits.is_empty() {
            return Err(SimError::NoPassengersDelivered(format!(
                "{} run recorded no wait times",
                self.policy
            )));
        }
        Ok(self.waits.iter().sum::<f64>() / self.waits.len() as f64)
    }
}
