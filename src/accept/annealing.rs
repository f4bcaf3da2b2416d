//! Simulated annealing acceptance.

use super::AcceptanceCriterion;
use crate::error::{AlnsError, Result};
use crate::State;
use rand::Rng;

/// Metropolis acceptance with geometric cooling.
///
/// A candidate that is no worse than the current solution is always accepted.
/// A worse one is accepted with probability `exp(-delta / temperature)`.
/// After every decision the temperature is multiplied by `cooling_rate`, but
/// never drops below `min_temperature`.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 3
///
/// # Examples
///
/// ```
/// use u_alns::accept::SimulatedAnnealing;
///
/// let sa = SimulatedAnnealing::new(100.0, 0.9995, 0.01).unwrap();
/// assert_eq!(sa.temperature(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    temperature: f64,
    cooling_rate: f64,
    min_temperature: f64,
}

impl SimulatedAnnealing {
    /// Creates the criterion.
    ///
    /// # Errors
    /// [`AlnsError::InvalidConfig`] unless both temperatures are positive
    /// (the initial one also finite),
    /// `initial >= min`, and `cooling_rate` lies in (0, 1].
    pub fn new(initial_temperature: f64, cooling_rate: f64, min_temperature: f64) -> Result<Self> {
        if !(initial_temperature.is_finite() && initial_temperature > 0.0) {
            return Err(AlnsError::InvalidConfig(
                "initial_temperature must be finite and positive".into(),
            ));
        }
        if min_temperature.is_nan() || min_temperature <= 0.0 {
            return Err(AlnsError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if min_temperature > initial_temperature {
            return Err(AlnsError::InvalidConfig(
                "min_temperature must be <= initial_temperature".into(),
            ));
        }
        if !(cooling_rate > 0.0 && cooling_rate <= 1.0) {
            return Err(AlnsError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1], got {cooling_rate}"
            )));
        }
        Ok(Self {
            temperature: initial_temperature,
            cooling_rate,
            min_temperature,
        })
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl<S: State, R: Rng> AcceptanceCriterion<S, R> for SimulatedAnnealing {
    fn accept(&mut self, rng: &mut R, _best: &S, curr: &S, cand: &S) -> bool {
        let delta = cand.objective() - curr.objective();
        let probability = (-delta / self.temperature).exp();

        // Draw every time so the stream position does not depend on delta.
        let accepted = rng.random_range(0.0..1.0) < probability;

        self.temperature = (self.temperature * self.cooling_rate).max(self.min_temperature);
        accepted
    }
}
