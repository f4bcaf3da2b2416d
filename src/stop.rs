//! Stopping criteria.

/// Decides when a run ends. Checked once before every iteration.
///
/// The engine only runs with criteria that report a fixed iteration budget
/// through [`max_iterations`](StoppingCriterion::max_iterations); anything
/// else is rejected with
/// [`AlnsError::UnsupportedStoppingCriterion`](crate::AlnsError::UnsupportedStoppingCriterion)
/// before the first iteration.
pub trait StoppingCriterion<S, R> {
    /// Returns `true` when the run should stop.
    fn should_stop(&mut self, rng: &mut R, best: &S, curr: &S) -> bool;

    /// The fixed iteration budget, if this criterion is one.
    fn max_iterations(&self) -> Option<usize> {
        None
    }
}

/// Stops after a fixed number of iterations.
///
/// Counts its own calls, so a fresh instance is needed per run.
#[derive(Debug, Clone)]
pub struct MaxIterations {
    max_iterations: usize,
    current_iteration: usize,
}

impl MaxIterations {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            current_iteration: 0,
        }
    }

    /// Calls to [`should_stop`](StoppingCriterion::should_stop) so far.
    pub fn current_iteration(&self) -> usize {
        self.current_iteration
    }
}

impl<S, R> StoppingCriterion<S, R> for MaxIterations {
    fn should_stop(&mut self, _rng: &mut R, _best: &S, _curr: &S) -> bool {
        self.current_iteration += 1;
        self.current_iteration > self.max_iterations
    }

    fn max_iterations(&self) -> Option<usize> {
        Some(self.max_iterations)
    }
}
