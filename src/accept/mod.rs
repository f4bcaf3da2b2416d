//! Acceptance criteria.
//!
//! An acceptance criterion decides whether a candidate replaces the current
//! solution. It controls diversification only: a candidate that beats the
//! global best is kept by the engine regardless of the verdict.

mod annealing;
mod hill_climbing;

pub use annealing::SimulatedAnnealing;
pub use hill_climbing::HillClimbing;

/// Decides whether a candidate is accepted as the new current solution.
///
/// Called exactly once per iteration, after the repair step, so it draws from
/// the shared random stream in a fixed position.
pub trait AcceptanceCriterion<S, R> {
    fn accept(&mut self, rng: &mut R, best: &S, curr: &S, cand: &S) -> bool;
}

/// Accepts every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAccept;

impl<S, R> AcceptanceCriterion<S, R> for AlwaysAccept {
    fn accept(&mut self, _rng: &mut R, _best: &S, _curr: &S, _cand: &S) -> bool {
        true
    }
}

/// Rejects every candidate. Only new global bests move the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl<S, R> AcceptanceCriterion<S, R> for RejectAll {
    fn accept(&mut self, _rng: &mut R, _best: &S, _curr: &S, _cand: &S) -> bool {
        false
    }
}
