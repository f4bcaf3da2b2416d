//! Run statistics.
//!
//! [`Statistics`] is filled by the engine once per iteration and handed back,
//! read-only, in [`AlnsResult`](super::AlnsResult). Every update is an O(1)
//! append or counter increment so collection does not show up next to the
//! operators in a profile.

use super::outcome::Outcome;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Occurrence count of each outcome, indexed by [`Outcome::index`].
pub type OutcomeCounts = [u64; 4];

/// Traces and counters collected over one run.
#[derive(Debug, Clone)]
pub struct Statistics {
    start: Instant,

    /// Objective of the current solution: the initial one, then one per iteration.
    objectives: Vec<f64>,

    /// Objective of the best solution, aligned with `objectives`.
    best_objectives: Vec<f64>,

    /// Elapsed time since the run started, aligned with `objectives`.
    timestamps: Vec<Duration>,

    destroy_counts: HashMap<String, OutcomeCounts>,
    repair_counts: HashMap<String, OutcomeCounts>,
    outcome_totals: OutcomeCounts,

    /// Selected operator indices, one per iteration (if enabled).
    destroy_log: Vec<usize>,
    repair_log: Vec<usize>,

    /// Elements removed by the destroy step and inserted by the repair step,
    /// tagged with the operator index that did it.
    destroyed: Vec<(usize, usize)>,
    inserted: Vec<(usize, usize)>,
}

impl Statistics {
    /// Starts a new collection, recording the initial solution's objective.
    pub(crate) fn new(initial_objective: f64) -> Self {
        let mut stats = Self {
            start: Instant::now(),
            objectives: Vec::new(),
            best_objectives: Vec::new(),
            timestamps: Vec::new(),
            destroy_counts: HashMap::new(),
            repair_counts: HashMap::new(),
            outcome_totals: [0; 4],
            destroy_log: Vec::new(),
            repair_log: Vec::new(),
            destroyed: Vec::new(),
            inserted: Vec::new(),
        };
        stats.collect_objective(initial_objective, initial_objective);
        stats.collect_runtime();
        stats
    }

    #[inline]
    pub(crate) fn collect_objective(&mut self, current: f64, best: f64) {
        self.objectives.push(current);
        self.best_objectives.push(best);
    }

    #[inline]
    pub(crate) fn collect_runtime(&mut self) {
        self.timestamps.push(self.start.elapsed());
    }

    #[inline]
    pub(crate) fn collect_destroy_operator(&mut self, name: &str, outcome: Outcome) {
        bump(&mut self.destroy_counts, name, outcome);
        self.outcome_totals[outcome.index()] += 1;
    }

    #[inline]
    pub(crate) fn collect_repair_operator(&mut self, name: &str, outcome: Outcome) {
        bump(&mut self.repair_counts, name, outcome);
    }

    #[inline]
    pub(crate) fn collect_selection(&mut self, d_idx: usize, r_idx: usize) {
        self.destroy_log.push(d_idx);
        self.repair_log.push(r_idx);
    }

    #[inline]
    pub(crate) fn collect_assignment_change(
        &mut self,
        d_idx: usize,
        r_idx: usize,
        destroyed: usize,
        inserted: usize,
    ) {
        self.destroyed.push((d_idx, destroyed));
        self.inserted.push((r_idx, inserted));
    }

    /// Number of completed iterations.
    pub fn iterations(&self) -> usize {
        self.objectives.len() - 1
    }

    /// Current-solution objective trace, of length `iterations() + 1`.
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Best-solution objective trace, of length `iterations() + 1`.
    /// Non-increasing.
    pub fn best_objectives(&self) -> &[f64] {
        &self.best_objectives
    }

    /// Elapsed time since the run started, one entry per objective.
    pub fn timestamps(&self) -> &[Duration] {
        &self.timestamps
    }

    /// Wall time of each iteration.
    pub fn runtimes(&self) -> Vec<Duration> {
        self.timestamps
            .windows(2)
            .map(|w| w[1].saturating_sub(w[0]))
            .collect()
    }

    /// Wall time between the start of the run and the last iteration.
    pub fn total_runtime(&self) -> Duration {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last.saturating_sub(*first),
            _ => Duration::ZERO,
        }
    }

    /// Outcome counts per destroy operator name.
    pub fn destroy_operator_counts(&self) -> &HashMap<String, OutcomeCounts> {
        &self.destroy_counts
    }

    /// Outcome counts per repair operator name.
    pub fn repair_operator_counts(&self) -> &HashMap<String, OutcomeCounts> {
        &self.repair_counts
    }

    /// How many iterations ended with `outcome`.
    pub fn outcome_count(&self, outcome: Outcome) -> u64 {
        self.outcome_totals[outcome.index()]
    }

    /// Destroy operator index chosen in each iteration.
    ///
    /// Empty unless [`AlnsConfig::record_operator_log`](crate::AlnsConfig) is set.
    pub fn destroy_log(&self) -> &[usize] {
        &self.destroy_log
    }

    /// Repair operator index chosen in each iteration.
    pub fn repair_log(&self) -> &[usize] {
        &self.repair_log
    }

    /// `(destroy index, elements unassigned)` per iteration.
    ///
    /// Only filled when the state reports [`State::assigned`](crate::State::assigned).
    pub fn destroyed_counts(&self) -> &[(usize, usize)] {
        &self.destroyed
    }

    /// `(repair index, elements assigned)` per iteration.
    pub fn inserted_counts(&self) -> &[(usize, usize)] {
        &self.inserted
    }
}

fn bump(counts: &mut HashMap<String, OutcomeCounts>, name: &str, outcome: Outcome) {
    match counts.get_mut(name) {
        Some(c) => c[outcome.index()] += 1,
        None => {
            let mut c = [0; 4];
            c[outcome.index()] = 1;
            counts.insert(name.to_owned(), c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations() {
        let stats = Statistics::new(42.0);
        assert_eq!(stats.iterations(), 0);
        assert_eq!(stats.objectives(), &[42.0]);
        assert_eq!(stats.best_objectives(), &[42.0]);
        assert_eq!(stats.timestamps().len(), 1);
        assert!(stats.runtimes().is_empty());
        assert_eq!(stats.total_runtime(), Duration::ZERO);
        assert!(stats.destroy_operator_counts().is_empty());
        assert!(stats.repair_operator_counts().is_empty());
    }

    #[test]
    fn test_operator_counts() {
        let mut stats = Statistics::new(0.0);
        stats.collect_destroy_operator("random", Outcome::Best);
        stats.collect_destroy_operator("random", Outcome::Reject);
        stats.collect_destroy_operator("random", Outcome::Reject);
        stats.collect_destroy_operator("worst", Outcome::Accept);
        stats.collect_repair_operator("greedy", Outcome::Better);

        assert_eq!(stats.destroy_operator_counts()["random"], [1, 0, 0, 2]);
        assert_eq!(stats.destroy_operator_counts()["worst"], [0, 0, 1, 0]);
        assert_eq!(stats.repair_operator_counts()["greedy"], [0, 1, 0, 0]);
        assert_eq!(stats.outcome_count(Outcome::Reject), 2);
        assert_eq!(stats.outcome_count(Outcome::Better), 0);
    }

    #[test]
    fn test_runtime_trace_non_decreasing() {
        let mut stats = Statistics::new(0.0);
        for i in 0..20 {
            stats.collect_objective(i as f64, 0.0);
            stats.collect_runtime();
        }
        assert_eq!(stats.timestamps().len(), stats.objectives().len());
        assert_eq!(stats.runtimes().len(), 20);
        for w in stats.timestamps().windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert_eq!(
            stats.total_runtime(),
            *stats.timestamps().last().unwrap() - stats.timestamps()[0]
        );
    }
}
