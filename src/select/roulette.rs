//! Segment-based adaptive roulette wheel.

use super::SelectionScheme;
use crate::error::{AlnsError, Result};
use crate::Outcome;
use rand::Rng;

/// Parameters of a [`RouletteWheel`].
///
/// Scores are indexed by [`Outcome::index`]: best, better, accept, reject.
/// Defaults follow Ropke & Pisinger: scores 33/9/3/0, reaction factor 0.1,
/// segments of 100 iterations.
///
/// # Examples
///
/// ```
/// use u_alns::select::{RouletteConfig, RouletteWheel};
///
/// let config = RouletteConfig::default()
///     .with_scores([33.0, 9.0, 3.0, 0.0])
///     .with_segment_length(50)
///     .with_reaction_factor(0.2);
/// let select = RouletteWheel::new(3, 2, &config).unwrap();
/// assert_eq!(select.destroy_weights(), vec![1.0; 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouletteConfig {
    /// Score earned per outcome.
    pub scores: [f64; 4],

    /// Reaction factor (rho) in (0, 1]. Higher = faster adaptation.
    pub reaction_factor: f64,

    /// Iterations between weight updates.
    pub segment_length: usize,

    /// Floor for every weight, so no operator drops out entirely.
    pub min_weight: f64,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            scores: [33.0, 9.0, 3.0, 0.0],
            reaction_factor: 0.1,
            segment_length: 100,
            min_weight: 0.01,
        }
    }
}

impl RouletteConfig {
    pub fn with_scores(mut self, scores: [f64; 4]) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_reaction_factor(mut self, rho: f64) -> Self {
        self.reaction_factor = rho;
        self
    }

    pub fn with_segment_length(mut self, n: usize) -> Self {
        self.segment_length = n.max(1);
        self
    }

    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.reaction_factor > 0.0 && self.reaction_factor <= 1.0) {
            return Err(AlnsError::InvalidConfig(format!(
                "reaction_factor must be in (0, 1], got {}",
                self.reaction_factor
            )));
        }
        if self.scores.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(AlnsError::InvalidConfig(format!(
                "outcome scores must be finite and non-negative, got {:?}",
                self.scores
            )));
        }
        if !(self.min_weight.is_finite() && self.min_weight > 0.0) {
            return Err(AlnsError::InvalidConfig(format!(
                "min_weight must be finite and positive, got {}",
                self.min_weight
            )));
        }
        if self.segment_length == 0 {
            return Err(AlnsError::InvalidConfig(
                "segment_length must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Slot {
    weight: f64,
    score: f64,
    uses: usize,
}

impl Slot {
    fn new() -> Self {
        Self {
            weight: 1.0,
            score: 0.0,
            uses: 0,
        }
    }

    /// Blends the segment's mean score into the weight, then clears the
    /// segment. A slot that was not picked this segment keeps its weight.
    fn close_segment(&mut self, rho: f64, floor: f64) {
        if self.uses > 0 {
            let mean = self.score / self.uses as f64;
            self.weight = ((1.0 - rho) * self.weight + rho * mean).max(floor);
        }
        self.score = 0.0;
        self.uses = 0;
    }
}

/// Draws a slot index with probability proportional to its weight.
///
/// Callers guarantee a non-empty slice of finite, positive weights.
fn spin<R: Rng>(slots: &[Slot], rng: &mut R) -> usize {
    let total: f64 = slots.iter().map(|s| s.weight).sum();
    let mut roll = rng.random_range(0.0..total);
    for (i, slot) in slots.iter().enumerate() {
        if roll < slot.weight {
            return i;
        }
        roll -= slot.weight;
    }
    slots.len() - 1
}

/// Adaptive roulette wheel over destroy and repair operators.
///
/// Each outcome earns the chosen pair its score from [`RouletteConfig`].
/// Scores accumulate over a segment; when the segment closes, every operator
/// picked in it moves its weight towards its mean score by the reaction
/// factor. Operators are drawn with probability proportional to weight.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 3.4
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    config: RouletteConfig,
    destroy: Vec<Slot>,
    repair: Vec<Slot>,
    iteration: usize,
}

impl RouletteWheel {
    /// Creates a wheel with unit weights.
    ///
    /// # Errors
    /// [`AlnsError::InvalidConfig`] if either operator count is zero or
    /// `config` fails [`RouletteConfig::validate`].
    pub fn new(num_destroy: usize, num_repair: usize, config: &RouletteConfig) -> Result<Self> {
        if num_destroy == 0 || num_repair == 0 {
            return Err(AlnsError::InvalidConfig(
                "RouletteWheel needs at least one destroy and one repair operator".into(),
            ));
        }
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            destroy: vec![Slot::new(); num_destroy],
            repair: vec![Slot::new(); num_repair],
            iteration: 0,
        })
    }

    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    pub fn destroy_weights(&self) -> Vec<f64> {
        self.destroy.iter().map(|s| s.weight).collect()
    }

    pub fn repair_weights(&self) -> Vec<f64> {
        self.repair.iter().map(|s| s.weight).collect()
    }
}

impl<S, R: Rng> SelectionScheme<S, R> for RouletteWheel {
    fn select(&mut self, rng: &mut R, _best: &S, _curr: &S) -> (usize, usize) {
        let d_idx = spin(&self.destroy, rng);
        let r_idx = spin(&self.repair, rng);
        (d_idx, r_idx)
    }

    fn update(&mut self, _cand: &S, d_idx: usize, r_idx: usize, outcome: Outcome) {
        let score = self.config.scores[outcome.index()];
        for slot in [self.destroy.get_mut(d_idx), self.repair.get_mut(r_idx)]
            .into_iter()
            .flatten()
        {
            slot.score += score;
            slot.uses += 1;
        }

        self.iteration += 1;
        if self.iteration.is_multiple_of(self.config.segment_length) {
            let RouletteConfig {
                reaction_factor,
                min_weight,
                ..
            } = self.config;
            for slot in self.destroy.iter_mut().chain(self.repair.iter_mut()) {
                slot.close_segment(reaction_factor, min_weight);
            }
        }
    }
}
