use super::SelectionScheme;
use crate::error::{AlnsError, Result};
use crate::Outcome;
use rand::Rng;

/// Picks operators uniformly at random and ignores feedback.
#[derive(Debug, Clone)]
pub struct RandomSelect {
    num_destroy: usize,
    num_repair: usize,
}

impl RandomSelect {
    pub fn new(num_destroy: usize, num_repair: usize) -> Result<Self> {
        if num_destroy == 0 || num_repair == 0 {
            return Err(AlnsError::InvalidConfig(
                "RandomSelect needs at least one destroy and one repair operator".into(),
            ));
        }
        Ok(Self {
            num_destroy,
            num_repair,
        })
    }
}

impl<S, R: Rng> SelectionScheme<S, R> for RandomSelect {
    fn select(&mut self, rng: &mut R, _best: &S, _curr: &S) -> (usize, usize) {
        let d_idx = rng.random_range(0..self.num_destroy);
        let r_idx = rng.random_range(0..self.num_repair);
        (d_idx, r_idx)
    }

    fn update(&mut self, _cand: &S, _d_idx: usize, _r_idx: usize, _outcome: Outcome) {}
}
