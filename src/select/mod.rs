//! Operator selection schemes.
//!
//! A selection scheme picks one destroy and one repair operator by index at
//! the start of every iteration, and is told the outcome afterwards so it can
//! adapt its preferences.

mod random;
mod roulette;

pub use random::RandomSelect;
pub use roulette::{RouletteConfig, RouletteWheel};

use crate::Outcome;

/// Chooses the destroy/repair pair for each iteration.
///
/// Indices address the engine's registries in registration order.
pub trait SelectionScheme<S, R> {
    /// Returns `(destroy_index, repair_index)`.
    fn select(&mut self, rng: &mut R, best: &S, curr: &S) -> (usize, usize);

    /// Feeds back the outcome of the pair chosen by the last `select` call.
    fn update(&mut self, cand: &S, d_idx: usize, r_idx: usize, outcome: Outcome);
}
