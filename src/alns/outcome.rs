//! Candidate evaluation outcomes.

use std::fmt;

/// How a candidate compared against the best and current solutions.
///
/// Variants are not ordered by quality, but [`Outcome::Best`] dominates: it
/// is the only outcome that replaces the global best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// New global best.
    Best,
    /// Accepted and better than the current solution.
    Better,
    /// Accepted, but not better than the current solution.
    Accept,
    /// Not accepted.
    Reject,
}

impl Outcome {
    /// All outcomes, in index order.
    pub const ALL: [Outcome; 4] = [
        Outcome::Best,
        Outcome::Better,
        Outcome::Accept,
        Outcome::Reject,
    ];

    /// Stable index in `0..4`, used to address per-outcome arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Outcome::Best => 0,
            Outcome::Better => 1,
            Outcome::Accept => 2,
            Outcome::Reject => 3,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Best => "best",
            Outcome::Better => "better",
            Outcome::Accept => "accept",
            Outcome::Reject => "reject",
        };
        f.write_str(s)
    }
}

/// Classifies a candidate.
///
/// The new-best check runs independently of `accepted` and overrides it: a
/// candidate that beats the global best is never rejected. All comparisons
/// are strict, so ties produce neither `Best` nor `Better`.
#[inline]
pub fn determine_outcome(best: f64, curr: f64, cand: f64, accepted: bool) -> Outcome {
    if cand < best {
        Outcome::Best
    } else if !accepted {
        Outcome::Reject
    } else if cand < curr {
        Outcome::Better
    } else {
        Outcome::Accept
    }
}
