use super::AcceptanceCriterion;
use crate::State;

/// Accepts candidates that are at least as good as the current solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl<S: State, R> AcceptanceCriterion<S, R> for HillClimbing {
    fn accept(&mut self, _rng: &mut R, _best: &S, curr: &S, cand: &S) -> bool {
        cand.objective() <= curr.objective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cost(f64);

    impl State for Cost {
        fn objective(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_accepts_equal_and_better() {
        let mut hc = HillClimbing;
        let best = Cost(1.0);
        let curr = Cost(5.0);
        assert!(hc.accept(&mut (), &best, &curr, &Cost(4.0)));
        assert!(hc.accept(&mut (), &best, &curr, &Cost(5.0)));
        assert!(!hc.accept(&mut (), &best, &curr, &Cost(5.5)));
    }
}
