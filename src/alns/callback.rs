//! Per-outcome callbacks.

use super::outcome::Outcome;

/// A callback invoked with the candidate after it has been classified.
///
/// The callback may modify the candidate in place. The candidate is not
/// evaluated again afterwards: a rejected candidate stays rejected, and any
/// objective change made here is carried into later iterations as is.
pub type Callback<S, R, O> = Box<dyn Fn(&mut S, &mut R, &O)>;

/// Holds at most one callback per [`Outcome`].
pub struct Callbacks<S, R, O = ()> {
    slots: [Option<Callback<S, R, O>>; 4],
}

impl<S, R, O> Default for Callbacks<S, R, O> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<S, R, O> Callbacks<S, R, O> {
    /// Sets the callback for `outcome`, returning the one it replaces.
    pub fn set(&mut self, outcome: Outcome, func: Callback<S, R, O>) -> Option<Callback<S, R, O>> {
        self.slots[outcome.index()].replace(func)
    }

    pub fn is_set(&self, outcome: Outcome) -> bool {
        self.slots[outcome.index()].is_some()
    }

    /// Runs the callback registered for `outcome`, if any.
    #[inline]
    pub fn dispatch(&self, outcome: Outcome, cand: &mut S, rng: &mut R, options: &O) {
        if let Some(func) = &self.slots[outcome.index()] {
            func(cand, rng, options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_only_matching_outcome() {
        let mut callbacks: Callbacks<f64, (), ()> = Callbacks::default();
        callbacks.set(Outcome::Best, Box::new(|s: &mut f64, _: &mut (), _: &()| *s += 1.0));

        let mut cand = 0.0;
        callbacks.dispatch(Outcome::Reject, &mut cand, &mut (), &());
        assert_eq!(cand, 0.0);
        callbacks.dispatch(Outcome::Best, &mut cand, &mut (), &());
        assert_eq!(cand, 1.0);
        assert!(callbacks.is_set(Outcome::Best));
        assert!(!callbacks.is_set(Outcome::Better));
    }

    #[test]
    fn test_set_replaces_previous() {
        let mut callbacks: Callbacks<f64, (), ()> = Callbacks::default();
        assert!(callbacks
            .set(Outcome::Accept, Box::new(|s: &mut f64, _: &mut (), _: &()| *s = 1.0))
            .is_none());
        assert!(callbacks
            .set(Outcome::Accept, Box::new(|s: &mut f64, _: &mut (), _: &()| *s = 2.0))
            .is_some());

        let mut cand = 0.0;
        callbacks.dispatch(Outcome::Accept, &mut cand, &mut (), &());
        assert_eq!(cand, 2.0);
    }
}
