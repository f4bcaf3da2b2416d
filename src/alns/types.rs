//! Core traits for ALNS.

/// A candidate solution, as seen by the engine.
///
/// The engine never looks inside a state. It only reads the objective (to
/// classify candidates) and, if provided, the number of assigned elements
/// (to report how many elements each operator removed or inserted).
///
/// # Examples
///
/// ```
/// use u_alns::State;
///
/// #[derive(Clone)]
/// struct Tour { cost: f64, unassigned: Vec<usize>, len: usize }
///
/// impl State for Tour {
///     fn objective(&self) -> f64 { self.cost }
///     fn assigned(&self) -> Option<usize> { Some(self.len - self.unassigned.len()) }
/// }
/// ```
pub trait State {
    /// Objective value. Lower is better. Must be pure and deterministic.
    fn objective(&self) -> f64;

    /// Number of served/assigned elements, if the state tracks them.
    ///
    /// Only used for the destroyed/inserted diagnostics in
    /// [`Statistics`](super::Statistics).
    fn assigned(&self) -> Option<usize> {
        None
    }
}

/// A destroy or repair operator.
///
/// Destroy operators map a complete solution to a partial one; repair
/// operators map a partial solution back to a complete candidate. Both share
/// this signature.
///
/// The operator receives a shared reference to the live incumbent, never a
/// copy. It must build its result as a new value (cloning internally where it
/// needs to) rather than relying on the engine for isolation.
///
/// Any `Fn(&S, &mut R, &O) -> S` closure is an operator; its name defaults to
/// the closure's type name, so register closures under an explicit name.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 2
pub trait Operator<S, R, O = ()> {
    /// Name used when the operator is registered without an explicit one.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Applies the operator to `state`, producing a new state.
    ///
    /// # Arguments
    /// * `state` - The state to destroy or repair
    /// * `rng` - The engine's random number generator
    /// * `options` - Caller-supplied options, passed through unchanged
    fn apply(&self, state: &S, rng: &mut R, options: &O) -> S;
}

impl<S, R, O, F> Operator<S, R, O> for F
where
    F: Fn(&S, &mut R, &O) -> S,
{
    fn apply(&self, state: &S, rng: &mut R, options: &O) -> S {
        self(state, rng, options)
    }
}
