//! ALNS execution loop.

use super::callback::Callbacks;
use super::config::AlnsConfig;
use super::outcome::{determine_outcome, Outcome};
use super::registry::OperatorRegistry;
use super::stats::Statistics;
use super::types::{Operator, State};
use crate::accept::AcceptanceCriterion;
use crate::error::{AlnsError, OperatorKind, Result};
use crate::select::SelectionScheme;
use crate::stop::StoppingCriterion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use tracing::{debug, info};

/// Result of an ALNS run.
#[derive(Debug, Clone)]
pub struct AlnsResult<S> {
    /// The best solution found.
    pub best: S,

    /// Objective of the best solution.
    pub best_objective: f64,

    /// Traces and per-operator counters.
    pub statistics: Statistics,
}

impl<S> AlnsResult<S> {
    /// Number of iterations performed.
    pub fn iterations(&self) -> usize {
        self.statistics.iterations()
    }
}

/// The adaptive large neighbourhood search engine.
///
/// Holds the destroy and repair operators, the per-outcome callbacks and the
/// random stream. The search itself is driven by [`iterate`](Self::iterate),
/// which takes the remaining collaborators (selection scheme, acceptance and
/// stopping criteria) per run.
///
/// The engine minimises. It never looks at a state beyond
/// [`State::objective`] and [`State::assigned`].
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use u_alns::accept::HillClimbing;
/// use u_alns::select::RandomSelect;
/// use u_alns::stop::MaxIterations;
/// use u_alns::{Alns, AlnsConfig, State};
///
/// #[derive(Clone)]
/// struct Value(f64);
///
/// impl State for Value {
///     fn objective(&self) -> f64 { self.0.abs() }
/// }
///
/// let mut alns: Alns<Value> = Alns::from_config(AlnsConfig::default().with_seed(42));
/// alns.add_destroy_operator_named(|v: &Value, _: &mut StdRng, _: &()| Value(v.0 * 0.5), "halve");
/// alns.add_repair_operator_named(|v: &Value, _: &mut StdRng, _: &()| v.clone(), "keep");
///
/// let mut select = RandomSelect::new(1, 1).unwrap();
/// let result = alns
///     .iterate(Value(64.0), &mut select, &mut HillClimbing, &mut MaxIterations::new(6), &())
///     .unwrap();
/// assert_eq!(result.best_objective, 1.0);
/// ```
///
/// # References
///
/// Pisinger & Ropke (2010), "Large Neighborhood Search", Handbook of
/// Metaheuristics, pp. 399-420
pub struct Alns<S, R = StdRng, O = ()> {
    rng: R,
    config: AlnsConfig,
    destroy: OperatorRegistry<S, R, O>,
    repair: OperatorRegistry<S, R, O>,
    callbacks: Callbacks<S, R, O>,
}

impl<S, O> Alns<S, StdRng, O> {
    /// Creates an engine whose random stream is seeded from `config.seed`.
    pub fn from_config(config: AlnsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_config(rng, config)
    }
}

impl<S, R, O> Alns<S, R, O> {
    /// Creates an engine around `rng` with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, AlnsConfig::default())
    }

    /// Creates an engine around `rng`. `config.seed` is ignored.
    pub fn with_config(rng: R, config: AlnsConfig) -> Self {
        Self {
            rng,
            config,
            destroy: OperatorRegistry::new(OperatorKind::Destroy),
            repair: OperatorRegistry::new(OperatorKind::Repair),
            callbacks: Callbacks::default(),
        }
    }

    pub fn config(&self) -> &AlnsConfig {
        &self.config
    }

    /// The random stream shared by every collaborator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Adds a destroy operator under its own [`Operator::name`].
    ///
    /// The operator receives the engine's current solution, not a copy.
    /// Registering a name twice replaces the earlier operator.
    pub fn add_destroy_operator<Op>(&mut self, op: Op)
    where
        Op: Operator<S, R, O> + 'static,
    {
        let name = op.name().to_owned();
        self.destroy.insert(name, Box::new(op));
    }

    /// Adds a destroy operator under `name`.
    pub fn add_destroy_operator_named<Op>(&mut self, op: Op, name: impl Into<String>)
    where
        Op: Operator<S, R, O> + 'static,
    {
        self.destroy.insert(name, Box::new(op));
    }

    /// Adds a repair operator under its own [`Operator::name`].
    pub fn add_repair_operator<Op>(&mut self, op: Op)
    where
        Op: Operator<S, R, O> + 'static,
    {
        let name = op.name().to_owned();
        self.repair.insert(name, Box::new(op));
    }

    /// Adds a repair operator under `name`.
    pub fn add_repair_operator_named<Op>(&mut self, op: Op, name: impl Into<String>)
    where
        Op: Operator<S, R, O> + 'static,
    {
        self.repair.insert(name, Box::new(op));
    }

    /// `(name, operator)` pairs in registration order. A selection scheme's
    /// destroy index addresses this list.
    pub fn destroy_operators(&self) -> Vec<(&str, &dyn Operator<S, R, O>)> {
        self.destroy.iter().collect()
    }

    /// `(name, operator)` pairs in registration order. A selection scheme's
    /// repair index addresses this list.
    pub fn repair_operators(&self) -> Vec<(&str, &dyn Operator<S, R, O>)> {
        self.repair.iter().collect()
    }

    /// Called when a candidate becomes the new global best.
    pub fn on_best<F>(&mut self, func: F)
    where
        F: Fn(&mut S, &mut R, &O) + 'static,
    {
        debug!("adding on_best callback");
        self.callbacks.set(Outcome::Best, Box::new(func));
    }

    /// Called when an accepted candidate improves on the current solution
    /// without being a new global best.
    pub fn on_better<F>(&mut self, func: F)
    where
        F: Fn(&mut S, &mut R, &O) + 'static,
    {
        debug!("adding on_better callback");
        self.callbacks.set(Outcome::Better, Box::new(func));
    }

    /// Called when a candidate is accepted without improving.
    pub fn on_accept<F>(&mut self, func: F)
    where
        F: Fn(&mut S, &mut R, &O) + 'static,
    {
        debug!("adding on_accept callback");
        self.callbacks.set(Outcome::Accept, Box::new(func));
    }

    /// Called when a candidate is rejected.
    pub fn on_reject<F>(&mut self, func: F)
    where
        F: Fn(&mut S, &mut R, &O) + 'static,
    {
        debug!("adding on_reject callback");
        self.callbacks.set(Outcome::Reject, Box::new(func));
    }
}

impl<S: State + Clone, R, O> Alns<S, R, O> {
    /// Runs the search from `initial`.
    ///
    /// Each iteration checks `stop`, lets `select` pick a destroy/repair pair,
    /// applies both to the current solution, classifies the candidate against
    /// `accept`'s verdict, runs the matching callback, moves the incumbents,
    /// feeds the outcome back to `select` and records statistics. The random
    /// stream is consumed in exactly that order, so equal seeds and equal
    /// collaborators reproduce a run exactly.
    ///
    /// `options` is passed unchanged to every operator and callback.
    ///
    /// # Errors
    /// - [`AlnsError::MissingOperators`] if either registry is empty.
    /// - [`AlnsError::UnsupportedStoppingCriterion`] if `stop` is not a fixed
    ///   iteration budget.
    /// - [`AlnsError::InvalidOperatorIndex`] if `select` picks an index past
    ///   the end of a registry; the run stops at that iteration.
    ///
    /// The first two are checked before any collaborator is invoked.
    pub fn iterate<Sel, Acc, Stop>(
        &mut self,
        initial: S,
        select: &mut Sel,
        accept: &mut Acc,
        stop: &mut Stop,
        options: &O,
    ) -> Result<AlnsResult<S>>
    where
        Sel: SelectionScheme<S, R> + ?Sized,
        Acc: AcceptanceCriterion<S, R> + ?Sized,
        Stop: StoppingCriterion<S, R> + ?Sized,
    {
        if self.destroy.is_empty() {
            return Err(AlnsError::MissingOperators {
                kind: OperatorKind::Destroy,
            });
        }
        if self.repair.is_empty() {
            return Err(AlnsError::MissingOperators {
                kind: OperatorKind::Repair,
            });
        }
        let Some(max_iterations) = stop.max_iterations() else {
            return Err(AlnsError::UnsupportedStoppingCriterion);
        };

        let mut curr = Rc::new(initial);
        let mut best = Rc::clone(&curr);

        let init_obj = curr.objective();
        info!(
            objective = init_obj,
            max_iterations,
            destroy_operators = self.destroy.len(),
            repair_operators = self.repair.len(),
            "starting ALNS"
        );

        let mut stats = Statistics::new(init_obj);
        let mut iteration = 0usize;

        while !stop.should_stop(&mut self.rng, &best, &curr) {
            let (d_idx, r_idx) = select.select(&mut self.rng, &best, &curr);

            let (d_name, d_op) = self.destroy.get(d_idx).ok_or(AlnsError::InvalidOperatorIndex {
                kind: OperatorKind::Destroy,
                index: d_idx,
                len: self.destroy.len(),
            })?;
            let (r_name, r_op) = self.repair.get(r_idx).ok_or(AlnsError::InvalidOperatorIndex {
                kind: OperatorKind::Repair,
                index: r_idx,
                len: self.repair.len(),
            })?;
            debug!(iteration, destroy = d_name, repair = r_name, "selected operators");

            let destroyed = d_op.apply(&curr, &mut self.rng, options);
            let mut cand = r_op.apply(&destroyed, &mut self.rng, options);

            if let (Some(before), Some(partial), Some(after)) =
                (curr.assigned(), destroyed.assigned(), cand.assigned())
            {
                stats.collect_assignment_change(
                    d_idx,
                    r_idx,
                    before.saturating_sub(partial),
                    after.saturating_sub(partial),
                );
            }
            drop(destroyed);

            let accepted = accept.accept(&mut self.rng, &best, &curr, &cand);
            let outcome =
                determine_outcome(best.objective(), curr.objective(), cand.objective(), accepted);

            self.callbacks
                .dispatch(outcome, &mut cand, &mut self.rng, options);
            let cand = Rc::new(cand);

            match outcome {
                Outcome::Best => {
                    debug!(iteration, objective = cand.objective(), "new best");
                    best = Rc::clone(&cand);
                    curr = Rc::clone(&cand);
                }
                Outcome::Better | Outcome::Accept => curr = Rc::clone(&cand),
                Outcome::Reject => {}
            }

            select.update(&cand, d_idx, r_idx, outcome);

            stats.collect_objective(curr.objective(), best.objective());
            stats.collect_runtime();
            stats.collect_destroy_operator(d_name, outcome);
            stats.collect_repair_operator(r_name, outcome);
            if self.config.record_operator_log {
                stats.collect_selection(d_idx, r_idx);
            }

            iteration += 1;
            if self.config.log_interval > 0 && iteration.is_multiple_of(self.config.log_interval) {
                info!(
                    iteration,
                    current = curr.objective(),
                    best = best.objective(),
                    "progress"
                );
            }
        }

        let best_objective = best.objective();
        info!(
            iterations = iteration,
            best = best_objective,
            runtime_s = stats.total_runtime().as_secs_f64(),
            "finished ALNS"
        );

        drop(curr);
        Ok(AlnsResult {
            best: Rc::unwrap_or_clone(best),
            best_objective,
            statistics: stats,
        })
    }
}
