//! Problem-agnostic Adaptive Large Neighborhood Search.
//!
//! The engine alternates *destroy* operators (partially disassemble a
//! solution) and *repair* operators (rebuild it) to escape local optima,
//! while tracking the best solution seen. It knows nothing about the problem
//! beyond a single objective value, so every moving part is pluggable:
//!
//! - **Operators**: any [`Operator`], including plain closures, registered on
//!   an [`Alns`] instance.
//! - **Selection** ([`select`]): picks the destroy/repair pair each iteration
//!   and learns from the outcome, e.g. [`select::RouletteWheel`].
//! - **Acceptance** ([`accept`]): decides whether a candidate replaces the
//!   current solution, e.g. [`accept::SimulatedAnnealing`].
//! - **Stopping** ([`stop`]): a fixed iteration budget,
//!   [`stop::MaxIterations`].
//!
//! Every candidate is classified as an [`Outcome`] (best, better, accept or
//! reject). A new global best is always kept, whatever the acceptance
//! criterion says.
//!
//! # Architecture
//!
//! Execution is single-threaded and deterministic: one random stream, owned
//! by the engine, is consumed in a fixed order (selection, destroy, repair,
//! acceptance, callback), so equal seeds reproduce a run exactly. The crate
//! logs through `tracing` and never installs a subscriber.

pub mod accept;
mod alns;
mod error;
pub mod select;
pub mod stop;

pub use alns::{
    determine_outcome, Alns, AlnsConfig, AlnsResult, BoxedOperator, Callback, Callbacks,
    Operator, OperatorRegistry, Outcome, OutcomeCounts, State, Statistics,
};
pub use error::{AlnsError, OperatorKind, Result};
