//! Adaptive Large Neighborhood Search (ALNS) engine.
//!
//! ALNS iteratively destroys and repairs a solution using a portfolio of
//! operators whose selection adapts to their past performance. This module
//! holds the engine: the operator registries, the iteration loop, outcome
//! classification, per-outcome callbacks and run statistics.
//!
//! # References
//!
//! Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search Heuristic
//! for the Pickup and Delivery Problem with Time Windows"

mod callback;
mod config;
mod outcome;
mod registry;
mod runner;
mod stats;
mod types;

pub use callback::{Callback, Callbacks};
pub use config::AlnsConfig;
pub use outcome::{determine_outcome, Outcome};
pub use registry::{BoxedOperator, OperatorRegistry};
pub use runner::{Alns, AlnsResult};
pub use stats::{OutcomeCounts, Statistics};
pub use types::{Operator, State};
