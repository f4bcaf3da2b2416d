//! Insertion-ordered operator registry.

use super::types::Operator;
use crate::error::OperatorKind;
use tracing::{debug, warn};

/// A registered operator.
pub type BoxedOperator<S, R, O> = Box<dyn Operator<S, R, O>>;

/// Name-keyed, insertion-ordered collection of operators of one kind.
///
/// The position of an operator is the index a selection scheme uses to pick
/// it. Registering a name that already exists replaces that operator in place,
/// so indices of the other operators never shift.
pub struct OperatorRegistry<S, R, O = ()> {
    kind: OperatorKind,
    entries: Vec<(String, BoxedOperator<S, R, O>)>,
}

impl<S, R, O> OperatorRegistry<S, R, O> {
    pub fn new(kind: OperatorKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// Registers `op` under `name`, returning the index it occupies.
    pub fn insert(&mut self, name: impl Into<String>, op: BoxedOperator<S, R, O>) -> usize {
        let name = name.into();
        if let Some(idx) = self.position(&name) {
            warn!(kind = %self.kind, name = %name, index = idx, "overwriting operator");
            self.entries[idx].1 = op;
            return idx;
        }

        debug!(kind = %self.kind, name = %name, index = self.entries.len(), "adding operator");
        self.entries.push((name, op));
        self.entries.len() - 1
    }

    /// Index of the operator registered under `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    pub fn get(&self, idx: usize) -> Option<(&str, &dyn Operator<S, R, O>)> {
        self.entries
            .get(idx)
            .map(|(name, op)| (name.as_str(), op.as_ref()))
    }

    /// `(name, operator)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Operator<S, R, O>)> + '_ {
        self.entries
            .iter()
            .map(|(name, op)| (name.as_str(), op.as_ref()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
