//! Mutation result types.

use std::fmt;

use crate::operation::Operation;
use crate::store::KeyedStore;

/// What a successful mutation changed.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<V> {
    /// A new key was inserted.
    Added,
    /// An existing value was replaced.
    Updated { previous: V },
    /// A key was removed.
    Deleted { removed: V },
}

impl<V> MutationOutcome<V> {
    /// The operation that produced this outcome.
    pub fn operation(&self) -> Operation {
        match self {
            MutationOutcome::Added => Operation::Add,
            MutationOutcome::Updated { .. } => Operation::Update,
            MutationOutcome::Deleted { .. } => Operation::Delete,
        }
    }

    /// The value that was replaced or removed, if any.
    pub fn displaced(&self) -> Option<&V> {
        match self {
            MutationOutcome::Added => None,
            MutationOutcome::Updated { previous } => Some(previous),
            MutationOutcome::Deleted { removed } => Some(removed),
        }
    }
}

/// A mutated copy together with its outcome.
pub struct Mutated<S: KeyedStore> {
    /// The new mapping.
    pub mapping: S,
    /// What changed relative to the source.
    pub outcome: MutationOutcome<S::Value>,
}

impl<S: KeyedStore> Mutated<S> {
    /// Discard the outcome and keep the mapping.
    pub fn into_mapping(self) -> S {
        self.mapping
    }
}

impl<S> fmt::Debug for Mutated<S>
where
    S: KeyedStore + fmt::Debug,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutated")
            .field("mapping", &self.mapping)
            .field("outcome", &self.outcome)
            .finish()
    }
}
