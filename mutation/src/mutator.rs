//! Mapping mutator - validates a request and dispatches it.
//!
//! The mutator delegates to the operation modules in `ops/`:
//! - `ops/add.rs` - ADD (insert a new key)
//! - `ops/update.rs` - UPDATE (replace a present key's value)
//! - `ops/delete.rs` - DELETE (remove a present key)

use mapmut_core::Value;
use tracing::debug;

use crate::error::MutationResult;
use crate::operation::Operation;
use crate::ops;
use crate::result::Mutated;
use crate::store::KeyedStore;
use crate::validation::{self, Change};

/// Produces mutated copies of a borrowed source mapping.
///
/// The source is only ever read; every call returns a fresh copy.
#[derive(Debug)]
pub struct MappingMutator<'m, S> {
    source: &'m S,
}

impl<S> Clone for MappingMutator<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for MappingMutator<'_, S> {}

impl<'m, S: KeyedStore> MappingMutator<'m, S> {
    /// Create a mutator over `source`.
    pub fn new(source: &'m S) -> Self {
        Self { source }
    }

    /// Validate and apply a change, returning the copy and what changed.
    pub fn apply(
        &self,
        operation: Operation,
        key: Option<S::Key>,
        value: Option<S::Value>,
    ) -> MutationResult<Mutated<S>> {
        let result = validation::validate(operation, key, value).and_then(|change| match change {
            Change::Add { key, value } => ops::execute_add(self.source, key, value),
            Change::Update { key, value } => ops::execute_update(self.source, key, value),
            Change::Delete { key } => ops::execute_delete(self.source, key),
        });

        if let Err(ref error) = result {
            debug!(op = %operation, %error, "mutation rejected");
        }
        result
    }

    /// Validate and apply a change, returning the mutated copy.
    pub fn mutate(
        &self,
        operation: Operation,
        key: Option<S::Key>,
        value: Option<S::Value>,
    ) -> MutationResult<S> {
        self.apply(operation, key, value).map(Mutated::into_mapping)
    }

    /// Like [`mutate`](Self::mutate), with the operation given as its textual tag.
    pub fn mutate_tagged(
        &self,
        tag: &str,
        key: Option<S::Key>,
        value: Option<S::Value>,
    ) -> MutationResult<S> {
        let operation = tag.parse::<Operation>().map_err(|error| {
            debug!(tag, %error, "mutation rejected");
            error
        })?;
        self.mutate(operation, key, value)
    }

    /// Insert `key`, failing if it is already present.
    pub fn add(&self, key: S::Key, value: S::Value) -> MutationResult<S> {
        self.mutate(Operation::Add, Some(key), Some(value))
    }

    /// Replace the value at `key`, failing if it is absent.
    pub fn update(&self, key: S::Key, value: S::Value) -> MutationResult<S> {
        self.mutate(Operation::Update, Some(key), Some(value))
    }

    /// Remove `key`, failing if it is absent.
    pub fn delete(&self, key: S::Key) -> MutationResult<S> {
        self.mutate(Operation::Delete, Some(key), None)
    }
}

/// Apply one change to a copy of `mapping`.
pub fn mutate<S: KeyedStore>(
    mapping: &S,
    operation: Operation,
    key: Option<S::Key>,
    value: Option<S::Value>,
) -> MutationResult<S> {
    MappingMutator::new(mapping).mutate(operation, key, value)
}

/// Apply one change to a dynamically typed target.
///
/// `target` must be a `Value::Map` and `tag` one of `add`, `update` or
/// `delete`. A `Value::Null` value counts as missing. The result is the
/// mutated copy wrapped back into a `Value::Map`.
pub fn mutate_value(
    target: &Value,
    tag: &str,
    key: Option<&str>,
    value: Option<Value>,
) -> MutationResult<Value> {
    let mapping = validation::expect_mapping(target)?;
    MappingMutator::new(mapping)
        .mutate_tagged(
            tag,
            key.map(str::to_string),
            value.filter(|v| !v.is_null()),
        )
        .map(Value::Map)
}
