//! Precondition checks shared by all operations.
//!
//! Checks run in a fixed order and the first failure wins: the target must be a
//! mapping, the tag must name an operation, the key must be present, and the
//! value must be present for ADD and UPDATE.

use std::fmt::Debug;

use mapmut_core::{Mapping, Value};

use crate::error::{MutationError, MutationResult};
use crate::operation::Operation;

/// A change whose arguments have passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<K, V> {
    Add { key: K, value: V },
    Update { key: K, value: V },
    Delete { key: K },
}

/// Check key and value presence for `operation`.
///
/// A value supplied to DELETE is dropped.
pub fn validate<K, V>(
    operation: Operation,
    key: Option<K>,
    value: Option<V>,
) -> MutationResult<Change<K, V>> {
    let key = key.ok_or_else(|| MutationError::missing_argument("key", operation))?;

    match operation {
        Operation::Add => Ok(Change::Add {
            key,
            value: require_value(operation, value)?,
        }),
        Operation::Update => Ok(Change::Update {
            key,
            value: require_value(operation, value)?,
        }),
        Operation::Delete => {
            if value.is_some() {
                tracing::trace!(op = %operation, "ignoring value supplied to delete");
            }
            Ok(Change::Delete { key })
        }
    }
}

fn require_value<V>(operation: Operation, value: Option<V>) -> MutationResult<V> {
    value.ok_or_else(|| MutationError::missing_argument("value", operation))
}

/// Require that a dynamic value is a mapping.
pub fn expect_mapping(target: &Value) -> MutationResult<&Mapping> {
    target
        .as_map()
        .ok_or_else(|| MutationError::type_mismatch("Map", target.type_name()))
}

/// Render a key for error messages.
pub fn describe_key<K: Debug>(key: &K) -> String {
    format!("{:?}", key)
}
