//! UPDATE operation - replaces the value of a present key.

use std::mem;

use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::operation::Operation;
use crate::result::{Mutated, MutationOutcome};
use crate::store::KeyedStore;
use crate::validation::describe_key;

/// Execute an UPDATE against a copy of `source`.
///
/// The key keeps its position in ordered stores.
pub fn execute_update<S: KeyedStore>(
    source: &S,
    key: S::Key,
    value: S::Value,
) -> MutationResult<Mutated<S>> {
    let mut mapping = source.clone();

    let slot = mapping
        .lookup_mut(&key)
        .ok_or_else(|| MutationError::key_not_found(describe_key(&key), Operation::Update))?;

    debug!(op = %Operation::Update, key = ?key, "updating key");
    let previous = mem::replace(slot, value);

    Ok(Mutated {
        mapping,
        outcome: MutationOutcome::Updated { previous },
    })
}
