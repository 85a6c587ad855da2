//! DELETE operation - removes a present key.

use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::operation::Operation;
use crate::result::{Mutated, MutationOutcome};
use crate::store::KeyedStore;
use crate::validation::describe_key;

/// Execute a DELETE against a copy of `source`.
pub fn execute_delete<S: KeyedStore>(source: &S, key: S::Key) -> MutationResult<Mutated<S>> {
    let mut mapping = source.clone();

    let removed = mapping
        .take(&key)
        .ok_or_else(|| MutationError::key_not_found(describe_key(&key), Operation::Delete))?;

    debug!(op = %Operation::Delete, key = ?key, "deleted key");

    Ok(Mutated {
        mapping,
        outcome: MutationOutcome::Deleted { removed },
    })
}
