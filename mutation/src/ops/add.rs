//! ADD operation - inserts a key that is not yet present.

use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::operation::Operation;
use crate::result::{Mutated, MutationOutcome};
use crate::store::KeyedStore;
use crate::validation::describe_key;

/// Execute an ADD against a copy of `source`.
pub fn execute_add<S: KeyedStore>(
    source: &S,
    key: S::Key,
    value: S::Value,
) -> MutationResult<Mutated<S>> {
    let mut mapping = source.clone();

    if mapping.contains(&key) {
        return Err(MutationError::duplicate_key(describe_key(&key)));
    }

    debug!(op = %Operation::Add, key = ?key, "adding key");
    mapping.put(key, value);

    Ok(Mutated {
        mapping,
        outcome: MutationOutcome::Added,
    })
}
