//! mapmut mutation
//!
//! Apply a single named change (ADD/UPDATE/DELETE) to a key-value mapping,
//! returning a modified copy and leaving the caller's mapping untouched.
//!
//! Responsibilities:
//! - Validate the operation tag and the presence of key and value
//! - Apply the change to a private copy of the mapping
//! - Report what changed
//!
//! # Module Structure
//!
//! - `mutator` - `MappingMutator` and the `mutate`/`mutate_value` entry points
//! - `ops/` - Individual operation implementations (add, update, delete)
//! - `operation` - The `Operation` tag and its textual form
//! - `store` - The `KeyedStore` trait implemented by supported mapping types
//! - `validation` - Precondition checks shared by all operations
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod mutator;
mod operation;
mod ops;
mod result;
mod store;
mod validation;

pub use error::{MutationError, MutationErrorKind, MutationResult};
pub use mutator::{mutate, mutate_value, MappingMutator};
pub use operation::Operation;
pub use result::{Mutated, MutationOutcome};
pub use store::KeyedStore;
