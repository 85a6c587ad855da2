//! The operation tag.

use std::fmt;
use std::str::FromStr;

use crate::error::MutationError;

/// The change a mutation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Insert a key that is not yet present.
    Add,
    /// Replace the value of a present key.
    Update,
    /// Remove a present key.
    Delete,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Update, Operation::Delete];

    /// The textual tag: `add`, `update` or `delete`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags are matched exactly; `"Add"` is not `"add"`.
impl FromStr for Operation {
    type Err = MutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| MutationError::invalid_operation(s))
    }
}
