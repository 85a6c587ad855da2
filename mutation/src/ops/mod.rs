//! Mutation operation implementations.
//!
//! Each operation (ADD, UPDATE, DELETE) is implemented in its own module. All
//! of them work on a private copy of the source and leave the source alone.

mod add;
mod delete;
mod update;

pub use add::execute_add;
pub use delete::execute_delete;
pub use update::execute_update;
