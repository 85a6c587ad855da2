//! mapmut core types
//!
//! This crate provides the foundational types used throughout mapmut:
//! - Value types (the Value enum with scalar, list and mapping variants)
//! - The insertion-ordered `Mapping` container and the `mapping!` macro

mod mapping;
mod value;

pub use mapping::*;
pub use value::*;
