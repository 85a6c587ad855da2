//! mapmut demo library.
//!
//! Runs the reference scenarios against a sample mapping and reports whether
//! each produced its expected result.
//!
//! - `scenario`: Scenario definitions and the runner
//! - `config`: Command-line options
//! - `logging`: Subscriber setup
//! - `format`: Output formatting utilities
//! - `error`: Demo error types

mod config;
mod error;
mod format;
pub mod logging;
mod scenario;

pub use config::DemoConfig;
pub use error::{DemoError, DemoResult};
pub use format::{format_result, print_help};
pub use scenario::{reference_scenarios, run_all, sample_mapping, Expected, Scenario, ScenarioReport};
