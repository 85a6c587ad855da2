//! Command-line options for the demo.

use crate::error::{DemoError, DemoResult};

/// Demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// 0 = warnings only, 1 = debug, 2+ = trace.
    pub verbosity: u8,
    /// Print usage and exit.
    pub show_help: bool,
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse arguments, excluding the program name.
    pub fn from_args<I, A>(args: I) -> DemoResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut config = Self::new();
        for arg in args {
            match arg.as_ref() {
                "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
                "-vv" => config.verbosity = config.verbosity.saturating_add(2),
                "-h" | "--help" => config.show_help = true,
                other => return Err(DemoError::unknown_argument(other)),
            }
        }
        Ok(config)
    }

    /// Filter directive for the log subscriber.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
