//! Scenario definitions and the runner.

use mapmut_core::{mapping, Mapping, Value};
use mapmut_mutation::{mutate_value, MutationErrorKind, MutationResult};
use tracing::debug;

use crate::error::{DemoError, DemoResult};

/// The expected result of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// The mutation succeeds with this mapping.
    Mapping(Mapping),
    /// The mutation fails with this kind of error.
    Error(MutationErrorKind),
}

/// One mutation request against the sample mapping.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub tag: &'static str,
    pub key: Option<&'static str>,
    pub value: Option<Value>,
    pub expected: Expected,
}

impl Scenario {
    /// Run the mutation against `target`.
    pub fn run(&self, target: &Value) -> MutationResult<Value> {
        mutate_value(target, self.tag, self.key, self.value.clone())
    }

    /// Compare a result with the expectation.
    pub fn check(&self, result: &MutationResult<Value>) -> DemoResult<()> {
        match (&self.expected, result) {
            (Expected::Mapping(want), Ok(Value::Map(got))) if want == got => Ok(()),
            (Expected::Error(kind), Err(err)) if err.kind() == *kind => Ok(()),
            (Expected::Mapping(want), Ok(got)) => Err(DemoError::unexpected_outcome(
                self.name,
                format!("expected {}, got {}", want, got),
            )),
            (Expected::Mapping(want), Err(err)) => Err(DemoError::unexpected_outcome(
                self.name,
                format!("expected {}, got error: {}", want, err),
            )),
            (Expected::Error(kind), Ok(got)) => Err(DemoError::unexpected_outcome(
                self.name,
                format!("expected {:?} error, got {}", kind, got),
            )),
            (Expected::Error(kind), Err(err)) => Err(DemoError::unexpected_outcome(
                self.name,
                format!("expected {:?} error, got {:?}: {}", kind, err.kind(), err),
            )),
        }
    }
}

/// Outcome of running one scenario.
#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub result: MutationResult<Value>,
    pub verdict: DemoResult<()>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// The mapping every reference scenario starts from.
pub fn sample_mapping() -> Mapping {
    mapping! { "name" => "John", "age" => 30 }
}

/// The six reference scenarios.
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "add city",
            tag: "add",
            key: Some("city"),
            value: Some(Value::from("New York")),
            expected: Expected::Mapping(
                mapping! { "name" => "John", "age" => 30, "city" => "New York" },
            ),
        },
        Scenario {
            name: "update age",
            tag: "update",
            key: Some("age"),
            value: Some(Value::Int(31)),
            expected: Expected::Mapping(mapping! { "name" => "John", "age" => 31 }),
        },
        Scenario {
            name: "delete age",
            tag: "delete",
            key: Some("age"),
            value: None,
            expected: Expected::Mapping(mapping! { "name" => "John" }),
        },
        Scenario {
            name: "invalid operation",
            tag: "invalid",
            key: None,
            value: None,
            expected: Expected::Error(MutationErrorKind::InvalidOperation),
        },
        Scenario {
            name: "add existing key",
            tag: "add",
            key: Some("name"),
            value: Some(Value::from("Jane")),
            expected: Expected::Error(MutationErrorKind::DuplicateKey),
        },
        Scenario {
            name: "update missing key",
            tag: "update",
            key: Some("invalid_key"),
            value: Some(Value::from("value")),
            expected: Expected::Error(MutationErrorKind::KeyNotFound),
        },
    ]
}

/// Run every scenario against the same target.
///
/// A scenario also fails if the target changed while it ran.
pub fn run_all(target: &Value, scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    let original = target.clone();

    scenarios
        .iter()
        .map(|scenario| {
            debug!(scenario = scenario.name, tag = scenario.tag, "running scenario");
            let result = scenario.run(target);
            let verdict = scenario.check(&result).and_then(|()| {
                if *target == original {
                    Ok(())
                } else {
                    Err(DemoError::unexpected_outcome(scenario.name, "source mapping was modified"))
                }
            });
            ScenarioReport {
                name: scenario.name,
                result,
                verdict,
            }
        })
        .collect()
}
