//! Conformance harness for the Stratum runtime.
//!
//! This crate provides:
//! - Fixture loading: JSON case files naming a runtime operation, its
//!   inputs, and the expected canonical output
//! - An executor that dispatches cases over the core-tier surface
//! - Host parity: optional comparison against the host C library for the
//!   operations that have a direct counterpart
//! - Report generation: human-readable + machine-readable output with a
//!   digest over the result body

pub mod diff;
pub mod exec;
pub mod fixtures;
pub mod parity;
pub mod report;

pub use exec::{ExecError, execute_case};
pub use fixtures::{FixtureCase, FixtureError, FixtureSet};
pub use report::{CaseResult, ConformanceReport};

/// Runs every case in a fixture set, optionally with host parity checks.
///
/// Case failures land in the report; parity divergence is recorded as a
/// note on the case, not a failure, since several runtime contracts
/// (wraparound parsing, unterminated truncation) intentionally differ
/// from the host library's.
pub fn run_fixture_set(set: &FixtureSet, with_parity: bool) -> ConformanceReport {
    let results = set
        .cases
        .iter()
        .map(|case| {
            let (actual, error) = match execute_case(&case.function, &case.inputs) {
                Ok(actual) => (actual, None),
                Err(e) => (format!("error: {e}"), Some(e)),
            };
            let passed = error.is_none() && actual == case.expected;
            let diff = if passed {
                None
            } else {
                Some(diff::render_diff(&case.expected, &actual))
            };
            let parity_note = if with_parity {
                parity::host_divergence(&case.function, &case.inputs, &actual)
            } else {
                None
            };
            CaseResult {
                name: case.name.clone(),
                function: case.function.clone(),
                passed,
                expected: case.expected.clone(),
                actual,
                diff,
                parity_note,
            }
        })
        .collect();

    ConformanceReport::from_results(&set.campaign, results)
}
