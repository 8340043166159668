//! Fixture case model and loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One conformance case: an operation, its inputs, and the expected
/// canonical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub function: String,
    pub inputs: Vec<String>,
    pub expected: String,
}

/// A named set of cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    pub campaign: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Loads a fixture set from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let body = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Keeps only the cases whose name contains `needle`.
    pub fn filter(&mut self, needle: &str) {
        self.cases.retain(|c| c.name.contains(needle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_roundtrip() {
        let set = FixtureSet {
            campaign: "smoke".into(),
            cases: vec![FixtureCase {
                name: "gcd_basic".into(),
                function: "gcd_i32".into(),
                inputs: vec!["12".into(), "18".into()],
                expected: "6".into(),
            }],
        };
        let body = serde_json::to_string(&set).unwrap();
        let back: FixtureSet = serde_json::from_str(&body).unwrap();
        assert_eq!(back.campaign, "smoke");
        assert_eq!(back.cases.len(), 1);
        assert_eq!(back.cases[0].function, "gcd_i32");
    }

    #[test]
    fn test_filter_by_name() {
        let mut set = FixtureSet {
            campaign: "smoke".into(),
            cases: vec![
                FixtureCase {
                    name: "parse_plain".into(),
                    function: "str_to_i32".into(),
                    inputs: vec!["42".into()],
                    expected: "42".into(),
                },
                FixtureCase {
                    name: "gcd_basic".into(),
                    function: "gcd_i32".into(),
                    inputs: vec!["12".into(), "18".into()],
                    expected: "6".into(),
                },
            ],
        };
        set.filter("parse");
        assert_eq!(set.cases.len(), 1);
        assert_eq!(set.cases[0].name, "parse_plain");
    }
}
