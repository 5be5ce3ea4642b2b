use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::loader::{from_value, read_config};

/// Scenario names permitted in a dataset, in the order the file lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedScenarios {
    scenarios: Vec<String>,
}

impl AllowedScenarios {
    /// Read the `allowed_scenarios` list of a document; a missing or empty
    /// key yields an empty allow-list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = read_config(path)?;
        if !document.is_mapping() {
            return Err(ConfigError::Shape {
                path: path.to_path_buf(),
                message: "expected a mapping with an `allowed_scenarios` key".to_string(),
            });
        }

        let scenarios: Option<Vec<String>> = match document.get("allowed_scenarios") {
            Some(value) => from_value(path, value.clone())?,
            None => None,
        };

        Ok(Self {
            scenarios: scenarios.unwrap_or_default(),
        })
    }

    pub fn contains(&self, scenario: &str) -> bool {
        self.scenarios.iter().any(|s| s == scenario)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedScenarios {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            scenarios: iter.into_iter().map(Into::into).collect(),
        }
    }
}
