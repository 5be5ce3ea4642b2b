use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::loader::load_config;

/// Unit and requirement flag declared for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSpec {
    pub unit: String,

    #[serde(default)]
    pub required: bool,
}

impl VariableSpec {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            required: false,
        }
    }

    pub fn required(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            required: true,
        }
    }
}

/// Approved variables keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableConfig {
    variables: BTreeMap<String, VariableSpec>,
}

impl VariableConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    pub fn get(&self, variable: &str) -> Option<&VariableSpec> {
        self.variables.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.variables.contains_key(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableSpec)> {
        self.variables.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Variables flagged `required: true`.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, VariableSpec)> for VariableConfig {
    fn from_iter<I: IntoIterator<Item = (S, VariableSpec)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, spec)| (name.into(), spec))
                .collect(),
        }
    }
}
