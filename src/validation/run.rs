//! Running the configured checks over one dataset

use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::info;

use super::regions::validate_region_mappings;
use super::reporter::{DEFAULT_ERROR_LIMIT, ReportSink, Reporter};
use super::required::validate_required_variables;
use super::scenarios::validate_allowed_scenarios;
use super::variables::validate_variables_and_units;
use crate::error::ConfigError;
use crate::models::{AllowedScenarios, TimeseriesFrame, VariableConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    VariablesAndUnits,
    RequiredVariables,
    AllowedScenarios,
    RegionMappings,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::VariablesAndUnits => "variables and units",
            Check::RequiredVariables => "required variables",
            Check::AllowedScenarios => "allowed scenarios",
            Check::RegionMappings => "region mappings",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<CheckOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn outcome(&self, check: Check) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.check == check)
            .map(|o| o.passed)
    }
}

/// The dataset plus whichever configuration inputs were provided.
///
/// Variable configuration enables both the variables/units and the
/// required-variables checks.
pub struct ValidationRun<'a> {
    data: &'a TimeseriesFrame,
    variables: Option<&'a VariableConfig>,
    allowed_scenarios: Option<&'a AllowedScenarios>,
    region_mappings: Option<&'a Path>,
    error_limit: usize,
}

impl<'a> ValidationRun<'a> {
    pub fn new(data: &'a TimeseriesFrame) -> Self {
        Self {
            data,
            variables: None,
            allowed_scenarios: None,
            region_mappings: None,
            error_limit: DEFAULT_ERROR_LIMIT,
        }
    }

    pub fn with_variables(mut self, variables: &'a VariableConfig) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn with_allowed_scenarios(mut self, allowed: &'a AllowedScenarios) -> Self {
        self.allowed_scenarios = Some(allowed);
        self
    }

    pub fn with_region_mappings(mut self, dir: &'a Path) -> Self {
        self.region_mappings = Some(dir);
        self
    }

    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    pub fn has_checks(&self) -> bool {
        self.variables.is_some() || self.allowed_scenarios.is_some() || self.region_mappings.is_some()
    }

    /// Run every configured check; a failing check never skips the next one.
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<RunSummary, ConfigError> {
        let mut reporter = Reporter::new(sink).with_limit(self.error_limit);
        let mut summary = RunSummary::default();
        let mut record = |check: Check, passed: bool| {
            info!("Check {check}: {}", if passed { "passed" } else { "failed" });
            summary.outcomes.push(CheckOutcome { check, passed });
        };

        if let Some(variables) = self.variables {
            record(
                Check::VariablesAndUnits,
                validate_variables_and_units(self.data, variables, &mut reporter),
            );
            record(
                Check::RequiredVariables,
                validate_required_variables(self.data, variables, &mut reporter),
            );
        }

        if let Some(allowed) = self.allowed_scenarios {
            record(
                Check::AllowedScenarios,
                validate_allowed_scenarios(self.data, allowed, &mut reporter),
            );
        }

        if let Some(dir) = self.region_mappings {
            record(
                Check::RegionMappings,
                validate_region_mappings(self.data, dir, &mut reporter)?,
            );
        }

        Ok(summary)
    }
}
