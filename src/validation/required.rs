use std::collections::{BTreeMap, BTreeSet};

use super::reporter::Reporter;
use crate::models::{TimeseriesFrame, VariableConfig};

#[derive(Default)]
struct Coverage<'a> {
    models: BTreeSet<&'a str>,
    scenarios: BTreeSet<&'a str>,
}

/// Check that every required variable is reported by every model and for
/// every scenario present in the data.
pub fn validate_required_variables(
    df: &TimeseriesFrame,
    variable_config: &VariableConfig,
    reporter: &mut Reporter<'_>,
) -> bool {
    reporter.debug("Start required variables validation");
    let mut valid = true;
    let models = df.models();
    let scenarios = df.scenarios();

    let mut coverage: BTreeMap<&str, Coverage<'_>> = BTreeMap::new();
    for record in df.iter() {
        let entry = coverage.entry(record.variable.as_str()).or_default();
        entry.models.insert(record.model.as_str());
        entry.scenarios.insert(record.scenario.as_str());
    }
    let empty = Coverage::default();

    for variable in variable_config.required() {
        let covered = coverage.get(variable).unwrap_or(&empty);

        let invalid_models: Vec<&str> = models.difference(&covered.models).copied().collect();
        if !invalid_models.is_empty() {
            reporter.warn(&format!(
                "Following models miss required variable {variable}: {}",
                invalid_models.join(", ")
            ));
            valid = false;
        }

        let invalid_scenarios: Vec<&str> =
            scenarios.difference(&covered.scenarios).copied().collect();
        if !invalid_scenarios.is_empty() {
            reporter.warn(&format!(
                "Following scenarios miss required variable {variable}: {}",
                invalid_scenarios.join(", ")
            ));
            valid = false;
        }
    }

    reporter.debug("Finish required variables validation");
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeseriesRecord, VariableSpec};
    use crate::validation::CapturedLog;

    fn config() -> VariableConfig {
        [
            ("Emissions|CO2", VariableSpec::required("Mt CO2/yr")),
            ("Population", VariableSpec::required("million")),
            ("Primary Energy", VariableSpec::new("EJ/yr")),
        ]
        .into_iter()
        .collect()
    }

    fn row(model: &str, scenario: &str, variable: &str) -> TimeseriesRecord {
        TimeseriesRecord::new(model, scenario, "World", variable, "unit")
    }

    fn run(df: &TimeseriesFrame) -> (bool, CapturedLog) {
        let mut log = CapturedLog::new();
        let valid = validate_required_variables(df, &config(), &mut Reporter::new(&mut log));
        (valid, log)
    }

    #[test]
    fn all_required_variables_present() {
        let df = TimeseriesFrame::from_iter([
            row("a", "s1", "Emissions|CO2"),
            row("a", "s1", "Population"),
            row("b", "s2", "Emissions|CO2"),
            row("b", "s2", "Population"),
        ]);

        let (valid, log) = run(&df);
        assert!(valid);
        assert!(!log.contains("Following"));
    }

    #[test]
    fn model_without_required_variable() {
        let df = TimeseriesFrame::from_iter([
            row("model", "s1", "Emissions|CO2"),
            row("model", "s1", "Population"),
            row("invalid_model", "s1", "Population"),
            row("invalid_model", "s1", "Primary Energy"),
        ]);

        let (valid, log) = run(&df);
        assert!(!valid);
        assert!(log.contains("Following models miss required variable Emissions|CO2: invalid_model"));
        assert!(!log.contains("Following scenarios miss required variable"));
    }

    #[test]
    fn scenario_without_required_variable() {
        let df = TimeseriesFrame::from_iter([
            row("model", "s1", "Emissions|CO2"),
            row("model", "s1", "Population"),
            row("model", "s2", "Emissions|CO2"),
        ]);

        let (valid, log) = run(&df);
        assert!(!valid);
        assert!(log.contains("Following scenarios miss required variable Population: s2"));
        assert!(!log.contains("Following models"));
    }

    #[test]
    fn every_required_variable_is_checked() {
        let df = TimeseriesFrame::from_iter([row("a", "s1", "Primary Energy"), row("b", "s1", "Primary Energy")]);

        let (valid, log) = run(&df);
        assert!(!valid);
        assert!(log.contains("Following models miss required variable Emissions|CO2: a, b"));
        assert!(log.contains("Following models miss required variable Population: a, b"));
        assert!(log.contains("Following scenarios miss required variable Emissions|CO2: s1"));
        assert!(log.contains("Following scenarios miss required variable Population: s1"));
    }

    #[test]
    fn empty_dataset_passes() {
        let (valid, log) = run(&TimeseriesFrame::default());
        assert!(valid);
        assert!(!log.contains("Following"));
    }
}
