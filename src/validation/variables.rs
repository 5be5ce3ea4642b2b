use std::collections::{BTreeMap, BTreeSet};

use super::reporter::Reporter;
use crate::models::{TimeseriesFrame, VariableConfig};

/// Check that the data only uses known variables, each in its configured unit.
///
/// Both checks always run. Variables missing from the configuration are
/// reported once as unknown and never unit-checked.
pub fn validate_variables_and_units(
    df: &TimeseriesFrame,
    variable_config: &VariableConfig,
    reporter: &mut Reporter<'_>,
) -> bool {
    reporter.debug("Start variables/units validation");
    let mut valid = true;

    let unknown_variables: Vec<&str> = df
        .variables()
        .into_iter()
        .filter(|variable| !variable_config.contains(variable))
        .collect();
    if !unknown_variables.is_empty() {
        reporter.warn_batch("Unknown variable(s)", &unknown_variables);
        valid = false;
    }

    let mut units_by_variable: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in df.iter() {
        units_by_variable
            .entry(record.variable.as_str())
            .or_default()
            .insert(record.unit.as_str());
    }

    let mut unknown_variable_units = Vec::new();
    for (variable, spec) in variable_config.iter() {
        let Some(units) = units_by_variable.get(variable) else {
            continue;
        };
        let unknown_units: Vec<&str> = units
            .iter()
            .copied()
            .filter(|unit| *unit != spec.unit)
            .collect();
        if !unknown_units.is_empty() {
            unknown_variable_units.push(format!("{variable}: {}", unknown_units.join(", ")));
            valid = false;
        }
    }
    if !unknown_variable_units.is_empty() {
        reporter.warn_batch("Unknown unit(s) for variable(s):", &unknown_variable_units);
    }

    reporter.debug("Finish variables/units validation");
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeseriesRecord, VariableSpec};
    use crate::validation::CapturedLog;

    fn config() -> VariableConfig {
        [
            ("Emissions|CO2", VariableSpec::new("Mt CO2/yr")),
            ("Primary Energy", VariableSpec::new("EJ/yr")),
        ]
        .into_iter()
        .collect()
    }

    fn row(variable: &str, unit: &str) -> TimeseriesRecord {
        TimeseriesRecord::new("model", "scenario", "World", variable, unit)
    }

    fn run(df: &TimeseriesFrame) -> (bool, CapturedLog) {
        let mut log = CapturedLog::new();
        let valid = validate_variables_and_units(df, &config(), &mut Reporter::new(&mut log));
        (valid, log)
    }

    #[test]
    fn known_variables_with_configured_units_pass() {
        let df = TimeseriesFrame::from_iter([
            row("Emissions|CO2", "Mt CO2/yr"),
            row("Primary Energy", "EJ/yr"),
        ]);

        let (valid, log) = run(&df);
        assert!(valid);
        assert!(!log.contains("Unknown unit"));
        assert!(!log.contains("Unknown variable"));
    }

    #[test]
    fn mismatched_units_are_grouped_per_variable() {
        let df = TimeseriesFrame::from_iter([
            row("Emissions|CO2", "Mt CO2/yr"),
            row("Emissions|CO2", "kt CO2/yr"),
            row("Emissions|CO2", "Gt CO2/yr"),
            row("Emissions|CO2", "kt CO2/yr"),
        ]);

        let (valid, log) = run(&df);
        assert!(!valid);
        let messages: Vec<_> = log.messages_at(tracing::Level::WARN).collect();
        assert_eq!(
            messages,
            vec![
                "Unknown unit(s) for variable(s)::",
                "- Emissions|CO2: Gt CO2/yr, kt CO2/yr"
            ]
        );
    }

    #[test]
    fn unknown_variable_is_not_unit_checked() {
        let df = TimeseriesFrame::from_iter([row("Emissions|CH4", "Mt CH4/yr")]);

        let (valid, log) = run(&df);
        assert!(!valid);
        assert!(log.contains("Unknown variable(s):"));
        assert!(log.contains("- Emissions|CH4"));
        assert!(!log.contains("Unknown unit"));
    }

    #[test]
    fn both_problems_are_reported_together() {
        let df = TimeseriesFrame::from_iter([
            row("Emissions|CH4", "Mt CH4/yr"),
            row("Primary Energy", "PJ/yr"),
        ]);

        let (valid, log) = run(&df);
        assert!(!valid);
        assert!(log.contains("Unknown variable"));
        assert!(log.contains("- Primary Energy: PJ/yr"));
    }

    #[test]
    fn repeated_runs_log_the_same_text() {
        let df = TimeseriesFrame::from_iter([
            row("Emissions|CH4", "Mt CH4/yr"),
            row("Emissions|N2O", "kt N2O/yr"),
            row("Primary Energy", "PJ/yr"),
        ]);

        let (first_valid, first) = run(&df);
        let (second_valid, second) = run(&df);
        assert_eq!(first_valid, second_valid);
        assert_eq!(first.text(), second.text());
    }
}
