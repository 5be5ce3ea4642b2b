use super::reporter::Reporter;
use crate::models::{AllowedScenarios, TimeseriesFrame};

/// Check that the data only contains scenarios from the allow-list.
pub fn validate_allowed_scenarios(
    df: &TimeseriesFrame,
    allowed_scenarios: &AllowedScenarios,
    reporter: &mut Reporter<'_>,
) -> bool {
    let unknown_scenarios: Vec<&str> = df
        .scenarios()
        .into_iter()
        .filter(|scenario| !allowed_scenarios.contains(scenario))
        .collect();

    if unknown_scenarios.is_empty() {
        return true;
    }
    reporter.warn_batch("Scenario(s) not allowed", &unknown_scenarios);
    false
}
