use std::collections::BTreeSet;
use std::path::Path;

use super::reporter::Reporter;
use crate::error::{ConfigError, ResolveError};
use crate::loader::get_region_mapping;
use crate::models::TimeseriesFrame;

/// Check the region names of every model against its region mapping.
///
/// A model without a mapping fails the check without stopping the others.
/// Mapping files that cannot be read or parsed are returned as errors.
pub fn validate_region_mappings(
    df: &TimeseriesFrame,
    mappings_dir: &Path,
    reporter: &mut Reporter<'_>,
) -> Result<bool, ConfigError> {
    let models = df.models();
    if models.is_empty() {
        reporter.warn("No models to process!");
        return Ok(false);
    }

    let mut valid = true;
    for model in models {
        let region_mapping = match get_region_mapping(mappings_dir, model) {
            Ok(mapping) => mapping,
            Err(ResolveError::Configuration(err)) => {
                reporter.error(&err.to_string());
                valid = false;
                continue;
            }
            Err(ResolveError::Config(err)) => return Err(err),
        };

        let valid_region_names = region_mapping.valid_region_names();
        let invalid_region_names: BTreeSet<&str> = df
            .iter()
            .filter(|r| r.model == model)
            .map(|r| r.region.as_str())
            .filter(|region| !valid_region_names.contains(region))
            .collect();
        if !invalid_region_names.is_empty() {
            let names: Vec<&str> = invalid_region_names.into_iter().collect();
            reporter.warn(&format!(
                "Model {model} contains unknown region names: {}",
                names.join(", ")
            ));
            valid = false;
        }
    }
    Ok(valid)
}
