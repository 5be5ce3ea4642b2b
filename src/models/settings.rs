//! Run settings file (`ixmp-validate.yml`)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::loader::load_config;

pub const DEFAULT_SETTINGS_FILE: &str = "ixmp-validate.yml";

/// Inputs of a validation run. Relative paths are resolved against the
/// directory holding the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_scenarios: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_mappings: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_limit: Option<usize>,
}

impl RunSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = load_config(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(settings.resolve_relative_to(base))
    }

    /// Load `path` if it exists, otherwise fall back to empty settings.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No settings file at {}", path.display());
            Ok(Self::default())
        }
    }

    fn resolve_relative_to(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| {
            p.map(|p| if p.is_absolute() { p } else { base.join(p) })
        };

        Self {
            data: resolve(self.data),
            variables: resolve(self.variables),
            allowed_scenarios: resolve(self.allowed_scenarios),
            region_mappings: resolve(self.region_mappings),
            error_limit: self.error_limit,
        }
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: RunSettings) -> Self {
        Self {
            data: overrides.data.or(self.data),
            variables: overrides.variables.or(self.variables),
            allowed_scenarios: overrides.allowed_scenarios.or(self.allowed_scenarios),
            region_mappings: overrides.region_mappings.or(self.region_mappings),
            error_limit: overrides.error_limit.or(self.error_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn paths_resolve_against_settings_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(
            &path,
            r#"
data: data/timeseries.csv
variables: /etc/variables.yaml
error_limit: 5
"#,
        )
        .unwrap();

        let settings = RunSettings::load(&path).unwrap();
        assert_eq!(settings.data, Some(temp_dir.path().join("data/timeseries.csv")));
        assert_eq!(settings.variables, Some(PathBuf::from("/etc/variables.yaml")));
        assert_eq!(settings.allowed_scenarios, None);
        assert_eq!(settings.error_limit, Some(5));
    }

    #[test]
    fn missing_optional_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = RunSettings::load_optional(&temp_dir.path().join("absent.yml")).unwrap();
        assert_eq!(settings, RunSettings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "regions: mappings/\n").unwrap();

        assert!(matches!(RunSettings::load(&path), Err(ConfigError::Shape { .. })));
    }

    #[test]
    fn overrides_take_precedence() {
        let file = RunSettings {
            data: Some("a.csv".into()),
            variables: Some("vars.yaml".into()),
            error_limit: Some(10),
            ..Default::default()
        };
        let cli = RunSettings {
            data: Some("b.csv".into()),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.data, Some(PathBuf::from("b.csv")));
        assert_eq!(merged.variables, Some(PathBuf::from("vars.yaml")));
        assert_eq!(merged.error_limit, Some(10));
    }
}
