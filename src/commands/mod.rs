mod inspect;
mod validate;

pub use inspect::{InspectType, inspect_command};
pub use validate::{ValidateArgs, validate_command};

use anyhow::{Context, Result};
use clap::Args;
use ixmp_validate::ConfigError;
use ixmp_validate::models::{DEFAULT_SETTINGS_FILE, RunSettings};
use std::path::{Path, PathBuf};

/// Input locations, each overriding the settings file.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Timeseries data (CSV with model, scenario, region, variable, unit columns)
    #[arg(short, long, env = "IXMP_VALIDATE_DATA")]
    pub data: Option<PathBuf>,

    /// Variable configuration (YAML)
    #[arg(long, env = "IXMP_VALIDATE_VARIABLES")]
    pub variables: Option<PathBuf>,

    /// Allowed scenarios (YAML with an `allowed_scenarios` list)
    #[arg(long, env = "IXMP_VALIDATE_SCENARIOS")]
    pub scenarios: Option<PathBuf>,

    /// Directory of per-model region mappings
    #[arg(long, env = "IXMP_VALIDATE_REGIONS")]
    pub regions: Option<PathBuf>,

    /// Maximum number of problems listed per batch
    #[arg(long)]
    pub limit: Option<usize>,
}

impl InputArgs {
    fn into_settings(self) -> RunSettings {
        RunSettings {
            data: self.data,
            variables: self.variables,
            allowed_scenarios: self.scenarios,
            region_mappings: self.regions,
            error_limit: self.limit,
        }
    }
}

/// Settings file (explicit or default) merged with command line overrides.
pub fn resolve_settings(config_path: Option<&Path>, inputs: InputArgs) -> Result<RunSettings> {
    let from_file = match config_path {
        Some(path) => RunSettings::load(path),
        None => RunSettings::load_optional(Path::new(DEFAULT_SETTINGS_FILE)),
    }
    .map_err(report_config_error)
    .context("Failed to load run settings")?;

    Ok(from_file.merge(inputs.into_settings()))
}

/// Print parse failures as a source-annotated diagnostic.
pub fn report_config_error(err: ConfigError) -> anyhow::Error {
    match err {
        ConfigError::Parse(diagnostic) => {
            let path = diagnostic.path.display().to_string();
            eprintln!();
            eprintln!("{:?}", miette::Report::new(*diagnostic));
            anyhow::anyhow!("Failed to parse {path}")
        }
        other => other.into(),
    }
}
