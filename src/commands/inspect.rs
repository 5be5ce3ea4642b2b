use anyhow::{Context, Result};
use ixmp_validate::get_region_mapping;
use ixmp_validate::models::{AllowedScenarios, VariableConfig};
use std::path::Path;

use super::{InputArgs, report_config_error, resolve_settings};

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum InspectType {
    Variables,
    Scenarios,
    RegionMapping,
}

pub fn inspect_command(
    config_path: Option<&Path>,
    object_type: InspectType,
    model: Option<String>,
    json: bool,
    inputs: InputArgs,
) -> Result<()> {
    let settings = resolve_settings(config_path, inputs)?;

    match object_type {
        InspectType::Variables => {
            let path = settings
                .variables
                .ok_or_else(|| anyhow::anyhow!("No variable configuration given"))?;
            let variables = VariableConfig::load(&path).map_err(report_config_error)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&variables)?);
            } else {
                variables.pretty_print();
            }
        }
        InspectType::Scenarios => {
            let path = settings
                .allowed_scenarios
                .ok_or_else(|| anyhow::anyhow!("No allowed scenarios file given"))?;
            let allowed = AllowedScenarios::load(&path).map_err(report_config_error)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&allowed)?);
            } else {
                allowed.pretty_print();
            }
        }
        InspectType::RegionMapping => {
            let model =
                model.ok_or_else(|| anyhow::anyhow!("--model required for region mapping inspection"))?;
            let dir = settings
                .region_mappings
                .ok_or_else(|| anyhow::anyhow!("No region mapping directory given"))?;
            let mapping = get_region_mapping(&dir, &model)
                .with_context(|| format!("Failed to resolve region mapping for {model}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&mapping)?);
            } else {
                mapping.pretty_print();
            }
        }
    }

    Ok(())
}
