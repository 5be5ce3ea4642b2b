use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use ixmp_validate::models::{AllowedScenarios, TimeseriesFrame, VariableConfig};
use ixmp_validate::validation::{RunSummary, TracingSink, ValidationRun};
use std::path::Path;

use super::{InputArgs, report_config_error, resolve_settings};

/// Arguments for the `validate` subcommand.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Returns whether every configured check passed.
pub fn validate_command(config_path: Option<&Path>, args: ValidateArgs) -> Result<bool> {
    let settings = resolve_settings(config_path, args.inputs)?;

    let Some(data_path) = settings.data.as_deref() else {
        bail!("No timeseries data given; pass --data or set `data` in the settings file");
    };
    let data = TimeseriesFrame::from_csv_path(data_path)
        .with_context(|| format!("Failed to load timeseries data from {}", data_path.display()))?;

    let variables = settings
        .variables
        .as_deref()
        .map(VariableConfig::load)
        .transpose()
        .map_err(report_config_error)?;
    let allowed = settings
        .allowed_scenarios
        .as_deref()
        .map(AllowedScenarios::load)
        .transpose()
        .map_err(report_config_error)?;

    let mut run = ValidationRun::new(&data);
    if let Some(variables) = &variables {
        run = run.with_variables(variables);
    }
    if let Some(allowed) = &allowed {
        run = run.with_allowed_scenarios(allowed);
    }
    if let Some(dir) = settings.region_mappings.as_deref() {
        run = run.with_region_mappings(dir);
    }
    if let Some(limit) = settings.error_limit {
        run = run.with_error_limit(limit);
    }
    if !run.has_checks() {
        bail!("Nothing to validate; configure variables, allowed scenarios or region mappings");
    }

    if !args.json {
        println!(
            "Validating {} rows from {}",
            data.len(),
            data_path.display()
        );
    }

    let summary = run.run(&mut TracingSink).map_err(report_config_error)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(summary.passed())
}

fn print_summary(summary: &RunSummary) {
    println!();
    for outcome in &summary.outcomes {
        if outcome.passed {
            println!("  {} {}", "✓".green(), outcome.check);
        } else {
            println!("  {} {}", "✗".red(), outcome.check);
        }
    }

    if summary.passed() {
        println!("\n✅ All validations passed!");
    } else {
        println!("\n{}", "❌ Validation failed".red().bold());
    }
}
