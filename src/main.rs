use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{InputArgs, InspectType, inspect_command, validate_command};

#[derive(Parser)]
#[command(
    name = "ixmp-validate",
    about = "Validates timeseries data against variable, scenario and region-mapping configuration",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the run settings file (defaults to ./ixmp-validate.yml when present)
    #[arg(short, long, global = true, env = "IXMP_VALIDATE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every configured check over the timeseries data
    Validate(commands::ValidateArgs),

    /// Print a parsed configuration document
    Inspect {
        #[arg(value_enum)]
        object_type: InspectType,

        /// Model whose region mapping should be shown
        #[arg(short, long)]
        model: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        inputs: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate(args) => {
            if !validate_command(cli.config.as_deref(), args)? {
                std::process::exit(1);
            }
        }
        Commands::Inspect {
            object_type,
            model,
            json,
            inputs,
        } => {
            inspect_command(cli.config.as_deref(), object_type, model, json, inputs)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_filter = match verbose {
        0 => "ixmp_validate=warn", // Default: warnings and errors only
        1 => "ixmp_validate=info", // -v: info messages
        _ => "ixmp_validate=debug", // -vv or more: full debug
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
