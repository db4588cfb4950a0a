//! `wpa` - command-line client for the wpa_supplicant D-Bus API.
//!
//! Arguments after the global flags are `<category> <command> [args...]`
//! and are resolved by the [`CliService`] registry.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use tracing::debug;
use wpa_supplicant::{
    cli::{CliContext, CliService, formatting::format_error},
    config::{Config, ConfigPaths},
    tracing_config,
};

#[derive(Parser, Debug)]
#[clap(name = "wpa", version)]
#[clap(about = "Control wpa_supplicant over D-Bus")]
#[clap(disable_help_flag = true, disable_help_subcommand = true)]
struct CliArgs {
    /// Log at debug level regardless of the configured level
    #[clap(long)]
    debug: bool,

    /// Configuration file to use instead of the default location
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print command output as JSON
    #[clap(long)]
    json: bool,

    /// Category, command and command arguments
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => ConfigPaths::main_config()?,
    };

    let config = match Config::load_or_create(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    let _log_guard = tracing_config::init(&config.general, args.debug)?;
    debug!("Using configuration {}", config_path.display());

    let service = CliService::new(CliContext::new(config, config_path, args.json));

    let category = args.command.first().map(String::as_str).unwrap_or("help");
    let command = args.command.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.command.get(2..).unwrap_or(&[]);

    match service.execute_command(category, command, command_args).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
