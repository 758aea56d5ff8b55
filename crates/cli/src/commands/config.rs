//! config command - Manage the yr configuration file
//!
//! The configuration names the service endpoint, the user agent sent with
//! every request and the default credit label. Values are read once at
//! startup by the other commands.

use clap::Subcommand;
use serde::Serialize;

use yr_core::ConfigManager;

use crate::exit_code::ExitCode;

/// Config subcommands for managing CLI defaults
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Update configuration values
    Set(SetArgs),

    /// Show the current configuration
    Show,
}

/// Arguments for the `config set` command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Base URL of the shortening service
    #[arg(long)]
    pub endpoint: Option<String>,

    /// User agent sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Default credit label for created short urls
    #[arg(long)]
    pub credit: Option<String>,
}

/// JSON output for config operations
#[derive(Serialize)]
struct ConfigOperationOutput {
    success: bool,
    message: String,
}

/// Execute a config subcommand
pub async fn execute(cmd: ConfigCommands, json_output: bool) -> ExitCode {
    let manager = match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            report_error(&e.to_string(), json_output);
            return ExitCode::GeneralError;
        }
    };

    match cmd {
        ConfigCommands::Set(args) => execute_set(args, &manager, json_output),
        ConfigCommands::Show => execute_show(&manager, json_output),
    }
}

fn execute_set(args: SetArgs, manager: &ConfigManager, json_output: bool) -> ExitCode {
    if args.endpoint.is_none() && args.user_agent.is_none() && args.credit.is_none() {
        report_error(
            "Nothing to set; pass at least one of --endpoint, --user-agent, --credit",
            json_output,
        );
        return ExitCode::UsageError;
    }

    let mut config = match manager.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e.to_string(), json_output);
            return ExitCode::from_error(&e);
        }
    };

    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(user_agent) = args.user_agent {
        config.user_agent = Some(user_agent);
    }
    if let Some(credit) = args.credit {
        config.credit = Some(credit);
    }

    if let Err(e) = manager.save(&config) {
        report_error(&e.to_string(), json_output);
        return ExitCode::from_error(&e);
    }

    if json_output {
        let output = ConfigOperationOutput {
            success: true,
            message: "Configuration updated".to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
    } else {
        println!("Configuration updated: {}", manager.config_path().display());
    }
    ExitCode::Success
}

fn execute_show(manager: &ConfigManager, json_output: bool) -> ExitCode {
    let config = match manager.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e.to_string(), json_output);
            return ExitCode::from_error(&e);
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config).unwrap_or_default());
    } else {
        println!("Endpoint   : {}", config.endpoint);
        println!(
            "User agent : {}",
            config.user_agent.as_deref().unwrap_or("(default)")
        );
        println!(
            "Credit     : {}",
            config.credit.as_deref().unwrap_or("(default)")
        );
    }
    ExitCode::Success
}

fn report_error(message: &str, json_output: bool) {
    if json_output {
        eprintln!("{}", serde_json::json!({ "error": message }));
    } else {
        eprintln!("Error: {message}");
    }
}
