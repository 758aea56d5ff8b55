//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.
//! Commands load configuration once, build a client and report outcomes
//! through the shared formatter; status-specific messaging stays here and
//! never affects how the library classifies responses.

use clap::{Parser, Subcommand};

use yr_api::ShortUrlClient;
use yr_core::{ApiError, ConfigManager, Error};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod completions;
mod config;
mod create;
mod get;
mod modify;

/// yr - URL shortener CLI
///
/// A command-line interface for the yiff.rocks URL shortening service.
#[derive(Parser, Debug)]
#[command(name = "yr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a url
    Create(create::CreateArgs),

    /// Look up a short code or url
    Get(get::GetArgs),

    /// Edit or delete an existing short url
    Modify(modify::ModifyArgs),

    /// Manage the yr configuration
    #[command(subcommand)]
    Config(config::ConfigCommands),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Create(args) => create::execute(args, output_config).await,
        Commands::Get(args) => get::execute(args, output_config).await,
        Commands::Modify(args) => modify::execute(args, output_config).await,
        Commands::Config(cmd) => config::execute(cmd, cli.json).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Client-identifying string for requests issued by the CLI
pub(crate) fn cli_user_agent() -> String {
    format!(
        "YiffRocks-CLI/{} (https://github.com/FurryBotCo/Yiff-Rocks)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Credit label for urls shortened from the CLI when neither --credit nor
/// the config file names one
pub(crate) const CLI_CREDIT: &str = "Yiff-Rocks-CLI";

/// Build a client from the configuration file
pub(crate) fn build_client(formatter: &Formatter) -> Result<ShortUrlClient, ExitCode> {
    let config = ConfigManager::new().and_then(|m| m.load()).map_err(|e| {
        formatter.error(&format!("Failed to load configuration: {e}"));
        ExitCode::from_error(&e)
    })?;

    let mut client = ShortUrlClient::from_config(&config).map_err(|e| {
        formatter.error(&format!("Failed to create client: {e}"));
        ExitCode::from_error(&e)
    })?;

    if config.user_agent.is_none() {
        client = client.with_user_agent(cli_user_agent());
    }
    if config.credit.is_none() {
        client = client.with_credit(CLI_CREDIT);
    }

    Ok(client)
}

/// Report a failed operation, preferring operation-specific messaging
pub(crate) fn fail(
    formatter: &Formatter,
    error: &Error,
    describe: fn(&ApiError) -> Option<String>,
) -> ExitCode {
    if let Error::Api(api) = error {
        if let Some(message) = describe(api) {
            formatter.error(&message);
            return ExitCode::from_error(error);
        }
    }

    formatter.error(&error.to_string());
    ExitCode::from_error(error)
}

/// Messages for service/gateway failures, shared by every operation
pub(crate) fn service_failure(status: u16) -> Option<String> {
    let message = match status {
        500 => "Unknown internal server error.",
        502 => "We failed to contact the shortening api, please try again later.",
        504 => "We hit a timeout error when contacting the api, try again later.",
        _ => return None,
    };
    Some(message.to_string())
}
