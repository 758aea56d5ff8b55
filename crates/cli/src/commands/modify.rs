//! modify command - Edit or delete an existing short url
//!
//! Both operations require the management code issued when the short url
//! was created; the service authorizes the change through it.

use clap::{ArgGroup, Args};

use yr_api::UpdateShortUrl;
use yr_core::ApiError;

use crate::exit_code::ExitCode;
use crate::output::{entity_details, Formatter, OutputConfig};

/// Edit or delete an existing short url
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["delete", "edit"])))]
pub struct ModifyArgs {
    /// Short code of the url to modify
    pub code: String,

    /// Management code returned when the short url was created
    pub management_code: String,

    /// Delete the short url
    #[arg(long)]
    pub delete: bool,

    /// Edit the short url
    #[arg(long)]
    pub edit: bool,

    /// The new url (edit only)
    #[arg(long)]
    pub url: Option<String>,

    /// The new credit (edit only)
    #[arg(long)]
    pub credit: Option<String>,
}

/// Execute the modify command
pub async fn execute(args: ModifyArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    if args.delete {
        execute_delete(args, &formatter).await
    } else {
        execute_edit(args, &formatter).await
    }
}

async fn execute_delete(args: ModifyArgs, formatter: &Formatter) -> ExitCode {
    let client = match super::build_client(formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.delete(&args.code, &args.management_code).await {
        Ok(()) => {
            formatter.success("That short url was successfully deleted.");
            ExitCode::Success
        }
        Err(e) => super::fail(formatter, &e, describe_delete),
    }
}

async fn execute_edit(args: ModifyArgs, formatter: &Formatter) -> ExitCode {
    let update = UpdateShortUrl {
        url: args.url,
        credit: args.credit,
    };

    if update.is_empty() {
        formatter.error("One of --url or --credit is required for edit.");
        return ExitCode::UsageError;
    }

    let client = match super::build_client(formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    match client.edit(&args.code, &args.management_code, &update).await {
        Ok(entity) => {
            if formatter.is_json() {
                formatter.json(&entity);
            } else {
                formatter.success("Successfully modified that short url.");
                formatter.println(&entity_details(&entity, false));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(formatter, &e, describe_edit),
    }
}

fn describe_delete(error: &ApiError) -> Option<String> {
    let message = match error.status {
        401 => "Invalid management code.",
        403 => "That short url cannot be deleted, due to it not having a management code.",
        404 => "Unknown short code. Make sure you're providing only the code, and not a url.",
        status => return super::service_failure(status),
    };
    Some(message.to_string())
}

fn describe_edit(error: &ApiError) -> Option<String> {
    let message = match error.status {
        // bad edit body; print what the api gives us
        400 => return error.payload.as_ref().map(ToString::to_string),
        401 => "Invalid management code.",
        403 => "That short url cannot be modified, due to it not having a management code.",
        404 => "Unknown short code. Make sure you're providing only the code, and not a url.",
        status => return super::service_failure(status),
    };
    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::commands::Cli;

    use super::*;

    fn api_error(status: u16) -> ApiError {
        ApiError {
            status,
            message: format!("Unexpected status {status} Test"),
            payload: None,
        }
    }

    #[test]
    fn test_mode_is_required() {
        let result = Cli::try_parse_from(["yr", "modify", "abc123", "mgmt-xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_modes_are_exclusive() {
        let result = Cli::try_parse_from(["yr", "modify", "abc123", "mgmt-xyz", "--delete", "--edit"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_mode_parses() {
        let result = Cli::try_parse_from(["yr", "modify", "abc123", "mgmt-xyz", "--delete"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_edit_mode_with_credit_parses() {
        let result = Cli::try_parse_from([
            "yr", "modify", "abc123", "mgmt-xyz", "--edit", "--credit", "NewCredit",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_describe_delete_messages() {
        assert!(describe_delete(&api_error(401)).unwrap().contains("Invalid management code"));
        assert!(describe_delete(&api_error(403)).unwrap().contains("cannot be deleted"));
        assert!(describe_delete(&api_error(404)).unwrap().contains("Unknown short code"));
        assert_eq!(describe_delete(&api_error(418)), None);
    }

    #[test]
    fn test_describe_edit_messages() {
        assert!(describe_edit(&api_error(403)).unwrap().contains("cannot be modified"));
        assert_eq!(describe_edit(&api_error(400)), None);

        let with_payload = ApiError {
            status: 400,
            message: "Unexpected status 400 Bad Request".to_string(),
            payload: Some(serde_json::json!({"credit": "too long"})),
        };
        assert!(describe_edit(&with_payload).unwrap().contains("too long"));
    }
}
