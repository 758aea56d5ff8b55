//! create command - Shorten a url

use clap::Args;

use yr_api::CreateOptions;
use yr_core::ApiError;

use crate::exit_code::ExitCode;
use crate::output::{entity_details, Formatter, OutputConfig};

/// Shorten a url
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// The url to shorten
    pub url: String,

    /// Credit name for the shortened url
    #[arg(long)]
    pub credit: Option<String>,

    /// Short code to use instead of a generated one
    #[arg(long)]
    pub code: Option<String>,
}

/// Execute the create command
pub async fn execute(args: CreateArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match super::build_client(&formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    let options = CreateOptions {
        credit: args.credit,
        code: args.code,
        editable: true,
    };

    match client.create(&args.url, &options).await {
        Ok(entity) => {
            if formatter.is_json() {
                formatter.json(&entity);
            } else {
                if entity.is_editable() {
                    formatter.success("Your short url was successfully created.");
                } else {
                    formatter
                        .println("A shortened version of that url already exists, using that.");
                }
                formatter.println(&entity_details(&entity, true));
            }
            ExitCode::Success
        }
        Err(e) => super::fail(&formatter, &e, describe),
    }
}

fn describe(error: &ApiError) -> Option<String> {
    match error.status {
        409 => Some("That provided code is already in use.".to_string()),
        // invalid url, code/credit too long
        // easier to print out what the api gives us rather than parse it
        422 => error.payload.as_ref().map(ToString::to_string),
        status => super::service_failure(status),
    }
}
