//! get command - Look up a short code or url

use clap::Args;

use yr_core::ApiError;

use crate::exit_code::ExitCode;
use crate::output::{entity_details, Formatter, OutputConfig};

/// Look up a short code or url
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Short code or url to look up
    pub query: String,
}

/// Execute the get command
pub async fn execute(args: GetArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match super::build_client(&formatter) {
        Ok(client) => client,
        Err(code) => return code,
    };

    // An unknown code may still be a known url; retry the query through
    // the create-or-return path before giving up.
    let entity = match client.get_by_code(&args.query).await {
        Ok(entity) => entity,
        Err(_) => {
            formatter.warning("Not a known short code, trying as a url.");
            match client.get_by_url(&args.query).await {
                Ok(entity) => entity,
                Err(e) => return super::fail(&formatter, &e, describe),
            }
        }
    };

    if formatter.is_json() {
        formatter.json(&entity);
    } else {
        formatter.success("Successfully found that shortened url, details are listed below.");
        formatter.println(&entity_details(&entity, false));
    }
    ExitCode::Success
}

fn describe(error: &ApiError) -> Option<String> {
    match error.status {
        404 => Some("Unknown short code/url.".to_string()),
        status => super::service_failure(status),
    }
}
