use std::process::ExitCode;

use stockscope_cli::ProxyClient;

use crate::cli::{OutputFormat, SearchArgs};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &SearchArgs,
    client: &ProxyClient,
    format: OutputFormat,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let results = client.search(&args.query).await?;
    output::render_search(&results, format, pretty)?;
    Ok(ExitCode::SUCCESS)
}
