use std::process::ExitCode;

use stockscope_cli::{ProxyClient, ResearchSession, SelectOutcome};
use stockscope_core::{AggregatesRequest, Symbol};

use crate::cli::{OutputFormat, ResearchArgs};
use crate::error::CliError;
use crate::output;

pub async fn run(
    args: &ResearchArgs,
    client: ProxyClient,
    format: OutputFormat,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let symbol = Symbol::parse(&args.ticker)?;
    let bars = if args.from.is_some() || args.to.is_some() {
        Some(AggregatesRequest::from_params(
            symbol.clone(),
            args.from.as_deref(),
            args.to.as_deref(),
            args.timespan.as_deref(),
            args.multiplier.as_deref(),
        )?)
    } else {
        None
    };

    let session = ResearchSession::new(client);
    let SelectOutcome::Committed(dashboard) = session.select(symbol, bars).await else {
        return Ok(ExitCode::SUCCESS);
    };

    output::render_dashboard(&dashboard, format, pretty)?;
    if dashboard.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(3))
    }
}
