mod interactive;
mod research;
mod search;

use std::process::ExitCode;
use std::sync::Arc;

use stockscope_cli::ProxyClient;
use stockscope_core::ReqwestHttpClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let client = ProxyClient::new(Arc::new(ReqwestHttpClient::new()), &cli.base_url)
        .with_timeout_ms(cli.timeout_ms);

    match &cli.command {
        Command::Search(args) => search::run(args, &client, cli.format, cli.pretty).await,
        Command::Research(args) => research::run(args, client, cli.format, cli.pretty).await,
        Command::Interactive(args) => {
            interactive::run(args, client, cli.format, cli.pretty).await
        }
    }
}
