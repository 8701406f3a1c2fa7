use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use stockscope_cli::{ProxyClient, ResearchSession, SearchDebouncer, SelectOutcome};
use stockscope_core::Symbol;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use tracing::warn;

use crate::cli::{InteractiveArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Empty,
    Quit,
    Open(&'a str),
    Search(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if matches!(line, "quit" | "exit") {
        return Input::Quit;
    }
    match line.strip_prefix("open ") {
        Some(ticker) => Input::Open(ticker.trim()),
        None => Input::Search(line),
    }
}

/// Logs a selection or search task that panicked or was cancelled.
/// Returns whether the task finished normally.
fn report_finished(result: Result<(), JoinError>) -> bool {
    match result {
        Ok(()) => true,
        Err(error) => {
            warn!("interactive task failed: {error}");
            false
        }
    }
}

/// Reads stdin line by line. Searches are debounced; selections run
/// concurrently and only the latest one is printed.
pub async fn run(
    args: &InteractiveArgs,
    client: ProxyClient,
    format: OutputFormat,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let session = Arc::new(ResearchSession::new(client.clone()));
    let debouncer = Arc::new(SearchDebouncer::new(Duration::from_millis(args.debounce_ms)));
    let mut tasks = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Open(ticker) => {
                let symbol = match Symbol::parse(ticker) {
                    Ok(symbol) => symbol,
                    Err(error) => {
                        eprintln!("error: {error}");
                        continue;
                    }
                };
                let session = Arc::clone(&session);
                tasks.spawn(async move {
                    if let SelectOutcome::Committed(dashboard) = session.select(symbol, None).await {
                        if let Err(error) = output::render_dashboard(&dashboard, format, pretty) {
                            warn!("failed to render dashboard: {error}");
                        }
                    }
                });
            }
            Input::Search(query) => {
                let query = query.to_owned();
                let client = client.clone();
                let debouncer = Arc::clone(&debouncer);
                tasks.spawn(async move {
                    match debouncer.run(|| async { client.search(&query).await }).await {
                        None => {}
                        Some(Ok(results)) => {
                            if let Err(error) = output::render_search(&results, format, pretty) {
                                warn!("failed to render search results: {error}");
                            }
                        }
                        Some(Err(error)) => eprintln!("error: {error}"),
                    }
                });
            }
        }
        while let Some(result) = tasks.try_join_next() {
            report_finished(result);
        }
    }

    while let Some(result) = tasks.join_next().await {
        report_finished(result);
    }
    Ok(ExitCode::SUCCESS)
}
