//! CLI argument definitions for stockscope.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Search tickers by symbol or company name |
//! | `research` | Build the research dashboard for one ticker |
//! | `interactive` | Search-as-you-type session reading stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `http://localhost:3001` | Proxy root (`STOCKSCOPE_API_BASE_URL`) |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `3000` | Per-request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! stockscope search apple
//! stockscope research AAPL --from 2024-01-01 --to 2024-06-30
//! stockscope --format json --pretty research MSFT
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockscope_cli::{API_BASE_URL_VAR, DEFAULT_API_BASE_URL};

#[derive(Debug, Parser)]
#[command(
    name = "stockscope",
    author,
    version,
    about = "Stock research dashboard backed by the stockscope proxy"
)]
pub struct Cli {
    /// Root URL of the stockscope proxy.
    #[arg(long, global = true, env = API_BASE_URL_VAR, default_value = DEFAULT_API_BASE_URL)]
    pub base_url: String,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON document.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search active tickers by symbol or company name.
    ///
    ///   stockscope search apple
    Search(SearchArgs),

    /// Build the research dashboard for one ticker.
    ///
    /// Details, previous close and income statements are fetched
    /// concurrently. Price bars are added when both --from and --to are set.
    ///
    ///   stockscope research AAPL
    ///   stockscope research AAPL --from 2024-01-01 --to 2024-03-31 --timespan week
    Research(ResearchArgs),

    /// Interactive session: type to search, `open TICKER` to research, `quit` to leave.
    Interactive(InteractiveArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form query (symbol or company name).
    pub query: String,
}

#[derive(Debug, Args)]
pub struct ResearchArgs {
    /// Ticker symbol, e.g. AAPL.
    pub ticker: String,

    /// First day of the price-bar range (YYYY-MM-DD).
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Last day of the price-bar range (YYYY-MM-DD).
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Bar size: minute, hour, day, week, month, quarter or year.
    #[arg(long)]
    pub timespan: Option<String>,

    /// Number of timespans per bar.
    #[arg(long)]
    pub multiplier: Option<String>,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Quiet period before a typed query is sent, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub debounce_ms: u64,
}
