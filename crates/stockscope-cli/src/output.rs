use std::fmt::Write as _;

use serde::Serialize;
use stockscope_cli::Dashboard;
use stockscope_core::{growth_color_band, ChartPoint, SearchResult};

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render_search(
    results: &[SearchResult],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(&results, pretty),
        OutputFormat::Table => {
            print!("{}", search_table(results));
            Ok(())
        }
    }
}

pub fn render_dashboard(
    dashboard: &Dashboard,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(dashboard, pretty),
        OutputFormat::Table => {
            print!("{}", dashboard_table(dashboard));
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

pub fn search_table(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return String::from("no matches\n");
    }
    let mut out = String::new();
    for result in results {
        let exchange = result.primary_exchange.as_deref().unwrap_or("-");
        let _ = writeln!(out, "{:<8} {:<6} {}", result.ticker, exchange, result.name);
    }
    out
}

pub fn dashboard_table(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    let name = dashboard
        .details
        .as_ref()
        .map(|details| details.name.as_str())
        .unwrap_or_default();
    let _ = writeln!(out, "{}  {name}", dashboard.ticker);
    if let Some(details) = &dashboard.details {
        if let Some(industry) = &details.sic_description {
            let _ = writeln!(out, "industry    : {industry}");
        }
    }
    if let Some(market_cap) = &dashboard.market_cap {
        let _ = writeln!(out, "market cap  : {market_cap}");
    }
    if let Some(price) = &dashboard.price {
        let _ = writeln!(
            out,
            "price       : {:.2} ({:+.2}, {}%)",
            price.current_price, price.change, price.change_percent
        );
    }

    let _ = writeln!(out, "revenue ($B): {}", series_line(&dashboard.revenue));
    let _ = writeln!(out, "profit  ($B): {}", series_line(&dashboard.profit));

    if !dashboard.dcf.is_empty() {
        let _ = writeln!(out, "dcf ($B, illustrative):");
        for point in &dashboard.dcf {
            let _ = writeln!(
                out,
                "  {}  revenue {:>9.2}  fcf {:>8.2}  dcf {:>8.2}",
                point.year, point.revenue, point.fcf, point.dcf
            );
        }
    }

    if !dashboard.segments.is_empty() {
        let _ = writeln!(out, "segments ($B, illustrative):");
        for segment in &dashboard.segments {
            let band = growth_color_band(segment.growth);
            let _ = writeln!(
                out,
                "  {:<9} {:>8.1}  {:+.1}% {}",
                segment.name,
                segment.value,
                segment.growth,
                band.label()
            );
        }
    }

    if let Some(bars) = &dashboard.bars {
        let _ = writeln!(out, "bars        : {}", bars.len());
        if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
            let _ = writeln!(out, "  open {:.2} -> close {:.2}", first.open, last.close);
        }
    }

    for failure in &dashboard.failures {
        let _ = writeln!(out, "unavailable : {} ({})", failure.section, failure.message);
    }
    out
}

fn series_line(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return String::from("-");
    }
    points
        .iter()
        .map(|point| format!("{} {:.2}", point.year, point.value))
        .collect::<Vec<_>>()
        .join(" | ")
}
