//! Research dashboard assembled from one ticker selection.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use stockscope_core::{
    build_profit_series, build_revenue_series, compute_price_change, format_currency,
    latest_revenue_billions, project_dcf, synthesize_segments, AggregateBar, ChartPoint,
    DcfPoint, FinancialStatementPeriod, PriceChange, PriceSnapshot, Segment, Symbol,
    TickerDetails,
};

use crate::client::ClientError;

/// Independently fetched part of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Details,
    Price,
    Financials,
    Bars,
}

impl Section {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Price => "price",
            Self::Financials => "financials",
            Self::Bars => "bars",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFailure {
    pub section: Section,
    pub message: String,
}

/// Raw results of the concurrent fetches behind one selection.
#[derive(Debug)]
pub struct SectionResults {
    pub details: Result<Option<TickerDetails>, ClientError>,
    pub previous: Result<Option<PriceSnapshot>, ClientError>,
    pub financials: Result<Vec<FinancialStatementPeriod>, ClientError>,
    /// `None` when no date range was requested.
    pub bars: Option<Result<Vec<AggregateBar>, ClientError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub ticker: Symbol,
    pub details: Option<TickerDetails>,
    /// Market cap rendered with [`format_currency`].
    pub market_cap: Option<String>,
    pub price: Option<PriceChange>,
    pub revenue: Vec<ChartPoint>,
    pub profit: Vec<ChartPoint>,
    pub dcf: Vec<DcfPoint>,
    pub segments: Vec<Segment>,
    pub bars: Option<Vec<AggregateBar>>,
    pub failures: Vec<SectionFailure>,
}

impl Dashboard {
    /// Derive every view from the fetched sections. A failed section is left
    /// empty and recorded in `failures`; the others are unaffected.
    pub fn assemble(ticker: Symbol, results: SectionResults) -> Self {
        let mut failures = Vec::new();

        let details = keep(Section::Details, results.details, &mut failures).flatten();
        let price = keep(Section::Price, results.previous, &mut failures)
            .flatten()
            .map(|snapshot| compute_price_change(&snapshot));
        let periods = keep(Section::Financials, results.financials, &mut failures).unwrap_or_default();
        let bars = results
            .bars
            .and_then(|result| keep(Section::Bars, result, &mut failures));

        let market_cap = details
            .as_ref()
            .and_then(|details| details.market_cap)
            .map(format_currency);

        Self {
            ticker,
            details,
            market_cap,
            price,
            revenue: build_revenue_series(&periods),
            profit: build_profit_series(&periods),
            dcf: project_dcf(&periods),
            segments: synthesize_segments(latest_revenue_billions(&periods)),
            bars,
            failures,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn keep<T>(
    section: Section,
    result: Result<T, ClientError>,
    failures: &mut Vec<SectionFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            failures.push(SectionFailure {
                section,
                message: error.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscope_core::{DataPoint, Endpoint, Financials, IncomeStatement};

    fn period(year: &str, revenue: f64, net_income: f64) -> FinancialStatementPeriod {
        FinancialStatementPeriod {
            fiscal_year: Some(year.to_owned()),
            financials: Financials {
                income_statement: Some(IncomeStatement {
                    revenues: Some(DataPoint {
                        value: revenue,
                        unit: None,
                    }),
                    net_income_loss: Some(DataPoint {
                        value: net_income,
                        unit: None,
                    }),
                    ..IncomeStatement::default()
                }),
            },
            ..FinancialStatementPeriod::default()
        }
    }

    fn fetch_failed(endpoint: Endpoint) -> ClientError {
        ClientError::Fetch {
            endpoint,
            status: 500,
        }
    }

    fn aapl() -> Symbol {
        Symbol::parse("AAPL").expect("valid symbol")
    }

    #[test]
    fn derives_all_views() {
        let dashboard = Dashboard::assemble(
            aapl(),
            SectionResults {
                details: Ok(Some(TickerDetails {
                    name: String::from("Apple Inc."),
                    market_cap: Some(3.41e12),
                    ..TickerDetails::default()
                })),
                previous: Ok(Some(PriceSnapshot {
                    open: 200.0,
                    close: 190.0,
                    ..PriceSnapshot::default()
                })),
                financials: Ok(vec![period("2024", 100e9, 25e9), period("2023", 90e9, 20e9)]),
                bars: None,
            },
        );

        assert!(dashboard.is_complete());
        assert_eq!(dashboard.market_cap.as_deref(), Some("$3.41T"));
        assert_eq!(
            dashboard.price.as_ref().map(|price| price.change_percent.as_str()),
            Some("-5.00")
        );
        assert_eq!(dashboard.revenue.last().map(|point| point.value), Some(100.0));
        assert_eq!(dashboard.profit.first().map(|point| point.year.as_str()), Some("2023"));
        assert_eq!(dashboard.dcf.len(), 5);
        assert_eq!(dashboard.segments.len(), 3);
        assert_eq!(dashboard.bars, None);
    }

    #[test]
    fn failed_sections_are_withheld_independently() {
        let dashboard = Dashboard::assemble(
            aapl(),
            SectionResults {
                details: Err(fetch_failed(Endpoint::Details)),
                previous: Ok(Some(PriceSnapshot {
                    open: 100.0,
                    close: 101.0,
                    ..PriceSnapshot::default()
                })),
                financials: Err(fetch_failed(Endpoint::Financials)),
                bars: Some(Ok(Vec::new())),
            },
        );

        assert_eq!(dashboard.details, None);
        assert_eq!(dashboard.market_cap, None);
        assert!(dashboard.price.is_some());
        assert!(dashboard.revenue.is_empty());
        assert!(dashboard.dcf.is_empty());
        assert!(dashboard.segments.is_empty());
        assert_eq!(dashboard.bars, Some(Vec::new()));
        let failed = dashboard
            .failures
            .iter()
            .map(|failure| failure.section)
            .collect::<Vec<_>>();
        assert_eq!(failed, vec![Section::Details, Section::Financials]);
    }

    #[test]
    fn missing_snapshot_yields_no_price() {
        let dashboard = Dashboard::assemble(
            aapl(),
            SectionResults {
                details: Ok(None),
                previous: Ok(None),
                financials: Ok(Vec::new()),
                bars: None,
            },
        );

        assert!(dashboard.is_complete());
        assert_eq!(dashboard.price, None);
        assert!(dashboard.segments.is_empty());
    }
}
