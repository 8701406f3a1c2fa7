use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::{Symbol, Timeframe, Timespan, ValidationError};

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const DEFAULT_FINANCIALS_LIMIT: u32 = 5;
pub const MAX_FINANCIALS_LIMIT: u32 = 100;
pub const MAX_SEARCH_LIMIT: u32 = 1_000;

/// Provider capability addressed by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Search,
    Details,
    Financials,
    Aggregates,
    PreviousClose,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Details => "details",
            Self::Financials => "financials",
            Self::Aggregates => "aggregates",
            Self::PreviousClose => "previous_close",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Provider answered with a non-2xx status.
    Upstream,
    /// No usable response: connect failure, timeout, truncated body.
    Transport,
    /// Provider answered 2xx but the body was not JSON.
    Decode,
}

/// Failure talking to the provider. Carries the status text only, never the upstream body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    endpoint: Endpoint,
    status: Option<u16>,
    message: String,
}

impl SourceError {
    pub fn upstream(endpoint: Endpoint, status: u16, status_text: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Upstream,
            endpoint,
            status: Some(status),
            message: status_text.into(),
        }
    }

    pub fn transport(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Transport,
            endpoint,
            status: None,
            message: message.into(),
        }
    }

    pub fn decode(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Decode,
            endpoint,
            status: None,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Upstream => "source.upstream",
            SourceErrorKind::Transport => "source.transport",
            SourceErrorKind::Decode => "source.decode",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to fetch {}: {} ({})",
            self.endpoint,
            self.message,
            self.code()
        )
    }
}

impl std::error::Error for SourceError {}

/// Ticker search, restricted to active listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
}

impl SearchRequest {
    pub fn new(query: Option<&str>, limit: u32) -> Result<Self, ValidationError> {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return Err(ValidationError::MissingParameter { name: "q" });
        }
        if limit == 0 || limit > MAX_SEARCH_LIMIT {
            return Err(ValidationError::InvalidLimit {
                value: limit.to_string(),
                max: MAX_SEARCH_LIMIT,
            });
        }
        Ok(Self {
            query: query.to_owned(),
            limit,
        })
    }
}

/// Income statements for one ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialsRequest {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub limit: u32,
}

impl FinancialsRequest {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            timeframe: Timeframe::default(),
            limit: DEFAULT_FINANCIALS_LIMIT,
        }
    }

    /// Build from raw query-string values, applying defaults for absent ones.
    pub fn from_params(
        symbol: Symbol,
        timeframe: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let timeframe = match non_blank(timeframe) {
            Some(value) => value.parse()?,
            None => Timeframe::default(),
        };
        let limit = match non_blank(limit) {
            Some(value) => parse_bounded(value, MAX_FINANCIALS_LIMIT)
                .ok_or_else(|| ValidationError::InvalidLimit {
                    value: value.to_owned(),
                    max: MAX_FINANCIALS_LIMIT,
                })?,
            None => DEFAULT_FINANCIALS_LIMIT,
        };
        Ok(Self {
            symbol,
            timeframe,
            limit,
        })
    }
}

/// Aggregate bars over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatesRequest {
    pub symbol: Symbol,
    pub from: Date,
    pub to: Date,
    pub timespan: Timespan,
    pub multiplier: u32,
}

impl AggregatesRequest {
    pub fn new(symbol: Symbol, from: Date, to: Date) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::InvertedDateRange {
                from: format_date(from),
                to: format_date(to),
            });
        }
        Ok(Self {
            symbol,
            from,
            to,
            timespan: Timespan::default(),
            multiplier: 1,
        })
    }

    /// Build from raw query-string values. `from` and `to` are required.
    pub fn from_params(
        symbol: Symbol,
        from: Option<&str>,
        to: Option<&str>,
        timespan: Option<&str>,
        multiplier: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let from = non_blank(from).ok_or(ValidationError::MissingParameter { name: "from" })?;
        let to = non_blank(to).ok_or(ValidationError::MissingParameter { name: "to" })?;
        let from = parse_date("from", from)?;
        let to = parse_date("to", to)?;

        let mut request = Self::new(symbol, from, to)?;
        if let Some(value) = non_blank(timespan) {
            request.timespan = value.parse()?;
        }
        if let Some(value) = non_blank(multiplier) {
            request.multiplier = parse_bounded(value, u32::MAX).ok_or_else(|| {
                ValidationError::InvalidMultiplier {
                    value: value.to_owned(),
                }
            })?;
        }
        Ok(request)
    }
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, ValidationError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_owned(),
    })
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    // A `Date` supplies every component the format asks for, so this cannot fail.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_bounded(value: &str, max: u32) -> Option<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|parsed| (1..=max).contains(parsed))
}

/// Boxed future returned by [`DataSource`] calls.
pub type SourceFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, SourceError>> + Send + 'a>>;

/// Market-data provider contract. Each call yields the provider's JSON payload as-is.
pub trait DataSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn search<'a>(&'a self, req: SearchRequest) -> SourceFuture<'a>;
    fn ticker_details<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a>;
    fn income_statements<'a>(&'a self, req: FinancialsRequest) -> SourceFuture<'a>;
    fn aggregates<'a>(&'a self, req: AggregatesRequest) -> SourceFuture<'a>;
    fn previous_close<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn aapl() -> Symbol {
        Symbol::parse("AAPL").expect("valid symbol")
    }

    #[test]
    fn blank_search_query_is_missing_parameter() {
        for query in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = SearchRequest::new(query, DEFAULT_SEARCH_LIMIT).expect_err("must fail");
            assert_eq!(err, ValidationError::MissingParameter { name: "q" });
        }
    }

    #[test]
    fn search_query_is_trimmed() {
        let request = SearchRequest::new(Some("  apple "), 10).expect("valid request");
        assert_eq!(request.query, "apple");
    }

    #[test]
    fn financials_defaults_to_five_annual_periods() {
        let request = FinancialsRequest::from_params(aapl(), None, Some(" ")).expect("valid");
        assert_eq!(request.timeframe, Timeframe::Annual);
        assert_eq!(request.limit, 5);
        assert_eq!(request, FinancialsRequest::new(aapl()));
    }

    #[test]
    fn financials_rejects_out_of_range_limit() {
        for limit in ["0", "101", "-3", "five"] {
            let err = FinancialsRequest::from_params(aapl(), None, Some(limit))
                .expect_err("must fail");
            assert!(matches!(err, ValidationError::InvalidLimit { .. }));
        }
    }

    #[test]
    fn aggregates_require_both_bounds() {
        let err = AggregatesRequest::from_params(aapl(), None, Some("2024-01-31"), None, None)
            .expect_err("must fail");
        assert_eq!(err, ValidationError::MissingParameter { name: "from" });

        let err = AggregatesRequest::from_params(aapl(), Some("2024-01-01"), Some(""), None, None)
            .expect_err("must fail");
        assert_eq!(err, ValidationError::MissingParameter { name: "to" });
    }

    #[test]
    fn aggregates_apply_defaults() {
        let request = AggregatesRequest::from_params(
            aapl(),
            Some("2024-01-01"),
            Some("2024-01-31"),
            None,
            None,
        )
        .expect("valid request");

        assert_eq!(
            request.from,
            Date::from_calendar_date(2024, Month::January, 1).expect("date")
        );
        assert_eq!(request.timespan, Timespan::Day);
        assert_eq!(request.multiplier, 1);
        assert_eq!(format_date(request.to), "2024-01-31");
    }

    #[test]
    fn dates_render_zero_padded() {
        let date = Date::from_calendar_date(987, Month::March, 4).expect("date");
        assert_eq!(format_date(date), "0987-03-04");
        assert_eq!(parse_date("from", &format_date(date)), Ok(date));
    }

    #[test]
    fn aggregates_reject_malformed_input() {
        let err =
            AggregatesRequest::from_params(aapl(), Some("01/02/2024"), Some("2024-01-31"), None, None)
                .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { field: "from", .. }));

        let err =
            AggregatesRequest::from_params(aapl(), Some("2024-02-01"), Some("2024-01-31"), None, None)
                .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvertedDateRange { .. }));

        let err = AggregatesRequest::from_params(
            aapl(),
            Some("2024-01-01"),
            Some("2024-01-31"),
            Some("day"),
            Some("0"),
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidMultiplier { .. }));
    }

    #[test]
    fn source_error_display_names_endpoint_and_status_text() {
        let error = SourceError::upstream(Endpoint::Details, 404, "Not Found");
        assert_eq!(error.status(), Some(404));
        assert_eq!(
            error.to_string(),
            "failed to fetch details: Not Found (source.upstream)"
        );
    }
}
