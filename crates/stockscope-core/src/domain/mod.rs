//! # Domain Models
//!
//! Shapes of the provider payloads the research client reads, plus the
//! validated request vocabulary (tickers, timeframes, timespans).
//!
//! The proxy relays provider JSON untouched; these types are used on the
//! consuming side, where every optional field must decode to a neutral value
//! instead of failing.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SearchResult`] | One ticker-search hit |
//! | [`TickerDetails`] | Company reference data |
//! | [`FinancialStatementPeriod`] | One income-statement filing |
//! | [`PriceSnapshot`] | Previous-session bar |
//! | [`AggregateBar`] | OHLCV bar of a date range |
//! | [`Symbol`] | Validated ticker, optionally market-prefixed |
//! | [`Market`] | Asset class of a ticker prefix |
//! | [`Timeframe`] | annual / quarterly / ttm |
//! | [`Timespan`] | Aggregate bucket size |

mod interval;
mod models;
mod symbol;

pub use interval::{Timeframe, Timespan};
pub use models::{
    AggregateBar, DataPoint, FinancialStatementPeriod, Financials, IncomeStatement, PriceSnapshot,
    ResultsItem, ResultsPage, SearchResult, TickerDetails,
};
pub use symbol::{Market, Symbol};
