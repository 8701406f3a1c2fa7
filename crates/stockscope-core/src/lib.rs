//! # Stockscope Core
//!
//! Core contracts and domain types for the stockscope research proxy.
//!
//! ## Overview
//!
//! - **Domain models** for search hits, company details, income statements and price bars
//! - **Provider adapter** relaying Polygon REST calls with the server-held credential
//! - **HTTP transport trait** with a reqwest implementation
//! - **Configuration** resolved from the environment at startup
//! - **Derived metrics**: currency formatting, chart series, price change, DCF projection
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Polygon) |
//! | [`config`] | Proxy configuration |
//! | [`data_source`] | Provider trait, request types and upstream errors |
//! | [`domain`] | Provider payload models and request vocabulary |
//! | [`error`] | Validation and configuration errors |
//! | [`http_client`] | HTTP client abstraction |
//! | [`metrics`] | Pure derived-metrics functions |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐      ┌──────────────────┐
//! │ stockscope CLI  │─────▶│ stockscope-proxy │
//! │ (research view) │ HTTP │  (axum routes)   │
//! └────────┬────────┘      └────────┬─────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │ Derived Metrics │      │ Polygon Adapter  │──▶ provider
//! │  (pure fns)     │      │ (DataSource)     │
//! └─────────────────┘      └──────────────────┘
//! ```
//!
//! ## Security
//!
//! - The provider key is read from the environment by the proxy only
//! - It travels as an `Authorization` header, never in a URL, and is redacted from `Debug`

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod metrics;

pub use adapters::PolygonAdapter;

pub use config::{ApiKey, ProxyConfig};

pub use data_source::{
    AggregatesRequest, DataSource, Endpoint, FinancialsRequest, SearchRequest, SourceError,
    SourceErrorKind, SourceFuture,
};

pub use domain::{
    AggregateBar, DataPoint, FinancialStatementPeriod, Financials, IncomeStatement, Market,
    PriceSnapshot, ResultsItem, ResultsPage, SearchResult, Symbol, TickerDetails, Timeframe,
    Timespan,
};

pub use error::{ConfigError, ValidationError};

pub use http_client::{HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use metrics::{
    build_profit_series, build_revenue_series, compute_price_change, format_currency,
    growth_color_band, latest_revenue_billions, project_dcf, synthesize_segments, ChartPoint,
    DcfPoint, GrowthBand, PriceChange, Segment,
};
