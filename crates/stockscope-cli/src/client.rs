//! Typed access to the stockscope proxy.
//!
//! The client never talks to the market-data provider directly and holds no
//! credential. Every non-success answer from the proxy is a generic fetch
//! failure; the proxy's error body is not interpreted.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use stockscope_core::data_source::{format_date, DEFAULT_SEARCH_LIMIT};
use stockscope_core::http_client::DEFAULT_TIMEOUT_MS;
use stockscope_core::{
    AggregateBar, AggregatesRequest, Endpoint, FinancialStatementPeriod, FinancialsRequest,
    HttpClient, HttpRequest, PriceSnapshot, ResultsItem, ResultsPage, SearchRequest, SearchResult,
    Symbol, TickerDetails, ValidationError,
};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const API_BASE_URL_VAR: &str = "STOCKSCOPE_API_BASE_URL";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Failed to fetch {endpoint} (HTTP {status})")]
    Fetch { endpoint: Endpoint, status: u16 },

    #[error("proxy unreachable while fetching {endpoint}: {message}")]
    Transport { endpoint: Endpoint, message: String },

    #[error("unexpected {endpoint} payload: {message}")]
    Decode { endpoint: Endpoint, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
pub struct ProxyClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl ProxyClient {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: impl AsRef<str>) -> Self {
        Self {
            http_client,
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ticker search. A blank query is rejected locally and never sent.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let request = SearchRequest::new(Some(query), DEFAULT_SEARCH_LIMIT)?;
        let http = HttpRequest::get(self.url("/api/stocks/search")).with_query("q", &request.query);
        let page: ResultsPage<SearchResult> = self.get_json(Endpoint::Search, http).await?;
        Ok(page.results)
    }

    pub async fn ticker_details(&self, symbol: &Symbol) -> Result<Option<TickerDetails>, ClientError> {
        let http = HttpRequest::get(self.url(&format!("/api/stocks/{symbol}/details")));
        let item: ResultsItem<TickerDetails> = self.get_json(Endpoint::Details, http).await?;
        Ok(item.results)
    }

    /// Income statements, newest first as the provider orders them.
    pub async fn income_statements(
        &self,
        request: &FinancialsRequest,
    ) -> Result<Vec<FinancialStatementPeriod>, ClientError> {
        let path = format!("/api/stocks/{}/financials/income", request.symbol);
        let http = HttpRequest::get(self.url(&path))
            .with_query("timeframe", request.timeframe)
            .with_query("limit", request.limit);
        let page: ResultsPage<FinancialStatementPeriod> =
            self.get_json(Endpoint::Financials, http).await?;
        Ok(page.results)
    }

    pub async fn aggregates(&self, request: &AggregatesRequest) -> Result<Vec<AggregateBar>, ClientError> {
        let path = format!("/api/stocks/{}/aggregates", request.symbol);
        let http = HttpRequest::get(self.url(&path))
            .with_query("from", format_date(request.from))
            .with_query("to", format_date(request.to))
            .with_query("timespan", request.timespan)
            .with_query("multiplier", request.multiplier);
        let page: ResultsPage<AggregateBar> = self.get_json(Endpoint::Aggregates, http).await?;
        Ok(page.results)
    }

    /// First bar of the previous-session payload, if any.
    pub async fn previous_close(&self, symbol: &Symbol) -> Result<Option<PriceSnapshot>, ClientError> {
        let http = HttpRequest::get(self.url(&format!("/api/stocks/{symbol}/previous")));
        let page: ResultsPage<PriceSnapshot> = self.get_json(Endpoint::PreviousClose, http).await?;
        Ok(page.results.into_iter().next())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T>(&self, endpoint: Endpoint, request: HttpRequest) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = request.with_timeout_ms(self.timeout_ms);
        debug!(%endpoint, url = %request.full_url(), "proxy request");

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(%endpoint, "proxy transport error: {error}");
            ClientError::Transport {
                endpoint,
                message: error.message().to_owned(),
            }
        })?;

        if !response.is_success() {
            warn!(%endpoint, status = response.status, "proxy returned non-success status");
            return Err(ClientError::Fetch {
                endpoint,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| ClientError::Decode {
            endpoint,
            message: error.to_string(),
        })
    }
}
