use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProxyConfig;
use crate::data_source::{
    format_date, AggregatesRequest, DataSource, Endpoint, FinancialsRequest, SearchRequest,
    SourceError, SourceFuture,
};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, DEFAULT_TIMEOUT_MS};
use crate::Symbol;

pub const POLYGON_BASE_URL: &str = "https://api.polygon.io";

/// Polygon REST adapter. Attaches the credential and relays the JSON payload verbatim.
#[derive(Clone)]
pub struct PolygonAdapter {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    base_url: String,
    timeout_ms: u64,
}

impl PolygonAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            auth: HttpAuth::BearerToken(api_key.into()),
            base_url: String::from(POLYGON_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn from_config(http_client: Arc<dyn HttpClient>, config: &ProxyConfig) -> Self {
        Self::new(http_client, config.api_key.expose())
            .with_base_url(&config.provider_base_url)
            .with_timeout_ms(config.timeout_ms)
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_json(
        &self,
        endpoint: Endpoint,
        request: HttpRequest,
    ) -> Result<Value, SourceError> {
        let request = request
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);
        debug!(%endpoint, url = %request.url, "forwarding request to polygon");

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(%endpoint, timed_out = error.timed_out(), "polygon transport error: {error}");
            SourceError::transport(endpoint, error.message())
        })?;

        if !response.is_success() {
            warn!(%endpoint, status = response.status, "polygon returned non-success status");
            return Err(SourceError::upstream(
                endpoint,
                response.status,
                response.status_text(),
            ));
        }

        debug!(%endpoint, status = response.status, bytes = response.body.len(), "polygon responded");
        serde_json::from_str(&response.body).map_err(|error| {
            warn!(%endpoint, "polygon returned a non-JSON body: {error}");
            SourceError::decode(endpoint, "provider returned an unreadable payload")
        })
    }
}

impl DataSource for PolygonAdapter {
    fn name(&self) -> &'static str {
        "polygon"
    }

    fn search<'a>(&'a self, req: SearchRequest) -> SourceFuture<'a> {
        Box::pin(async move {
            let request = HttpRequest::get(self.endpoint_url("/v3/reference/tickers"))
                .with_query("search", &req.query)
                .with_query("active", true)
                .with_query("limit", req.limit);
            self.fetch_json(Endpoint::Search, request).await
        })
    }

    fn ticker_details<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a> {
        Box::pin(async move {
            let path = format!("/v3/reference/tickers/{symbol}");
            let request = HttpRequest::get(self.endpoint_url(&path));
            self.fetch_json(Endpoint::Details, request).await
        })
    }

    fn income_statements<'a>(&'a self, req: FinancialsRequest) -> SourceFuture<'a> {
        Box::pin(async move {
            let request = HttpRequest::get(self.endpoint_url("/vX/reference/financials"))
                .with_query("ticker", &req.symbol)
                .with_query("timeframe", req.timeframe)
                .with_query("limit", req.limit);
            self.fetch_json(Endpoint::Financials, request).await
        })
    }

    fn aggregates<'a>(&'a self, req: AggregatesRequest) -> SourceFuture<'a> {
        Box::pin(async move {
            let path = format!(
                "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
                req.symbol,
                req.multiplier,
                req.timespan,
                format_date(req.from),
                format_date(req.to)
            );
            let request = HttpRequest::get(self.endpoint_url(&path));
            self.fetch_json(Endpoint::Aggregates, request).await
        })
    }

    fn previous_close<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a> {
        Box::pin(async move {
            let path = format!("/v2/aggs/ticker/{symbol}/prev");
            let request = HttpRequest::get(self.endpoint_url(&path));
            self.fetch_json(Endpoint::PreviousClose, request).await
        })
    }
}
