//! End-to-end research journeys: client -> proxy router -> mocked provider.
//!
//! The proxy router runs in-process; an `HttpClient` implementation hands
//! each client request straight to it, so the full request path is exercised
//! without opening sockets.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::Router;
use serde_json::{json, Value};
use stockscope_cli::{ClientError, ProxyClient, ResearchSession, Section, SelectOutcome};
use stockscope_core::{
    AggregatesRequest, ChartPoint, DataSource, Endpoint, FinancialsRequest, HttpClient,
    HttpError, HttpRequest, HttpResponse, SearchRequest, SourceError, SourceFuture, Symbol,
};
use stockscope_web::{router, AppState};
use tower::ServiceExt;

const PROXY_BASE: &str = "http://proxy.test";

// =============================================================================
// Fixtures
// =============================================================================

/// Provider with canned payloads. `SLOW` answers after a delay; endpoints in
/// `failing` answer with an upstream 404.
#[derive(Default)]
struct MockProvider {
    failing: Vec<Endpoint>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    fn failing(endpoints: &[Endpoint]) -> Self {
        Self {
            failing: endpoints.to_vec(),
            ..Self::default()
        }
    }

    fn respond(&self, endpoint: Endpoint, ticker: String, payload: Value) -> SourceFuture<'_> {
        self.calls
            .lock()
            .expect("call log")
            .push(format!("{endpoint}:{ticker}"));
        let failed = self.failing.contains(&endpoint);
        Box::pin(async move {
            if ticker == "SLOW" {
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
            if failed {
                return Err(SourceError::upstream(endpoint, 404, "Not Found"));
            }
            Ok(payload)
        })
    }
}

impl DataSource for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn search<'a>(&'a self, req: SearchRequest) -> SourceFuture<'a> {
        self.respond(
            Endpoint::Search,
            req.query,
            json!({
                "status": "OK",
                "results": [{
                    "ticker": "AAPL",
                    "name": "Apple Inc.",
                    "market": "stocks",
                    "locale": "us",
                    "primary_exchange": "XNAS",
                    "type": "CS",
                    "active": true
                }]
            }),
        )
    }

    fn ticker_details<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a> {
        let name = format!("{symbol} Holdings");
        self.respond(
            Endpoint::Details,
            symbol.to_string(),
            json!({
                "status": "OK",
                "results": { "ticker": symbol.as_str(), "name": name, "market_cap": 3.0e12 }
            }),
        )
    }

    fn income_statements<'a>(&'a self, req: FinancialsRequest) -> SourceFuture<'a> {
        self.respond(
            Endpoint::Financials,
            req.symbol.to_string(),
            json!({
                "status": "OK",
                "results": [{
                    "fiscal_year": "2024",
                    "fiscal_period": "FY",
                    "end_date": "2024-09-28",
                    "financials": {
                        "income_statement": {
                            "revenues": { "value": 100e9, "unit": "USD" },
                            "net_income_loss": { "value": 25e9, "unit": "USD" }
                        }
                    }
                }]
            }),
        )
    }

    fn aggregates<'a>(&'a self, req: AggregatesRequest) -> SourceFuture<'a> {
        self.respond(
            Endpoint::Aggregates,
            req.symbol.to_string(),
            json!({
                "status": "OK",
                "results": [
                    { "t": 1704171600000i64, "o": 187.15, "h": 188.44, "l": 183.89, "c": 185.64, "v": 82488674.0 },
                    { "t": 1704258000000i64, "o": 184.22, "h": 185.88, "l": 183.43, "c": 184.25, "v": 58414460.0 }
                ]
            }),
        )
    }

    fn previous_close<'a>(&'a self, symbol: Symbol) -> SourceFuture<'a> {
        self.respond(
            Endpoint::PreviousClose,
            symbol.to_string(),
            json!({ "status": "OK", "results": [{ "c": 189.5, "o": 187.0 }] }),
        )
    }
}

/// Hands client requests to the proxy router in-process.
struct InProcessProxy {
    router: Router,
}

impl HttpClient for InProcessProxy {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let router = self.router.clone();
        Box::pin(async move {
            let full_url = request.full_url();
            let path = full_url
                .strip_prefix(PROXY_BASE)
                .unwrap_or(full_url.as_str())
                .to_owned();
            let http_request = Request::builder()
                .uri(path)
                .body(Body::empty())
                .map_err(|error| HttpError::new(error.to_string()))?;
            let response = router
                .oneshot(http_request)
                .await
                .map_err(|error| HttpError::new(error.to_string()))?;
            let status = response.status().as_u16();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .map_err(|error| HttpError::new(error.to_string()))?;
            Ok(HttpResponse::new(status, String::from_utf8_lossy(&bytes)))
        })
    }
}

fn client_for(provider: Arc<MockProvider>) -> ProxyClient {
    let router = router(AppState::new(provider, 10));
    ProxyClient::new(Arc::new(InProcessProxy { router }), PROXY_BASE)
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

// =============================================================================
// Journeys
// =============================================================================

#[tokio::test]
async fn search_then_research_aapl() {
    let provider = Arc::new(MockProvider::default());
    let session = ResearchSession::new(client_for(provider.clone()));

    let hits = session.client().search("apple").await.expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ticker, "AAPL");
    assert_eq!(hits[0].kind.as_deref(), Some("CS"));

    let SelectOutcome::Committed(dashboard) = session.select(symbol(&hits[0].ticker), None).await
    else {
        panic!("selection should commit");
    };

    assert!(dashboard.is_complete());
    assert_eq!(
        dashboard.revenue,
        vec![ChartPoint {
            year: String::from("2024"),
            value: 100.0
        }]
    );
    assert_eq!(
        dashboard.profit,
        vec![ChartPoint {
            year: String::from("2024"),
            value: 25.0
        }]
    );
    assert_eq!(dashboard.market_cap.as_deref(), Some("$3.00T"));
    assert_eq!(
        dashboard.price.as_ref().map(|price| price.change_percent.as_str()),
        Some("1.34")
    );
    let dcf_years = dashboard.dcf.iter().map(|point| point.year.as_str()).collect::<Vec<_>>();
    assert_eq!(dcf_years, ["2025", "2026", "2027", "2028", "2029"]);
    let segment_values = dashboard.segments.iter().map(|segment| segment.value).collect::<Vec<_>>();
    assert_eq!(segment_values, [55.0, 30.0, 15.0]);
    assert_eq!(dashboard.bars, None);

    let calls = provider.calls.lock().expect("call log").clone();
    assert_eq!(calls.len(), 4);
    assert!(calls.contains(&String::from("financials:AAPL")));
}

#[tokio::test]
async fn research_with_range_includes_bars() {
    let provider = Arc::new(MockProvider::default());
    let session = ResearchSession::new(client_for(provider));
    let range = AggregatesRequest::from_params(
        symbol("AAPL"),
        Some("2024-01-02"),
        Some("2024-01-03"),
        None,
        None,
    )
    .expect("valid range");

    let SelectOutcome::Committed(dashboard) = session.select(symbol("AAPL"), Some(range)).await
    else {
        panic!("selection should commit");
    };

    let bars = dashboard.bars.expect("bars requested");
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].close, 184.25);
}

#[tokio::test]
async fn failing_upstream_section_is_withheld() {
    let provider = Arc::new(MockProvider::failing(&[Endpoint::Financials]));
    let session = ResearchSession::new(client_for(provider));

    let SelectOutcome::Committed(dashboard) = session.select(symbol("MSFT"), None).await else {
        panic!("selection should commit");
    };

    assert!(dashboard.revenue.is_empty());
    assert!(dashboard.dcf.is_empty());
    assert!(dashboard.segments.is_empty());
    assert!(dashboard.price.is_some());
    assert_eq!(
        dashboard.details.as_ref().map(|details| details.name.as_str()),
        Some("MSFT Holdings")
    );
    assert_eq!(dashboard.failures.len(), 1);
    assert_eq!(dashboard.failures[0].section, Section::Financials);
}

#[tokio::test]
async fn proxy_failure_reaches_client_as_fetch_error() {
    let provider = Arc::new(MockProvider::failing(&[Endpoint::Details]));
    let client = client_for(provider);

    let error = client
        .ticker_details(&symbol("AAPL"))
        .await
        .expect_err("details should fail");

    assert_eq!(
        error,
        ClientError::Fetch {
            endpoint: Endpoint::Details,
            status: 500
        }
    );
}

#[tokio::test(start_paused = true)]
async fn newer_selection_wins_over_slow_one() {
    let provider = Arc::new(MockProvider::default());
    let session = ResearchSession::new(client_for(provider));

    let (slow, fast) = tokio::join!(
        session.select(symbol("SLOW"), None),
        session.select(symbol("NVDA"), None),
    );

    assert_eq!(slow, SelectOutcome::Superseded);
    assert!(matches!(fast, SelectOutcome::Committed(_)));
    let current = session.current().expect("a selection committed");
    assert_eq!(current.ticker, symbol("NVDA"));
    assert_eq!(
        current.details.map(|details| details.name),
        Some(String::from("NVDA Holdings"))
    );
}
