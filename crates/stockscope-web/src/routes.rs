//! Proxy route handlers.
//!
//! Each handler validates its input, forwards one call to the provider and
//! relays the JSON payload unchanged. Validation failures never reach the
//! provider, and a query string axum cannot decode is reported through
//! [`ApiError`] like any other bad parameter.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use stockscope_core::{AggregatesRequest, FinancialsRequest, SearchRequest, Symbol};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/stocks/search", get(search))
        .route("/api/stocks/:ticker/details", get(details))
        .route("/api/stocks/:ticker/financials/income", get(income_statements))
        .route("/api/stocks/:ticker/aggregates", get(aggregates))
        .route("/api/stocks/:ticker/previous", get(previous_close))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FinancialsParams {
    pub timeframe: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AggregatesParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub timespan: Option<String>,
    pub multiplier: Option<String>,
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.source.name(),
    }))
}

async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params?;
    let request = SearchRequest::new(params.q.as_deref(), state.search_limit)?;
    info!(query = %request.query, "search");
    let payload = state.source.search(request).await?;
    Ok(Json(payload))
}

async fn details(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let symbol = Symbol::parse(&ticker)?;
    info!(%symbol, "ticker details");
    let payload = state.source.ticker_details(symbol).await?;
    Ok(Json(payload))
}

async fn income_statements(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    params: Result<Query<FinancialsParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params?;
    let symbol = Symbol::parse(&ticker)?;
    let request = FinancialsRequest::from_params(
        symbol,
        params.timeframe.as_deref(),
        params.limit.as_deref(),
    )?;
    info!(symbol = %request.symbol, timeframe = %request.timeframe, limit = request.limit, "income statements");
    let payload = state.source.income_statements(request).await?;
    Ok(Json(payload))
}

async fn aggregates(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    params: Result<Query<AggregatesParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params?;
    let symbol = Symbol::parse(&ticker)?;
    let request = AggregatesRequest::from_params(
        symbol,
        params.from.as_deref(),
        params.to.as_deref(),
        params.timespan.as_deref(),
        params.multiplier.as_deref(),
    )?;
    info!(symbol = %request.symbol, timespan = %request.timespan, multiplier = request.multiplier, "aggregates");
    let payload = state.source.aggregates(request).await?;
    Ok(Json(payload))
}

async fn previous_close(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let symbol = Symbol::parse(&ticker)?;
    info!(%symbol, "previous close");
    let payload = state.source.previous_close(symbol).await?;
    Ok(Json(payload))
}
