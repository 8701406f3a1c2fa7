//! # Stockscope Web
//!
//! axum proxy between the research client and the market-data provider.
//! The provider credential lives only in this process.
//!
//! | Route | Provider call |
//! |-------|---------------|
//! | `GET /api/stocks/search?q=` | ticker search (active only, capped) |
//! | `GET /api/stocks/:ticker/details` | ticker reference data |
//! | `GET /api/stocks/:ticker/financials/income` | income statements |
//! | `GET /api/stocks/:ticker/aggregates?from=&to=` | aggregate bars |
//! | `GET /api/stocks/:ticker/previous` | previous session |
//! | `GET /health` | none |

pub mod error;
pub mod routes;
pub mod state;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::Router;
use stockscope_core::config::CORS_ORIGIN_VAR;
use stockscope_core::{ConfigError, ProxyConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use error::{ApiError, ServerError};
pub use state::AppState;

/// API routes with request tracing. Each request gets its own span and id.
pub fn router(state: AppState) -> Router {
    routes::api_routes()
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .with_state(state)
}

/// Add browser-facing concerns: CORS and, when configured, a static UI fallback.
pub fn with_frontend(router: Router, config: &ProxyConfig) -> Result<Router, ConfigError> {
    let allow_origin = match config.cors_origin.as_deref() {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin).map_err(|error| {
            ConfigError::InvalidValue {
                var: CORS_ORIGIN_VAR,
                value: origin.to_owned(),
                reason: error.to_string(),
            }
        })?),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let router = match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    Ok(router.layer(cors))
}
