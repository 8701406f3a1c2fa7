use std::sync::Arc;

use stockscope_core::{DataSource, PolygonAdapter, ProxyConfig, ReqwestHttpClient};

/// Shared handler state. Cloned per request; the provider sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource>,
    pub search_limit: u32,
}

impl AppState {
    pub fn new(source: Arc<dyn DataSource>, search_limit: u32) -> Self {
        Self {
            source,
            search_limit,
        }
    }

    /// Wire the Polygon adapter over a real HTTP client.
    pub fn from_config(config: &ProxyConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new());
        let adapter = PolygonAdapter::from_config(http_client, config);
        Self::new(Arc::new(adapter), config.search_limit)
    }
}
