//! Ticker selection with stale-response protection.
//!
//! Every selection takes a new generation number. The dashboard it produces
//! is committed only if no newer selection started while its fetches were in
//! flight, so a slow response for an old ticker can never overwrite the view
//! of the ticker the user picked last.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use stockscope_core::{AggregatesRequest, FinancialsRequest, Symbol};
use tracing::{debug, info};

use crate::client::ProxyClient;
use crate::dashboard::{Dashboard, SectionResults};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    Committed(Dashboard),
    /// A newer selection started before this one finished; its result was dropped.
    Superseded,
}

pub struct ResearchSession {
    client: ProxyClient,
    generation: AtomicU64,
    current: Mutex<Option<Dashboard>>,
}

impl ResearchSession {
    pub fn new(client: ProxyClient) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    pub fn client(&self) -> &ProxyClient {
        &self.client
    }

    /// Dashboard of the most recent committed selection.
    pub fn current(&self) -> Option<Dashboard> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch details, previous close and income statements concurrently, plus
    /// aggregate bars when `bars_request` is given, and commit the resulting dashboard.
    pub async fn select(
        &self,
        symbol: Symbol,
        bars_request: Option<AggregatesRequest>,
    ) -> SelectOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%symbol, generation, "selection started");

        let financials_request = FinancialsRequest::new(symbol.clone());
        let bars_fetch = async {
            match &bars_request {
                Some(request) => Some(self.client.aggregates(request).await),
                None => None,
            }
        };
        let (details, previous, financials, bars) = tokio::join!(
            self.client.ticker_details(&symbol),
            self.client.previous_close(&symbol),
            self.client.income_statements(&financials_request),
            bars_fetch,
        );

        let dashboard = Dashboard::assemble(
            symbol,
            SectionResults {
                details,
                previous,
                financials,
                bars,
            },
        );

        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(ticker = %dashboard.ticker, generation, "discarding stale selection");
            return SelectOutcome::Superseded;
        }
        info!(
            ticker = %dashboard.ticker,
            failed_sections = dashboard.failures.len(),
            "selection committed"
        );
        *current = Some(dashboard.clone());
        SelectOutcome::Committed(dashboard)
    }
}
