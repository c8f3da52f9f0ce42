//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::{FallbackSource, SearchConfig};
use crate::scoring::{ScoringConfig, TransferDb};
use crate::status::{StaticStatus, StatusLookup};

/// Shared application state.
///
/// Everything is loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Rail network the planner searches
    pub network: Arc<Network>,

    /// Surveyed transfer records
    pub transfers: Arc<TransferDb>,

    /// Route search configuration
    pub search: Arc<SearchConfig>,

    /// Felt-time scoring constants
    pub scoring: Arc<ScoringConfig>,

    /// Current line statuses, shown as delay text
    pub status: Arc<dyn StatusLookup + Send + Sync>,

    /// Itineraries to offer when search finds nothing
    pub fallback: Option<Arc<dyn FallbackSource + Send + Sync>>,
}

impl AppState {
    /// Create a new app state with default configs, no statuses and no
    /// fallback.
    pub fn new(network: Network, transfers: TransferDb) -> Self {
        Self {
            network: Arc::new(network),
            transfers: Arc::new(transfers),
            search: Arc::new(SearchConfig::default()),
            scoring: Arc::new(ScoringConfig::default()),
            status: Arc::new(StaticStatus::empty()),
            fallback: None,
        }
    }

    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.search = Arc::new(config);
        self
    }

    pub fn with_scoring_config(mut self, config: ScoringConfig) -> Self {
        self.scoring = Arc::new(config);
        self
    }

    pub fn with_status(mut self, status: impl StatusLookup + Send + Sync + 'static) -> Self {
        self.status = Arc::new(status);
        self
    }

    pub fn with_fallback(mut self, fallback: impl FallbackSource + Send + Sync + 'static) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }
}
