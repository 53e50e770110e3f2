//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, GraphCache};
use crate::carriers::CarrierNames;
use crate::catalog::SegmentCatalog;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Loaded flight segments
    pub catalog: Arc<SegmentCatalog>,

    /// Carrier display names for reports
    pub carriers: Arc<CarrierNames>,

    /// Default search constraints; requests may override them
    pub config: Arc<SearchConfig>,

    /// Per-date flight graphs
    pub graphs: Arc<GraphCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: SegmentCatalog,
        carriers: CarrierNames,
        config: SearchConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            carriers: Arc::new(carriers),
            config: Arc::new(config),
            graphs: Arc::new(GraphCache::new(cache_config)),
        }
    }
}
