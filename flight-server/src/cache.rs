//! Caching layer for per-date flight graphs.
//!
//! The catalog is static for the life of the process, so the graph for a
//! given travel date is the same on every request. Building it is a linear
//! scan of the catalog; the cache keeps recently searched dates around.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::catalog::SegmentCatalog;
use crate::planner::FlightGraph;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached dates.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 64,
        }
    }
}

/// Flight graphs keyed by travel date.
pub struct GraphCache {
    graphs: MokaCache<NaiveDate, Arc<FlightGraph>>,
}

impl GraphCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let graphs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { graphs }
    }

    /// The graph for `date`, built from `catalog` on a miss.
    ///
    /// Concurrent misses for the same date build the graph once.
    pub async fn graph_for(&self, catalog: &SegmentCatalog, date: NaiveDate) -> Arc<FlightGraph> {
        self.graphs
            .get_with(date, async {
                let graph = FlightGraph::for_date(catalog, date);
                debug!(
                    %date,
                    segments = graph.segment_count(),
                    airports = graph.airport_count(),
                    "Built flight graph"
                );
                Arc::new(graph)
            })
            .await
    }

    /// Number of cached dates (for monitoring; eventually consistent).
    pub fn entry_count(&self) -> u64 {
        self.graphs.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.graphs.invalidate_all();
    }
}
