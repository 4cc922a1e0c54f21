use super::FetchStatsError;
use crate::ports::StatsSource;
use crate::services::{decode_query_types, decode_summary};
use pihole_exporter_domain::{QueryTypeRatios, StatKind, SummaryStats};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Both statistics records of one exposition request.
///
/// They come from two separate upstream calls, so they are two point-in-time
/// snapshots rather than one consistent view.
#[derive(Debug, Clone, PartialEq)]
pub struct PiholeSnapshot {
    pub summary: SummaryStats,
    pub query_types: QueryTypeRatios,
}

pub struct GetPiholeStatsUseCase {
    source: Arc<dyn StatsSource>,
}

impl GetPiholeStatsUseCase {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    pub fn upstream(&self) -> &str {
        self.source.upstream()
    }

    /// Fetch the summary, then the query types.
    ///
    /// Stops at the first failure: when the summary can't be obtained the
    /// query-type call is never issued.
    #[instrument(skip(self), name = "get_pihole_stats", fields(upstream = %self.source.upstream()))]
    pub async fn execute(&self) -> Result<PiholeSnapshot, FetchStatsError> {
        let summary = self.fetch_summary().await?;
        let query_types = self.fetch_query_types().await?;

        debug!(
            dns_queries_today = summary.dns_queries_today,
            ads_blocked_today = summary.ads_blocked_today,
            "Pi-hole statistics retrieved"
        );

        Ok(PiholeSnapshot {
            summary,
            query_types,
        })
    }

    pub async fn fetch_summary(&self) -> Result<SummaryStats, FetchStatsError> {
        let kind = StatKind::Summary;
        let result = self
            .source
            .fetch(kind)
            .await
            .map_err(|e| FetchStatsError::new(kind, e))?;
        decode_summary(&result).map_err(|e| FetchStatsError::new(kind, e))
    }

    pub async fn fetch_query_types(&self) -> Result<QueryTypeRatios, FetchStatsError> {
        let kind = StatKind::QueryTypes;
        let result = self
            .source
            .fetch(kind)
            .await
            .map_err(|e| FetchStatsError::new(kind, e))?;
        decode_query_types(&result).map_err(|e| FetchStatsError::new(kind, e))
    }
}
