use async_trait::async_trait;
use pihole_exporter_domain::{DomainError, FetchResult, StatKind};

/// One HTTP round trip to the statistics API.
///
/// Implementations don't interpret the status code or body; that is the
/// decoder's job. Transport failures come back as `DomainError` and are
/// never retried.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, kind: StatKind) -> Result<FetchResult, DomainError>;

    /// Identifier of the upstream, used as the exposition label.
    fn upstream(&self) -> &str;
}
