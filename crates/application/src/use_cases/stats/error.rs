use pihole_exporter_domain::{DomainError, StatKind};
use thiserror::Error;

/// A pipeline failure together with the upstream call that caused it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} request failed: {source}")]
pub struct FetchStatsError {
    pub kind: StatKind,
    #[source]
    pub source: DomainError,
}

impl FetchStatsError {
    pub fn new(kind: StatKind, source: DomainError) -> Self {
        Self { kind, source }
    }
}
