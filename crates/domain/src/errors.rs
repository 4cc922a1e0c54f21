use thiserror::Error;

/// Per-request failures of the fetch-decode pipeline.
///
/// None of these is fatal: the exposition handlers turn every variant into a
/// `502 Bad Gateway` for the scraper and keep serving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUpstreamUrl(String),

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("TLS failure talking to upstream: {0}")]
    UpstreamTls(String),

    #[error("Can't connect to upstream: {0}")]
    UpstreamConnection(String),

    #[error("Upstream request failed: {0}")]
    UpstreamRequest(String),

    #[error("Unexpected HTTP status from upstream: {status} {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    #[error("Can't decode upstream response as JSON: {0}")]
    Decode(String),
}

impl DomainError {
    /// Stable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidUpstreamUrl(_) => "invalid_url",
            DomainError::UpstreamTimeout(_) => "timeout",
            DomainError::UpstreamTls(_) => "tls",
            DomainError::UpstreamConnection(_) => "connection",
            DomainError::UpstreamRequest(_) => "request",
            DomainError::UnexpectedStatus { .. } => "upstream_status",
            DomainError::Decode(_) => "decode",
        }
    }

    /// True for failures that happened before any HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamTimeout(_)
                | DomainError::UpstreamTls(_)
                | DomainError::UpstreamConnection(_)
                | DomainError::UpstreamRequest(_)
        )
    }
}
