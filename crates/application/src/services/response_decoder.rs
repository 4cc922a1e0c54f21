use pihole_exporter_domain::{
    DomainError, FetchResult, QueryTypeRatios, QueryTypesResponse, SummaryStats,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Upper bound of the body excerpt written to debug logs.
const BODY_LOG_LIMIT: usize = 512;

/// Decode an upstream response into `T`.
///
/// Anything but `200` fails before the body is looked at.
pub fn decode<T: DeserializeOwned>(result: &FetchResult) -> Result<T, DomainError> {
    if !result.is_ok() {
        return Err(DomainError::UnexpectedStatus {
            status: result.status,
            reason: result.status_text.clone(),
        });
    }

    serde_json::from_slice(&result.body).map_err(|e| {
        debug!(
            error = %e,
            body = %body_excerpt(&result.body),
            "Undecodable upstream body"
        );
        DomainError::Decode(e.to_string())
    })
}

pub fn decode_summary(result: &FetchResult) -> Result<SummaryStats, DomainError> {
    decode(result)
}

pub fn decode_query_types(result: &FetchResult) -> Result<QueryTypeRatios, DomainError> {
    decode::<QueryTypesResponse>(result).map(|r| r.querytypes)
}

fn body_excerpt(body: &[u8]) -> String {
    let end = body.len().min(BODY_LOG_LIMIT);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
