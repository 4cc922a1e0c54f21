use crate::exposition::{self, INFLUX_CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE};
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri, Version},
    response::{IntoResponse, Response},
};
use pihole_exporter_domain::{QueryTypeRatios, SummaryStats};
use std::net::SocketAddr;
use tracing::{debug, error, info, instrument};

/// Names the upstream call that failed on a 502 response.
pub const REQUEST_ERROR_HEADER: &str = "x-pihole-request-error";

const BAD_GATEWAY_BODY: &str = "502 bad gateway";

type Renderer = fn(&str, &SummaryStats, &QueryTypeRatios) -> String;

#[instrument(skip_all, name = "api_prometheus_metrics", fields(remote_address = %remote))]
pub async fn prometheus_metrics(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
) -> Response {
    log_request(&method, &uri, version, &headers, remote);
    export(&state, remote, exposition::prometheus::render, PROMETHEUS_CONTENT_TYPE).await
}

#[instrument(skip_all, name = "api_influx_metrics", fields(remote_address = %remote))]
pub async fn influx_metrics(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
) -> Response {
    log_request(&method, &uri, version, &headers, remote);
    export(&state, remote, exposition::influx::render, INFLUX_CONTENT_TYPE).await
}

fn log_request(method: &Method, uri: &Uri, version: Version, headers: &HeaderMap, remote: SocketAddr) {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or_default();

    info!(
        method = %method,
        url = %uri,
        protocol = ?version,
        host,
        remote_address = %remote,
        headers = ?headers,
        "HTTP request from client received"
    );
}

async fn export(
    state: &AppState,
    remote: SocketAddr,
    render: Renderer,
    content_type: &'static str,
) -> Response {
    let snapshot = match state.get_stats.execute().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(
                remote_address = %remote,
                pihole_request = %e.kind,
                error_kind = e.source.kind(),
                error = %e.source,
                "Can't fetch data from Pi-hole server"
            );
            return bad_gateway(e.kind.as_query_param());
        }
    };

    let body = render(state.get_stats.upstream(), &snapshot.summary, &snapshot.query_types);
    debug!(bytes = body.len(), "Exposition rendered");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body,
    )
        .into_response()
}

fn bad_gateway(pihole_request: &'static str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8")),
            (
                header::HeaderName::from_static(REQUEST_ERROR_HEADER),
                HeaderValue::from_static(pihole_request),
            ),
        ],
        BAD_GATEWAY_BODY,
    )
        .into_response()
}
