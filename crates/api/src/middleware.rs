use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use pihole_exporter_domain::{CLACKS_HEADER, CLACKS_VALUE};

/// Stamps `X-Clacks-Overhead` on every response, errors and 404s included.
pub async fn clacks_overhead(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        HeaderName::from_static(CLACKS_HEADER),
        HeaderValue::from_static(CLACKS_VALUE),
    );
    response
}
