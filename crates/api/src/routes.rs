use crate::handlers;
use crate::middleware::clacks_overhead;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use tracing::debug;

/// Creates the exposition router with state.
///
/// A `None` path leaves that endpoint unrouted. Only `GET` is accepted.
pub fn create_exporter_routes(
    state: AppState,
    prometheus_path: Option<&str>,
    influx_path: Option<&str>,
) -> Router {
    let mut router = Router::new();

    if let Some(path) = prometheus_path {
        debug!(path, "Routing Prometheus exposition");
        router = router.route(path, get(handlers::prometheus_metrics));
    }

    if let Some(path) = influx_path {
        debug!(path, "Routing InfluxDB line protocol exposition");
        router = router.route(path, get(handlers::influx_metrics));
    }

    router
        .layer(middleware::from_fn(clacks_overhead))
        .with_state(state)
}
