pub mod metrics;

pub use metrics::{influx_metrics, prometheus_metrics, REQUEST_ERROR_HEADER};
