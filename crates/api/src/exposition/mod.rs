//! Text renderers for the two exposition endpoints.
//!
//! Both are pure: the same upstream identifier and statistics always produce
//! the same text (the line-protocol timestamp aside).
pub mod influx;
pub mod prometheus;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";
pub const INFLUX_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
