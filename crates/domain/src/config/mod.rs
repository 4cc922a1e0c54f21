//! Configuration module for the Pi-hole stat exporter
//!
//! The configuration file is TOML with one table per concern:
//! - `root`: main configuration, loading and validation
//! - `pihole`: upstream Pi-hole API access
//! - `exporter`: listener URL and exposition paths
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod exporter;
pub mod logging;
pub mod pihole;
pub mod root;

pub use errors::ConfigError;
pub use exporter::ExporterConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use pihole::PiholeConfig;
pub use root::Config;
