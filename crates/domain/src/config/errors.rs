use thiserror::Error;

/// Startup-time configuration failures. Any of these stops the process.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read configuration file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Can't parse configuration file: {0}")]
    Parse(String),

    #[error("Missing mandatory option {0}")]
    MissingField(&'static str),

    #[error("Invalid URL in {field}: {message}")]
    InvalidUrl { field: &'static str, message: String },

    #[error("Invalid or unsupported URL scheme {scheme:?} in {field}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("Invalid timeout: must be at least one second")]
    InvalidTimeout,

    #[error("Invalid path in {field}: {message}")]
    InvalidPath { field: &'static str, message: String },

    #[error("Neither the path for Prometheus metrics nor for InfluxDB metrics are set")]
    NoExpositionPath,

    #[error("HTTPS listener requires both exporter.ssl_cert and exporter.ssl_key")]
    MissingTlsFiles,

    #[error("Can't load CA file {path}: {message}")]
    InvalidCaFile { path: String, message: String },

    #[error("Can't build HTTP client: {0}")]
    HttpClient(String),
}
