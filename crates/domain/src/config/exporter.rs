use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Exposition listener (`[exporter]`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExporterConfig {
    /// Listener URL; the scheme selects plain HTTP or HTTPS
    #[serde(default = "default_url")]
    pub url: String,

    /// Route for Prometheus metrics, empty disables it
    #[serde(default = "default_prometheus_path")]
    pub prometheus_path: String,

    /// Route for InfluxDB line protocol, empty disables it
    #[serde(default = "default_influxdata_path")]
    pub influxdata_path: String,

    pub ssl_cert: Option<String>,

    pub ssl_key: Option<String>,
}

impl ExporterConfig {
    pub fn is_tls(&self) -> bool {
        url::Url::parse(&self.url).is_ok_and(|parsed| parsed.scheme() == "https")
    }

    pub fn prometheus_path(&self) -> Option<&str> {
        Some(self.prometheus_path.as_str()).filter(|p| !p.is_empty())
    }

    pub fn influxdata_path(&self) -> Option<&str> {
        Some(self.influxdata_path.as_str()).filter(|p| !p.is_empty())
    }

    /// `host:port` to bind, derived from the listener URL.
    pub fn bind_address(&self) -> Result<String, ConfigError> {
        let parsed = url::Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            field: "exporter.url",
            message: e.to_string(),
        })?;

        let host = parsed.host_str().ok_or_else(|| ConfigError::InvalidUrl {
            field: "exporter.url",
            message: "missing host".to_string(),
        })?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| ConfigError::UnsupportedScheme {
                field: "exporter.url",
                scheme: parsed.scheme().to_string(),
            })?;

        // IPv6 literals keep their brackets in host_str
        Ok(format!("{host}:{port}"))
    }

    /// Certificate and key paths, when both are set.
    pub fn tls_files(&self) -> Option<(&str, &str)> {
        match (self.ssl_cert.as_deref(), self.ssl_key.as_deref()) {
            (Some(cert), Some(key)) if !cert.is_empty() && !key.is_empty() => Some((cert, key)),
            _ => None,
        }
    }
}

fn default_url() -> String {
    "http://127.0.0.1:64711".to_string()
}

fn default_prometheus_path() -> String {
    "/metrics".to_string()
}

fn default_influxdata_path() -> String {
    "/influx".to_string()
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            prometheus_path: default_prometheus_path(),
            influxdata_path: default_influxdata_path(),
            ssl_cert: None,
            ssl_key: None,
        }
    }
}
