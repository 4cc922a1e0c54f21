use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::exporter::ExporterConfig;
use super::logging::LoggingConfig;
use super::pihole::PiholeConfig;
use crate::validators::{validate_exposition_path, validate_url};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub pihole: PiholeConfig,

    #[serde(default)]
    pub exporter: ExporterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pihole.url.trim().is_empty() {
            return Err(ConfigError::MissingField("pihole.url"));
        }
        validate_url(&self.pihole.url).map_err(|message| ConfigError::InvalidUrl {
            field: "pihole.url",
            message,
        })?;

        if self.pihole.timeout == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let exporter_url = url::Url::parse(&self.exporter.url).map_err(|e| ConfigError::InvalidUrl {
            field: "exporter.url",
            message: e.to_string(),
        })?;
        if exporter_url.scheme() != "http" && exporter_url.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme {
                field: "exporter.url",
                scheme: exporter_url.scheme().to_string(),
            });
        }
        self.exporter.bind_address()?;

        validate_exposition_path(&self.exporter.prometheus_path).map_err(|message| {
            ConfigError::InvalidPath {
                field: "exporter.prometheus_path",
                message,
            }
        })?;
        validate_exposition_path(&self.exporter.influxdata_path).map_err(|message| {
            ConfigError::InvalidPath {
                field: "exporter.influxdata_path",
                message,
            }
        })?;

        match (self.exporter.prometheus_path(), self.exporter.influxdata_path()) {
            (None, None) => return Err(ConfigError::NoExpositionPath),
            (Some(a), Some(b)) if a == b => {
                return Err(ConfigError::InvalidPath {
                    field: "exporter.influxdata_path",
                    message: "must differ from exporter.prometheus_path".to_string(),
                })
            }
            _ => {}
        }

        if self.exporter.is_tls() && self.exporter.tls_files().is_none() {
            return Err(ConfigError::MissingTlsFiles);
        }

        Ok(())
    }
}
