#![allow(dead_code)]
use pihole_exporter_domain::config::PiholeConfig;

/// Builder for `[pihole]` sections used by the client tests
pub struct PiholeConfigBuilder {
    config: PiholeConfig,
}

impl PiholeConfigBuilder {
    pub fn new(url: &str) -> Self {
        Self {
            config: PiholeConfig::new(url),
        }
    }

    pub fn with_auth(mut self, token: &str) -> Self {
        self.config.auth = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout = seconds;
        self
    }

    pub fn follow_redirects(mut self) -> Self {
        self.config.follow_redirect = true;
        self
    }

    pub fn insecure(mut self) -> Self {
        self.config.insecure_ssl = true;
        self
    }

    pub fn with_ca_file(mut self, path: &str) -> Self {
        self.config.ca_file = Some(path.to_string());
        self
    }

    pub fn build(self) -> PiholeConfig {
        self.config
    }
}
