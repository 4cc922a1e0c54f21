use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Access to the upstream Pi-hole API (`[pihole]`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PiholeConfig {
    /// API endpoint, e.g. `http://pi.hole/admin/api.php`. Mandatory.
    #[serde(default)]
    pub url: String,

    /// API token appended as `auth=<token>`
    #[serde(default)]
    pub auth: Option<String>,

    /// Skip certificate verification for `https` upstreams (default: false)
    #[serde(default)]
    pub insecure_ssl: bool,

    /// PEM bundle appended to the trusted roots for `https` upstreams
    #[serde(default)]
    pub ca_file: Option<String>,

    /// Per-request timeout in seconds (default: 15)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Follow 3xx responses instead of returning them (default: false)
    #[serde(default)]
    pub follow_redirect: bool,
}

impl PiholeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Token to send, if one is configured and non-empty.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth.as_deref().filter(|t| !t.is_empty())
    }

    pub fn ca_file(&self) -> Option<&str> {
        self.ca_file.as_deref().filter(|p| !p.is_empty())
    }
}

impl Default for PiholeConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth: None,
            insecure_ssl: false,
            ca_file: None,
            timeout: default_timeout(),
            follow_redirect: false,
        }
    }
}

fn default_timeout() -> u64 {
    15
}
