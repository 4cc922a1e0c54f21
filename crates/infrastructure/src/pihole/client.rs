use super::tls::{is_tls_failure, load_ca_bundle};
use async_trait::async_trait;
use pihole_exporter_application::ports::StatsSource;
use pihole_exporter_domain::config::PiholeConfig;
use pihole_exporter_domain::{
    ConfigError, DomainError, FetchResult, StatKind, CLACKS_HEADER, CLACKS_VALUE, NAME, VERSION,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use std::error::Error as _;
use tracing::{debug, warn};

/// Redirect hops followed when `follow_redirect` is enabled.
const MAX_REDIRECTS: usize = 10;

pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}

/// HTTP client for the Pi-hole `api.php` statistics endpoint.
///
/// Built once at startup; the inner `reqwest::Client` pools connections and is
/// shared by all concurrent exposition requests.
pub struct PiholeHttpClient {
    client: reqwest::Client,
    base_url: String,
    auth: Option<String>,
}

impl PiholeHttpClient {
    /// Build the client from the `[pihole]` section.
    ///
    /// TLS options only apply to `https` upstreams. `insecure_ssl` and
    /// `ca_file` are independent: a configured CA bundle is loaded, and must be
    /// valid, even when verification is disabled.
    pub fn new(config: &PiholeConfig) -> Result<Self, ConfigError> {
        let url = url::Url::parse(&config.url).map_err(|e| ConfigError::InvalidUrl {
            field: "pihole.url",
            message: e.to_string(),
        })?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            HeaderName::from_static(CLACKS_HEADER),
            HeaderValue::from_static(CLACKS_VALUE),
        );

        let redirect = if config.follow_redirect {
            Policy::limited(MAX_REDIRECTS)
        } else {
            Policy::none()
        };

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent())
            .default_headers(default_headers)
            .timeout(config.timeout_duration())
            .redirect(redirect);

        if url.scheme() == "https" {
            if config.insecure_ssl {
                warn!(upstream = %config.url, "TLS certificate verification disabled for upstream");
                builder = builder.danger_accept_invalid_certs(true);
            }

            if let Some(ca_file) = config.ca_file() {
                let certs = load_ca_bundle(ca_file)?;
                debug!(ca_file, count = certs.len(), "Loaded CA certificates");
                for cert in certs {
                    builder = builder.add_root_certificate(cert);
                }
            }
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
            auth: config.auth_token().map(str::to_string),
        })
    }

    /// `<url>?<stat>[&auth=<token>]`
    pub fn request_url(&self, kind: StatKind) -> String {
        let mut url = format!("{}?{}", self.base_url, kind.as_query_param());
        if let Some(token) = &self.auth {
            url.push_str("&auth=");
            url.extend(url::form_urlencoded::byte_serialize(token.as_bytes()));
        }
        url
    }
}

#[async_trait]
impl StatsSource for PiholeHttpClient {
    async fn fetch(&self, kind: StatKind) -> Result<FetchResult, DomainError> {
        let request_url = self.request_url(kind);

        debug!(upstream = %self.base_url, pihole_request = %kind, "Sending request to Pi-hole");

        let response = self
            .client
            .get(&request_url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        // hyper keeps the phrase only when it differs from the canonical one
        let status_text = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        // Read to the end so the connection can go back to the pool
        let body = response.bytes().await.map_err(map_transport_error)?;

        debug!(
            upstream = %self.base_url,
            pihole_request = %kind,
            status = status.as_u16(),
            body_len = body.len(),
            "Pi-hole response received"
        );

        Ok(FetchResult {
            status: status.as_u16(),
            status_text,
            headers,
            body: body.to_vec(),
        })
    }

    fn upstream(&self) -> &str {
        &self.base_url
    }
}

fn map_transport_error(error: reqwest::Error) -> DomainError {
    let message = error_chain(&error);

    if error.is_timeout() {
        DomainError::UpstreamTimeout(message)
    } else if is_tls_failure(&error) {
        DomainError::UpstreamTls(message)
    } else if error.is_connect() {
        DomainError::UpstreamConnection(message)
    } else if error.is_builder() {
        DomainError::InvalidUpstreamUrl(message)
    } else {
        DomainError::UpstreamRequest(message)
    }
}

/// reqwest's own message hides the cause, so append the whole chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
