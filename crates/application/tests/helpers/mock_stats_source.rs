#![allow(dead_code)]

use async_trait::async_trait;
use pihole_exporter_application::ports::StatsSource;
use pihole_exporter_domain::{DomainError, FetchResult, StatKind};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock StatsSource
// ============================================================================

#[derive(Clone)]
pub struct MockStatsSource {
    upstream: String,
    responses: Arc<Mutex<HashMap<StatKind, Result<FetchResult, DomainError>>>>,
    calls: Arc<Mutex<Vec<StatKind>>>,
}

impl MockStatsSource {
    pub fn new(upstream: &str) -> Self {
        Self {
            upstream: upstream.to_string(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Healthy upstream answering both kinds with the sample payloads.
    pub fn healthy(upstream: &str) -> Self {
        Self::new(upstream)
            .with_json(StatKind::Summary, SUMMARY_JSON)
            .with_json(StatKind::QueryTypes, QUERY_TYPES_JSON)
    }

    pub fn with_json(self, kind: StatKind, body: &str) -> Self {
        self.with_result(kind, Ok(FetchResult::new(200, "OK", body.as_bytes().to_vec())))
    }

    pub fn with_status(self, kind: StatKind, status: u16, reason: &str) -> Self {
        self.with_result(kind, Ok(FetchResult::new(status, reason, Vec::new())))
    }

    pub fn with_error(self, kind: StatKind, error: DomainError) -> Self {
        self.with_result(kind, Err(error))
    }

    pub fn with_result(self, kind: StatKind, result: Result<FetchResult, DomainError>) -> Self {
        self.responses.lock().unwrap().insert(kind, result);
        self
    }

    /// Kinds fetched so far, in call order
    pub fn calls(&self) -> Vec<StatKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsSource for MockStatsSource {
    async fn fetch(&self, kind: StatKind) -> Result<FetchResult, DomainError> {
        self.calls.lock().unwrap().push(kind);
        self.responses
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::UpstreamConnection(format!(
                    "No mock response for {kind}"
                )))
            })
    }

    fn upstream(&self) -> &str {
        &self.upstream
    }
}

// ============================================================================
// Sample payloads
// ============================================================================

pub const SUMMARY_JSON: &str = r#"{
    "domains_being_blocked": 100000,
    "dns_queries_today": 31337,
    "ads_blocked_today": 3917,
    "ads_percentage_today": 12.5,
    "unique_domains": 2048,
    "queries_forwarded": 15000,
    "queries_cached": 12000,
    "clients_ever_seen": 17,
    "unique_clients": 12,
    "dns_queries_all_types": 31337,
    "reply_NODATA": 410,
    "reply_NXDOMAIN": 230,
    "reply_CNAME": 5011,
    "reply_IP": 19002,
    "privacy_level": 0,
    "status": "enabled"
}"#;

pub const QUERY_TYPES_JSON: &str = r#"{"querytypes": {
    "A (IPv4)": 61.25, "AAAA (IPv6)": 20.5, "ANY": 0, "SRV": 0.4,
    "SOA": 0.1, "PTR": 3.2, "TXT": 0.02, "NAPTR": 0
}}"#;
