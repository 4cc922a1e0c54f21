//! Fixed schemas of the two Pi-hole statistics responses.
//!
//! Every struct is `#[serde(default)]`: a field the upstream leaves out decodes
//! to its zero value, and fields we don't know are skipped.

use serde::{Deserialize, Serialize};

/// `?summaryRaw` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryStats {
    pub domains_being_blocked: u64,
    pub dns_queries_today: u64,
    pub ads_blocked_today: u64,
    /// Share of blocked queries, 0 to 100.
    pub ads_percentage_today: f64,
    pub unique_domains: u64,
    pub queries_forwarded: u64,
    pub queries_cached: u64,
    pub clients_ever_seen: u64,
    pub unique_clients: u64,
    pub dns_queries_all_types: u64,
    #[serde(rename = "reply_NODATA")]
    pub reply_nodata: u64,
    #[serde(rename = "reply_NXDOMAIN")]
    pub reply_nxdomain: u64,
    #[serde(rename = "reply_CNAME")]
    pub reply_cname: u64,
    #[serde(rename = "reply_IP")]
    pub reply_ip: u64,
    pub privacy_level: u32,
    /// Blocking status as reported by the appliance (`enabled`/`disabled`).
    pub status: String,
    pub gravity_last_updated: GravityLastUpdated,
}

/// Freshness of the gravity (blocklist) database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GravityLastUpdated {
    pub file_exists: bool,
    /// Unix epoch seconds of the last update.
    pub absolute: u64,
    pub relative: GravityRelative,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GravityRelative {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

/// Per record type share of all queries, each 0 to 100.
///
/// Values are taken as reported; they are independent and need not sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryTypeRatios {
    #[serde(rename = "A (IPv4)", alias = "A")]
    pub a: f64,
    #[serde(rename = "AAAA (IPv6)", alias = "AAAA")]
    pub aaaa: f64,
    #[serde(rename = "ANY")]
    pub any: f64,
    #[serde(rename = "SRV")]
    pub srv: f64,
    #[serde(rename = "SOA")]
    pub soa: f64,
    #[serde(rename = "PTR")]
    pub ptr: f64,
    #[serde(rename = "TXT")]
    pub txt: f64,
    #[serde(rename = "NAPTR")]
    pub naptr: f64,
}

impl QueryTypeRatios {
    /// Record type names paired with their value, in exposition order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("A", self.a),
            ("AAAA", self.aaaa),
            ("ANY", self.any),
            ("SRV", self.srv),
            ("SOA", self.soa),
            ("PTR", self.ptr),
            ("TXT", self.txt),
            ("NAPTR", self.naptr),
        ]
    }
}

/// `?getQueryTypes` response envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryTypesResponse {
    pub querytypes: QueryTypeRatios,
}
