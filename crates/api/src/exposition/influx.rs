use chrono::Utc;
use pihole_exporter_domain::{QueryTypeRatios, SummaryStats};
use std::fmt::{Display, Write};

const MEASUREMENT: &str = "pihole";

/// Render both statistics records as InfluxDB line protocol, stamped now.
pub fn render(upstream: &str, summary: &SummaryStats, query_types: &QueryTypeRatios) -> String {
    render_at(upstream, summary, query_types, now_nanos())
}

/// Same as [`render`] with an explicit timestamp (nanoseconds since epoch).
///
/// Every line of one render shares the timestamp.
pub fn render_at(
    upstream: &str,
    summary: &SummaryStats,
    query_types: &QueryTypeRatios,
    timestamp: i64,
) -> String {
    let upstream = escape_tag_value(upstream);
    let mut out = String::with_capacity(2048);

    let mut line = |group: &str, field: &str, value: &dyn Display| {
        // Writing into a String can't fail
        let _ = writeln!(
            out,
            "{MEASUREMENT},type={group},upstream={upstream},type={field} value={value} {timestamp}"
        );
    };

    line("summary", "domains_being_blocked", &summary.domains_being_blocked);
    line("summary", "dns_queries_today", &summary.dns_queries_today);
    line("summary", "ads_blocked_today", &summary.ads_blocked_today);
    line(
        "summary",
        "ads_percentage_today",
        &format_args!("{:.6}", summary.ads_percentage_today),
    );
    line("summary", "unique_domains", &summary.unique_domains);
    line("summary", "queries_forwarded", &summary.queries_forwarded);
    line("summary", "queries_cached", &summary.queries_cached);
    line("summary", "clients_ever_seen", &summary.clients_ever_seen);
    line("summary", "unique_clients", &summary.unique_clients);
    line("summary", "dns_queries_all_types", &summary.dns_queries_all_types);
    line("summary", "reply_NODATA", &summary.reply_nodata);
    line("summary", "reply_NXDOMAIN", &summary.reply_nxdomain);
    line("summary", "reply_CNAME", &summary.reply_cname);
    line("summary", "reply_IP", &summary.reply_ip);
    line("summary", "privacy_level", &summary.privacy_level);

    for (record_type, percentage) in query_types.entries() {
        line("querytypes", record_type, &format_args!("{percentage:.6}"));
    }

    out
}

/// Whole seconds, expressed in nanoseconds.
fn now_nanos() -> i64 {
    Utc::now().timestamp().saturating_mul(1_000_000_000)
}

/// Tag values escape commas, spaces and equals signs.
pub fn escape_tag_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | ' ' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
