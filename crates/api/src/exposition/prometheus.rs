use pihole_exporter_domain::{QueryTypeRatios, SummaryStats};
use std::fmt::{Display, Write};

/// Render both statistics records in the Prometheus text format.
///
/// Every sample carries `upstream="<url>"`. Percentages reported by the
/// Pi-hole are turned into ratios in `[0, 1]`.
pub fn render(upstream: &str, summary: &SummaryStats, query_types: &QueryTypeRatios) -> String {
    let mut out = Exposition::new(upstream);

    out.single(
        "pihole_domains_blocked_total",
        "counter",
        "Number of blocked domains",
        summary.domains_being_blocked,
    );
    out.single(
        "pihole_dns_queries_today_total",
        "counter",
        "Number of DNS queries received today",
        summary.dns_queries_today,
    );
    out.single(
        "pihole_ads_today_total",
        "counter",
        "Number if requests blackholed",
        summary.ads_blocked_today,
    );
    out.single(
        "pihole_ads_today_ratio",
        "gauge",
        "Percentage of blackholed requests",
        Ratio(summary.ads_percentage_today / 100.0),
    );
    out.single(
        "pihole_unique_domains_total",
        "counter",
        "Unique domains seen today",
        summary.unique_domains,
    );
    out.single(
        "pihole_queries_forwarded",
        "gauge",
        "Number of DNS requests forwarded",
        summary.queries_forwarded,
    );
    out.single(
        "pihole_queries_cached",
        "gauge",
        "Number of DNS requests cached",
        summary.queries_cached,
    );
    out.single(
        "pihole_clients_ever_seen_total",
        "counter",
        "Number of clients ever seen",
        summary.clients_ever_seen,
    );
    out.single(
        "pihole_unique_clients",
        "gauge",
        "Number of unique clients",
        summary.unique_clients,
    );
    out.single(
        "pihole_dns_queries_all_types_total",
        "counter",
        "Number of DNS queries of all types",
        summary.dns_queries_all_types,
    );

    out.family("pihole_reply_total", "counter", "DNS replies by type");
    for (reply, value) in [
        ("NODATA", summary.reply_nodata),
        ("NXDOMAIN", summary.reply_nxdomain),
        ("CNAME", summary.reply_cname),
        ("IP", summary.reply_ip),
    ] {
        out.sample("pihole_reply_total", Some(("reply", reply)), value);
    }

    out.single(
        "pihole_privacy_level",
        "gauge",
        "PiHole privacy level",
        summary.privacy_level,
    );

    out.family(
        "pihole_query_type_ratio",
        "gauge",
        "Ratio of DNS type requested from clients",
    );
    for (record_type, percentage) in query_types.entries() {
        out.sample(
            "pihole_query_type_ratio",
            Some(("type", record_type)),
            Ratio(percentage / 100.0),
        );
    }

    out.finish()
}

/// Floating point sample, always printed with six decimals.
struct Ratio(f64);

impl Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

struct Exposition {
    out: String,
    upstream: String,
}

impl Exposition {
    fn new(upstream: &str) -> Self {
        Self {
            out: String::with_capacity(4096),
            upstream: escape_label_value(upstream),
        }
    }

    fn family(&mut self, name: &str, metric_type: &str, help: &str) {
        // Writing into a String can't fail
        let _ = writeln!(self.out, "# HELP {name} {help}");
        let _ = writeln!(self.out, "# TYPE {name} {metric_type}");
    }

    fn sample(&mut self, name: &str, label: Option<(&str, &str)>, value: impl Display) {
        let _ = write!(self.out, "{name}{{upstream=\"{}\"", self.upstream);
        if let Some((key, val)) = label {
            let _ = write!(self.out, ",{key}=\"{}\"", escape_label_value(val));
        }
        let _ = writeln!(self.out, "}} {value}");
    }

    fn single(&mut self, name: &str, metric_type: &str, help: &str, value: impl Display) {
        self.family(name, metric_type, help);
        self.sample(name, None, value);
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Label values escape backslash, double quote and line feed.
pub fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
