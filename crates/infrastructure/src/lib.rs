//! Pi-hole stat exporter infrastructure layer
pub mod pihole;

pub use pihole::PiholeHttpClient;
