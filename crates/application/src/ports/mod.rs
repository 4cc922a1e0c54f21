pub mod stats_source;

pub use stats_source::StatsSource;
