pub mod mock_stats_source;

pub use mock_stats_source::MockStatsSource;
