mod error;
mod get_pihole_stats;

pub use error::FetchStatsError;
pub use get_pihole_stats::{GetPiholeStatsUseCase, PiholeSnapshot};
