pub mod stats;

// Re-export use cases
pub use stats::{FetchStatsError, GetPiholeStatsUseCase, PiholeSnapshot};
