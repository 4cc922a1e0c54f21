//! Pi-hole stat exporter domain layer
pub mod config;
pub mod errors;
pub mod fetch_result;
pub mod stat_kind;
pub mod stats;
pub mod validators;

pub use config::{Config, ConfigError};
pub use errors::DomainError;
pub use fetch_result::FetchResult;
pub use stat_kind::StatKind;
pub use stats::{GravityLastUpdated, GravityRelative, QueryTypeRatios, QueryTypesResponse, SummaryStats};

/// Program name, used in the upstream `User-Agent` and in version output.
pub const NAME: &str = "pihole-stat-exporter";

/// Program version, taken from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*
   "A man is not dead while his name is still spoken."
   - Going Postal, Chapter 4 prologue
*/
pub const CLACKS_HEADER: &str = "x-clacks-overhead";
pub const CLACKS_VALUE: &str = "GNU Terry Pratchett";
