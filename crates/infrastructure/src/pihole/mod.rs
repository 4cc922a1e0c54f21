pub mod client;
pub mod tls;

pub use client::PiholeHttpClient;
