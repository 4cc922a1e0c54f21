pub mod config_builders;
pub mod pihole_server_mock;
pub mod tls_server_mock;

pub use config_builders::PiholeConfigBuilder;
pub use pihole_server_mock::{CannedResponse, MockPiholeServer, RecordedRequest};
pub use tls_server_mock::MockTlsServer;
