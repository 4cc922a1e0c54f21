pub mod exposition;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_exporter_routes;
pub use state::AppState;
