//! # Pi-hole stat exporter
//!
//! Serves Pi-hole statistics as Prometheus metrics and InfluxDB line protocol

mod bootstrap;
mod server;

use clap::Parser;
use pihole_exporter_api::{create_exporter_routes, AppState};
use pihole_exporter_application::use_cases::GetPiholeStatsUseCase;
use pihole_exporter_domain::{NAME, VERSION};
use pihole_exporter_infrastructure::PiholeHttpClient;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(about = "Export Pi-hole statistics for Prometheus and InfluxDB")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(&cli.config)?;
    bootstrap::init_logging(&config.logging);

    info!(
        version = VERSION,
        config_file = %cli.config.display(),
        upstream = %config.pihole.url,
        listen = %config.exporter.url,
        "Starting {NAME}"
    );

    // reqwest brings in ring, so rustls can't pick a provider on its own
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let client = PiholeHttpClient::new(&config.pihole)?;
    let get_stats = Arc::new(GetPiholeStatsUseCase::new(Arc::new(client)));

    let prometheus_path = config.exporter.prometheus_path();
    let influx_path = config.exporter.influxdata_path();

    match prometheus_path {
        Some(path) => info!(path, "Prometheus exposition enabled"),
        None => warn!("prometheus_path is empty, Prometheus exposition disabled"),
    }
    match influx_path {
        Some(path) => info!(path, "InfluxDB line protocol exposition enabled"),
        None => warn!("influxdata_path is empty, InfluxDB line protocol exposition disabled"),
    }

    let app = create_exporter_routes(AppState::new(get_stats), prometheus_path, influx_path)
        .layer(TraceLayer::new_for_http());

    server::start_web_server(&config.exporter, app).await
}
