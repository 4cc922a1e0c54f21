use super::shutdown::{ShutdownSignal, SHUTDOWN_TIMEOUT};
use super::tls::load_server_config;
use axum::{extract::ConnectInfo, Router};
use hyper::body::Incoming;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use pihole_exporter_domain::config::ExporterConfig;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tower::ServiceExt;
use tracing::{debug, info, warn};

pub async fn start_web_server(config: &ExporterConfig, app: Router) -> anyhow::Result<()> {
    let bind_addr = config.bind_address()?;
    let shutdown = ShutdownSignal::install();

    let listener = TcpListener::bind(&bind_addr).await?;
    let local_addr = listener.local_addr()?;

    match config.tls_files() {
        Some((cert, key)) if config.is_tls() => {
            let acceptor = TlsAcceptor::from(load_server_config(cert, key)?);
            info!(bind_address = %local_addr, scheme = "https", "Exporter listening");
            serve_tls(listener, acceptor, app, shutdown).await
        }
        _ => {
            info!(bind_address = %local_addr, scheme = "http", "Exporter listening");
            serve_plain(listener, app, shutdown).await
        }
    }
}

async fn serve_plain(
    listener: TcpListener,
    app: Router,
    shutdown: ShutdownSignal,
) -> anyhow::Result<()> {
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown.wait())
    .into_future();

    tokio::select! {
        result = server => result?,
        _ = shutdown.deadline() => {
            warn!(timeout_secs = SHUTDOWN_TIMEOUT.as_secs(), "Timeout waiting for in-flight requests");
        }
    }

    info!("Exporter stopped");
    Ok(())
}

async fn serve_tls(
    listener: TcpListener,
    acceptor: TlsAcceptor,
    app: Router,
    shutdown: ShutdownSignal,
) -> anyhow::Result<()> {
    let graceful = GracefulShutdown::new();
    let builder = auto::Builder::new(TokioExecutor::new()).http1_only();
    let stop = shutdown.wait();
    tokio::pin!(stop);

    loop {
        let (stream, peer) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Failed to accept connection");
                    continue;
                }
            },
            _ = &mut stop => break,
        };

        let acceptor = acceptor.clone();
        let builder = builder.clone();
        let watcher = graceful.watcher();
        // Handlers read the client address through ConnectInfo, as with axum::serve
        let service = app.clone().map_request(move |mut request: Request<Incoming>| {
            request.extensions_mut().insert(ConnectInfo(peer));
            request
        });

        tokio::spawn(async move {
            let stream = match acceptor.accept(stream).await {
                Ok(stream) => stream,
                Err(e) => {
                    debug!(remote_address = %peer, error = %e, "TLS handshake failed");
                    return;
                }
            };

            let conn =
                builder.serve_connection(TokioIo::new(stream), TowerToHyperService::new(service));
            if let Err(e) = watcher.watch(conn).await {
                debug!(remote_address = %peer, error = %e, "Connection closed with error");
            }
        });
    }

    drop(listener);
    debug!("Waiting for in-flight requests");

    tokio::select! {
        _ = graceful.shutdown() => {}
        _ = tokio::time::sleep(SHUTDOWN_TIMEOUT) => {
            warn!(timeout_secs = SHUTDOWN_TIMEOUT.as_secs(), "Timeout waiting for in-flight requests");
        }
    }

    info!("Exporter stopped");
    Ok(())
}
