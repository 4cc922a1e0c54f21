use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error};

/// How long in-flight requests may keep running once shutdown starts.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);

/// Fires once on SIGINT or SIGTERM.
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Install OS signal handlers in a background task.
    pub fn install() -> Self {
        let (tx, rx) = watch::channel(false);

        tokio::spawn(async move {
            wait_for_signal().await;
            let _ = tx.send(true);
        });

        Self { rx }
    }

    /// Resolves once shutdown was requested.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.rx.clone();
        async move {
            let _ = rx.wait_for(|&triggered| triggered).await;
        }
    }

    /// Resolves [`SHUTDOWN_TIMEOUT`] after shutdown was requested.
    pub fn deadline(&self) -> impl Future<Output = ()> + Send + 'static {
        let wait = self.wait();
        async move {
            wait.await;
            tokio::time::sleep(SHUTDOWN_TIMEOUT).await;
        }
    }
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => debug!("Received Ctrl+C, shutting down"),
        _ = terminate => debug!("Received SIGTERM, shutting down"),
    }
}
