#![allow(dead_code)]
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_rustls::TlsAcceptor;

/// HTTPS endpoint with a freshly generated self-signed certificate
///
/// Answers every request that completes the handshake with `200 OK` and an
/// empty JSON object.
pub struct MockTlsServer {
    addr: SocketAddr,
    cert_pem: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTlsServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let certified = rcgen::generate_simple_self_signed(vec!["127.0.0.1".to_string()])?;
        let cert_der: CertificateDer<'static> = certified.cert.der().clone();
        let key_der = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(
            certified.key_pair.serialize_der(),
        ));

        let config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(vec![cert_der], key_der)?;
        let acceptor = TlsAcceptor::from(Arc::new(config));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let acceptor = acceptor.clone();
                        tokio::spawn(async move {
                            // Handshake errors are what the rejecting tests expect
                            let Ok(mut tls) = acceptor.accept(stream).await else { return };
                            let mut buf = Vec::new();
                            let mut chunk = [0u8; 1024];
                            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                match tls.read(&mut chunk).await {
                                    Ok(0) | Err(_) => return,
                                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                }
                            }
                            let _ = tls
                                .write_all(
                                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                                      Content-Length: 2\r\nConnection: close\r\n\r\n{}",
                                )
                                .await;
                            let _ = tls.shutdown().await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            cert_pem: certified.cert.pem(),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("https://{}/admin/api.php", self.addr)
    }

    /// PEM of the server certificate
    pub fn cert_pem(&self) -> &str {
        &self.cert_pem
    }
}

impl Drop for MockTlsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
