#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// Request line and headers as received by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response the mock sends back
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Wait before answering, for timeout tests
    pub delay: Option<Duration>,
}

impl CannedResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            headers: Vec::new(),
            body: String::new(),
            delay: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        let mut response = Self::status(302, "Found");
        response
            .headers
            .push(("Location".to_string(), location.to_string()));
        response
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Handler = dyn Fn(&RecordedRequest) -> CannedResponse + Send + Sync;

/// Minimal HTTP/1.1 server standing in for a Pi-hole `api.php`
///
/// Every connection serves a single request and is then closed.
pub struct MockPiholeServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockPiholeServer {
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&RecordedRequest) -> CannedResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            let recorded = Arc::clone(&recorded);
                            let handler = Arc::clone(&handler);
                            tokio::spawn(async move {
                                let _ = Self::serve(stream, recorded, handler).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Always answers with the same response
    pub async fn fixed(response: CannedResponse) -> Result<Self, std::io::Error> {
        Self::start(move |_| response.clone()).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL of the fake `api.php`
    pub fn url(&self) -> String {
        format!("http://{}/admin/api.php", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn serve(
        mut stream: TcpStream,
        recorded: Arc<Mutex<Vec<RecordedRequest>>>,
        handler: Arc<Handler>,
    ) -> Result<(), std::io::Error> {
        let mut buf = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];

        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await?;
            if n == 0 || buf.len() > 16 * 1024 {
                return Ok(());
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let request = Self::parse(&buf);
        recorded.lock().unwrap().push(request.clone());

        let response = handler(&request);
        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        let mut raw = format!("HTTP/1.1 {} {}\r\n", response.status, response.reason);
        for (name, value) in &response.headers {
            raw.push_str(&format!("{name}: {value}\r\n"));
        }
        raw.push_str(&format!(
            "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.body.len(),
            response.body
        ));

        stream.write_all(raw.as_bytes()).await?;
        stream.shutdown().await
    }

    fn parse(raw: &[u8]) -> RecordedRequest {
        let text = String::from_utf8_lossy(raw);
        let mut lines = text.split("\r\n");

        let mut request_line = lines.next().unwrap_or_default().split(' ');
        let method = request_line.next().unwrap_or_default().to_string();
        let target = request_line.next().unwrap_or_default().to_string();

        let headers = lines
            .take_while(|line| !line.is_empty())
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        RecordedRequest {
            method,
            target,
            headers,
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockPiholeServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
