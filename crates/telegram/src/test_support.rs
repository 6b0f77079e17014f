//! Shared test fixtures: a minimal canned-response HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A minimal mock Bot API server built on tokio that returns canned
/// responses.
pub(crate) struct MockApiServer {
    listener: TcpListener,
    pub(crate) base_url: String,
}

impl MockApiServer {
    pub(crate) async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");
        Self { listener, base_url }
    }

    /// Accept `bodies.len()` connections in order, answering each with HTTP
    /// 200 and the corresponding JSON body. Returns the raw request bytes in
    /// arrival order.
    pub(crate) async fn respond_each(self, bodies: Vec<String>) -> Vec<Vec<u8>> {
        let mut requests = Vec::with_capacity(bodies.len());
        for body in bodies {
            let (mut stream, _) = self.listener.accept().await.unwrap();

            let mut buf = vec![0u8; 16384];
            let n = stream.read(&mut buf).await.unwrap();
            buf.truncate(n);
            requests.push(buf);

            let response = format!(
                "HTTP/1.1 200 OK\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\
                 \r\n\
                 {body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        }
        requests
    }

    /// Accept one connection and respond with the given JSON body.
    pub(crate) async fn respond_once(self, body: &str) -> Vec<u8> {
        let mut requests = self.respond_each(vec![body.to_owned()]).await;
        requests.pop().unwrap()
    }

    /// Expect no connection to arrive within the given window.
    pub(crate) async fn expect_silence(self, window: std::time::Duration) {
        let accepted = tokio::time::timeout(window, self.listener.accept()).await;
        assert!(accepted.is_err(), "unexpected request reached the server");
    }
}

/// A successful `sendMessage`-style response envelope.
pub(crate) const OK_BODY: &str = r#"{"ok": true, "result": {"message_id": 42}}"#;
