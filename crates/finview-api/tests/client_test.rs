//! Tests of the statements client against a one-shot local HTTP server.

use finview_api::ApiClient;
use finview_core::{StatementSource, StatementType, ViewError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves one canned response and reports the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request).to_string();
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn test_fetch_statements() {
    let (base, request) = serve_once(
        "200 OK",
        r#"[{"_id": {"$oid": "1"}, "cik": "0000320193", "financialStatementType": "BS",
             "data": [["reportPeriod", "20230930"], ["Cash", "29965"]]}]"#,
    )
    .await;

    let client = ApiClient::new(base);
    let records = client.fetch_statements("0000320193").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].statement_type, StatementType::BalanceSheet);
    assert_eq!(request.await.unwrap(), "GET /api/0000320193 HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_not_found() {
    let (base, _request) = serve_once(
        "404 Not Found",
        r#"{"error": "No financial statements found for this CIK"}"#,
    )
    .await;

    let err = ApiClient::new(base).fetch_statements("ZZZZ").await.unwrap_err();
    assert!(matches!(err, ViewError::NotFound(id) if id == "ZZZZ"));
}

#[tokio::test]
async fn test_fetch_server_error() {
    let (base, _request) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;

    let err = ApiClient::new(base).fetch_statements("AAPL").await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(matches!(err, ViewError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ApiClient::new(format!("http://{addr}"))
        .fetch_statements("AAPL")
        .await
        .unwrap_err();
    assert!(matches!(err, ViewError::Network(_)));
}

#[tokio::test]
async fn test_empty_identifier() {
    let err = ApiClient::new("http://127.0.0.1:9")
        .fetch_statements("  ")
        .await
        .unwrap_err();
    assert!(matches!(err, ViewError::InvalidParameter(_)));
}
