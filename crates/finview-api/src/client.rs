//! Statements backend client.
//!
//! The backend serves every stored statement of a company at
//! `GET {base}/api/{identifier}`, where the identifier is a raw ticker or a
//! zero-padded CIK. It answers 404 when it has nothing for the identifier.

use async_trait::async_trait;
use finview_core::{Result, StatementRecord, StatementSource, ViewError};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client for the statements backend.
///
/// No timeout is set unless one is given through [`ApiClient::with_timeout`];
/// failed requests are not retried.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (e.g. `http://localhost:3000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a pre-configured reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ViewError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Backend address without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the statements of an identifier.
    #[must_use]
    pub fn statements_url(&self, identifier: &str) -> String {
        format!("{}/api/{}", self.base_url, identifier)
    }
}

#[async_trait]
impl StatementSource for ApiClient {
    fn name(&self) -> &str {
        "Statements API"
    }

    async fn fetch_statements(&self, identifier: &str) -> Result<Vec<StatementRecord>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ViewError::InvalidParameter("Empty identifier".to_string()));
        }

        let url = self.statements_url(identifier);
        debug!("Fetching statements from {}", url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ViewError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ViewError::Network(e.to_string()))?;

        let result = parse_statements(identifier, status, &body);
        match &result {
            Ok(records) => debug!(
                identifier,
                statements = records.len(),
                "Fetched statements"
            ),
            Err(ViewError::NotFound(_)) => debug!(identifier, "No statements stored"),
            Err(e) => warn!(identifier, error = %e, "Statement fetch failed"),
        }
        result
    }
}

/// Sorts a backend response into records, "not found" or a failure.
///
/// - 404, an empty array, or a JSON object: [`ViewError::NotFound`]
/// - any other non-success status: [`ViewError::HttpStatus`] with the status
///   text and body
/// - a success body that is neither array nor object: [`ViewError::Parse`]
pub fn parse_statements(
    identifier: &str,
    status: StatusCode,
    body: &str,
) -> Result<Vec<StatementRecord>> {
    if status == StatusCode::NOT_FOUND {
        return Err(ViewError::NotFound(identifier.to_string()));
    }

    if !status.is_success() {
        let mut reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let body = body.trim();
        if !body.is_empty() {
            reason.push_str(" - ");
            reason.push_str(body);
        }
        return Err(ViewError::HttpStatus {
            status: status.as_u16(),
            reason,
        });
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ViewError::Parse(format!("Failed to parse statements: {e}")))?;

    match value {
        Value::Array(items) if items.is_empty() => {
            Err(ViewError::NotFound(identifier.to_string()))
        }
        Value::Array(items) => serde_json::from_value(Value::Array(items))
            .map_err(|e| ViewError::Parse(format!("Failed to parse statements: {e}"))),
        Value::Object(_) => Err(ViewError::NotFound(identifier.to_string())),
        _ => Err(ViewError::Parse(
            "Invalid data format received from server".to_string(),
        )),
    }
}
