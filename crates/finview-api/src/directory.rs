//! Company directory loading.

use finview_core::{Result, ViewError};
use finview_table::CompanyDirectory;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// SEC company tickers URL
pub const COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// Loads the company directory from disk or from the SEC.
///
/// The SEC requires identifying user agent headers. Format should be:
/// "AppName/Version (contact@email.com)"
#[derive(Debug)]
pub struct DirectoryLoader {
    client: reqwest::Client,
}

impl DirectoryLoader {
    /// Create a loader that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ViewError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Create a loader with a pre-configured reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Reads a directory document from a local file.
    pub async fn load_file(path: impl AsRef<Path>) -> Result<CompanyDirectory> {
        let path = path.as_ref();
        debug!("Reading company directory from {}", path.display());
        let json = tokio::fs::read_to_string(path).await?;
        CompanyDirectory::from_json(&json)
    }

    /// Downloads a directory document.
    pub async fn fetch(&self, url: &str) -> Result<CompanyDirectory> {
        debug!("Fetching company directory from {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ViewError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewError::HttpStatus {
                status: status.as_u16(),
                reason: format!(
                    "Failed to fetch company tickers: {}",
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let json = response
            .text()
            .await
            .map_err(|e| ViewError::Network(e.to_string()))?;
        CompanyDirectory::from_json(&json)
    }

    /// Downloads the SEC ticker list.
    pub async fn fetch_sec(&self) -> Result<CompanyDirectory> {
        self.fetch(COMPANY_TICKERS_URL).await
    }
}
