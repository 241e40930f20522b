//! Detector adapter: the page-scanning collaborator behind a trait seam

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;

use crate::detect::PageScan;
use crate::error::ScanError;

/// Page-scanning collaborator.
///
/// Implementations load the page, extract candidate auth components, and
/// report bot-protection walls. Transport faults surface as [`ScanError`];
/// the pipeline converts them into an uncached `method = "error"` response in
/// exactly one place.
#[async_trait]
pub trait PageScanner: Send + Sync {
    /// Scan a URL for authentication components.
    async fn scan(&self, url: &str) -> Result<PageScan, ScanError>;
}

/// HTTP adapter for the browser-automation scan service.
///
/// The service drives a headless browser and replies with the `PageScan`
/// JSON; how it identifies components is its own concern.
pub struct HttpScanner {
    http: HttpClient,
    base_url: String,
}

impl HttpScanner {
    /// Create a scanner adapter for a service endpoint.
    ///
    /// `timeout` bounds the whole scan call; page loads are the most
    /// latency-prone step of the pipeline.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScanError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::InvalidResponse(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Serialize)]
struct ScanRequest<'a> {
    url: &'a str,
}

#[async_trait]
impl PageScanner for HttpScanner {
    async fn scan(&self, url: &str) -> Result<PageScan, ScanError> {
        let endpoint = format!("{}/scan", self.base_url);
        log::debug!("Scanning {} via {}", url, endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(&ScanRequest { url })
            .send()
            .await
            .map_err(ScanError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let scan = response.json::<PageScan>().await.map_err(|e| {
                    ScanError::InvalidResponse(format!("Failed to parse scan response: {}", e))
                })?;
                Ok(scan)
            }
            _ => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                Err(ScanError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_creation_strips_trailing_slash() {
        let scanner = HttpScanner::new("http://localhost:8700/", Duration::from_secs(60)).unwrap();
        assert_eq!(scanner.base_url, "http://localhost:8700");
    }

    #[tokio::test]
    async fn test_unreachable_service_maps_to_scan_error() {
        // Nothing listens on this port
        let scanner = HttpScanner::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();

        let err = scanner.scan("http://example.com").await.unwrap_err();
        match err {
            ScanError::Unreachable | ScanError::Timeout => (),
            other => panic!("expected connect failure, got {:?}", other),
        }
    }
}
