//! Single-pair comparison against the external scoring engine.
//!
//! One call per pair, no retries; retry policy belongs to whoever drives the
//! orchestrator. A response only becomes a [`ComparisonResult`] after passing
//! the full structural contract in [`crate::schema`].

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::CompareError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompareClient;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

use crate::document::Document;
use crate::schema::ComparisonResult;

/// Backend seam for pairwise comparison, mockable in tests.
#[async_trait]
pub trait CompareBackend: Send + Sync {
    /// Compares two documents with the given text-weight blend in [0, 1].
    async fn compare(
        &self,
        first: &Document,
        second: &Document,
        weight_text: f64,
    ) -> Result<ComparisonResult, CompareError>;
}

/// HTTP client for the scoring engine's `POST /compare` endpoint.
#[derive(Debug, Clone)]
pub struct HttpComparisonClient {
    http: reqwest::Client,
    compare_url: String,
}

impl HttpComparisonClient {
    /// Creates a client targeting `engine_url` with a per-request timeout
    /// bounding each individual comparison call.
    pub fn new(engine_url: &str, timeout: Duration) -> Result<Self, CompareError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            compare_url: format!("{}/compare", engine_url.trim_end_matches('/')),
        })
    }

    /// Returns the resolved compare endpoint URL.
    pub fn compare_url(&self) -> &str {
        &self.compare_url
    }
}

#[async_trait]
impl CompareBackend for HttpComparisonClient {
    async fn compare(
        &self,
        first: &Document,
        second: &Document,
        weight_text: f64,
    ) -> Result<ComparisonResult, CompareError> {
        let form = Form::new()
            .part(
                "file1",
                Part::bytes(first.content.to_vec()).file_name(first.name.clone()),
            )
            .part(
                "file2",
                Part::bytes(second.content.to_vec()).file_name(second.name.clone()),
            )
            .text("weight_text", weight_text.to_string());

        debug!(file1 = %first.name, file2 = %second.name, "sending comparison request");

        let response = self
            .http
            .post(&self.compare_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "Comparison failed".to_string());
            return Err(CompareError::Remote { message });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CompareError::Schema(e.to_string()))
    }
}
