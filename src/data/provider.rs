use anyhow::{Context, Result};
use async_trait::async_trait;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::ENDPOINT;
use crate::domain::{FeedStatus, MarketSummary};

// Embed the fallback snapshot
const BUNDLED_SUMMARY_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::bundled_summary_file!()
));

/// Abstract interface for obtaining a market summary.
// reqwest futures are not Send in the browser.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SummaryProvider: Send + Sync {
    /// Human readable source name, used in logs and the status bar.
    fn name(&self) -> String;

    /// Status the UI should show when this provider supplied the data.
    fn status(&self) -> FeedStatus;

    async fn fetch_summary(&self) -> Result<MarketSummary>;
}

/// `GET <base>/summary`
pub struct HttpSummaryProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpSummaryProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let url = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            ENDPOINT.summary_path
        );

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(Duration::from_secs(ENDPOINT.request_timeout_secs))
            .connect_timeout(Duration::from_secs(ENDPOINT.connect_timeout_secs));

        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SummaryProvider for HttpSummaryProvider {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn status(&self) -> FeedStatus {
        FeedStatus::Live
    }

    async fn fetch_summary(&self) -> Result<MarketSummary> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", self.url))?;

        response
            .json::<MarketSummary>()
            .await
            .with_context(|| format!("GET {} returned a malformed summary", self.url))
    }
}

/// The snapshot compiled into the binary. Always available.
pub struct BundledSummaryProvider {
    json: &'static str,
}

impl Default for BundledSummaryProvider {
    fn default() -> Self {
        Self {
            json: BUNDLED_SUMMARY_JSON,
        }
    }
}

impl BundledSummaryProvider {
    /// Parse an arbitrary document instead of the embedded one.
    pub fn from_static(json: &'static str) -> Self {
        Self { json }
    }

    pub fn load(&self) -> Result<MarketSummary> {
        serde_json::from_str(self.json).context("Failed to parse bundled summary snapshot")
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SummaryProvider for BundledSummaryProvider {
    fn name(&self) -> String {
        ENDPOINT.bundled_label.to_string()
    }

    fn status(&self) -> FeedStatus {
        FeedStatus::Offline
    }

    async fn fetch_summary(&self) -> Result<MarketSummary> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_snapshot_parses() {
        let summary = BundledSummaryProvider::default()
            .load()
            .expect("bundled snapshot");
        assert!(!summary.data.is_empty());
        assert!(summary.global.btc_dominance > 0.0);
        assert!(summary.data.iter().all(|a| !a.symbol.is_empty()));
    }

    #[test]
    fn http_provider_joins_base_and_path() {
        let provider = HttpSummaryProvider::new("http://localhost:8000/").expect("client");
        assert_eq!(provider.url(), "http://localhost:8000/summary");
        assert_eq!(provider.status(), FeedStatus::Live);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let provider = BundledSummaryProvider::from_static("{\"data\": 3}");
        assert!(provider.load().is_err());
    }
}
