// Summary loading with fallback, shared by the GUI and the terminal binary.

use anyhow::{Result, anyhow};

use crate::Cli;
use crate::config::DF;
use crate::data::{BundledSummaryProvider, HttpSummaryProvider, SummaryProvider};
use crate::domain::{FeedStatus, MarketSummary};

/// A successful fetch: the snapshot plus where it came from.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub summary: MarketSummary,
    pub status: FeedStatus,
    pub source: String,
}

/// Live endpoint first, bundled snapshot second (or only, with `--offline`).
pub fn default_providers(args: &Cli) -> Vec<Box<dyn SummaryProvider>> {
    let mut providers: Vec<Box<dyn SummaryProvider>> = Vec::with_capacity(2);
    if !args.offline {
        match HttpSummaryProvider::new(&args.api_base) {
            Ok(p) => providers.push(Box::new(p)),
            Err(e) => log::warn!("Live endpoint disabled: {:#}", e),
        }
    }
    providers.push(Box::new(BundledSummaryProvider::default()));
    providers
}

/// Try each provider in turn and return the first snapshot that loads.
/// No retries: a failed provider is logged and skipped.
pub async fn fetch_market_summary(providers: &[Box<dyn SummaryProvider>]) -> Result<FetchOutcome> {
    let mut failures = Vec::new();

    for provider in providers {
        if DF.log_fetch {
            log::info!("Fetching market summary from {}", provider.name());
        }
        match provider.fetch_summary().await {
            Ok(summary) => {
                if DF.log_fetch {
                    log::info!(
                        "Loaded {} assets from {} ({})",
                        summary.data.len(),
                        provider.name(),
                        provider.status()
                    );
                }
                return Ok(FetchOutcome {
                    summary,
                    status: provider.status(),
                    source: provider.name(),
                });
            }
            Err(e) => {
                log::warn!("⚠️  {} failed: {:#}. Falling back...", provider.name(), e);
                failures.push(format!("{}: {:#}", provider.name(), e));
            }
        }
    }

    Err(anyhow!(
        "No market summary source succeeded ({})",
        failures.join("; ")
    ))
}
