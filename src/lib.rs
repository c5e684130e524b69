#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod search;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for print_summary.rs)
pub use app::App;
pub use config::ENDPOINT;
pub use data::{FetchOutcome, default_providers, fetch_market_summary};
pub use models::Dashboard;

// CLI argument parsing
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the market summary service (GET <base>/summary)
    #[arg(long, default_value = ENDPOINT.default_base_url)]
    pub api_base: String,

    /// Skip the live endpoint and show the bundled snapshot
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Seconds between automatic refreshes
    #[arg(
        long,
        default_value_t = ENDPOINT.refresh_secs,
        value_parser = clap::value_parser!(u64).range(ENDPOINT.min_refresh_secs..=ENDPOINT.max_refresh_secs)
    )]
    pub refresh_secs: u64,
}

impl Cli {
    /// Refresh period, clamped for callers that build `Cli` by hand.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(
            self.refresh_secs
                .clamp(ENDPOINT.min_refresh_secs, ENDPOINT.max_refresh_secs),
        )
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            api_base: ENDPOINT.default_base_url.to_string(),
            offline: false,
            refresh_secs: ENDPOINT.refresh_secs,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
