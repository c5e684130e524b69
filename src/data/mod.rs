mod fetch;
mod prefs;
mod provider;

pub use {
    fetch::{FetchOutcome, default_providers, fetch_market_summary},
    prefs::{MemoryStore, PreferenceStore},
    provider::{BundledSummaryProvider, HttpSummaryProvider, SummaryProvider},
};
