use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Asset;

/// Aggregate market figures. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub market_cap_usd: f64,
    pub volume_24h_usd: f64,
    pub btc_dominance: f64,
}

/// Payload of `GET /summary` (and of the bundled snapshot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub data: Vec<Asset>,
    pub global: GlobalStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

impl MarketSummary {
    pub fn find(&self, symbol: &str) -> Option<(usize, &Asset)> {
        self.data.iter().enumerate().find(|(_, a)| a.symbol == symbol)
    }
}

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Live,
    Offline,
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Live => write!(f, "Live"),
            FeedStatus::Offline => write!(f, "Offline"),
        }
    }
}
