use serde::{Deserialize, Serialize};

use crate::domain::{Currency, OhlcPoint, Timeframe};

/// One row of the market summary. Immutable for the lifetime of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub rank: u32,
    pub symbol: String,
    pub name: String,
    pub price_usd: f64,
    pub price_vnd: f64,
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub market_cap_usd: f64,
    pub volume_24h_usd: f64,
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub sparkline: Vec<f64>,
    #[serde(default)]
    pub ohlc: Vec<OhlcPoint>,
    #[serde(default)]
    pub signals: Vec<String>,
}

impl Asset {
    #[inline]
    pub fn price_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.price_usd,
            Currency::Vnd => self.price_vnd,
        }
    }

    #[inline]
    pub fn change_over(&self, timeframe: Timeframe) -> f64 {
        match timeframe {
            Timeframe::H1 => self.percent_change_1h,
            Timeframe::H24 => self.percent_change_24h,
            Timeframe::D7 => self.percent_change_7d,
        }
    }

    /// Circulating supply as a percentage of total supply.
    /// None when the total is unknown or zero.
    pub fn supply_pct(&self) -> Option<f64> {
        match self.total_supply {
            Some(total) if total > 0.0 => Some(self.circulating_supply / total * 100.0),
            _ => None,
        }
    }
}
