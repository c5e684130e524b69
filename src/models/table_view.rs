use std::cmp::Ordering;
use std::fmt;

use strum_macros::{EnumIter, EnumString};

use crate::domain::{Asset, Currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// Sortable columns of the asset table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortColumn {
    #[strum(serialize = "rank")]
    Rank,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "1h")]
    Change1h,
    #[strum(serialize = "24h")]
    Change24h,
    #[strum(serialize = "7d")]
    Change7d,
    #[strum(serialize = "market_cap", serialize = "mcap")]
    MarketCap,
    #[strum(serialize = "volume")]
    Volume24h,
    #[strum(serialize = "supply")]
    Supply,
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortColumn::Rank => "#",
            SortColumn::Name => "Name",
            SortColumn::Price => "Price",
            SortColumn::Change1h => "1h %",
            SortColumn::Change24h => "24h %",
            SortColumn::Change7d => "7d %",
            SortColumn::MarketCap => "Market Cap",
            SortColumn::Volume24h => "24h Volume",
            SortColumn::Supply => "Supply",
        };
        write!(f, "{}", s)
    }
}

impl SortColumn {
    /// Ascending comparison. Price follows the displayed currency.
    pub fn compare(&self, a: &Asset, b: &Asset, currency: Currency) -> Ordering {
        match self {
            SortColumn::Rank => a.rank.cmp(&b.rank),
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Price => a.price_in(currency).total_cmp(&b.price_in(currency)),
            SortColumn::Change1h => a.percent_change_1h.total_cmp(&b.percent_change_1h),
            SortColumn::Change24h => a.percent_change_24h.total_cmp(&b.percent_change_24h),
            SortColumn::Change7d => a.percent_change_7d.total_cmp(&b.percent_change_7d),
            SortColumn::MarketCap => a.market_cap_usd.total_cmp(&b.market_cap_usd),
            SortColumn::Volume24h => a.volume_24h_usd.total_cmp(&b.volume_24h_usd),
            // Unknown supply sorts below every known value
            SortColumn::Supply => a
                .supply_pct()
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&b.supply_pct().unwrap_or(f64::NEG_INFINITY)),
        }
    }
}

/// Everything a table row needs, resolved against the current preferences.
#[derive(Debug, Clone, Copy)]
pub struct AssetRow<'a> {
    /// Position in the snapshot (stable across search/sort)
    pub index: usize,
    pub asset: &'a Asset,
    /// Price in the selected currency
    pub price: f64,
    /// Percent change over the selected timeframe
    pub trend: f64,
    pub watched: bool,
    pub supply_pct: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sort_keys_parse_case_insensitively() {
        assert_eq!(SortColumn::from_str("MCAP").ok(), Some(SortColumn::MarketCap));
        assert_eq!(SortColumn::from_str("24h").ok(), Some(SortColumn::Change24h));
        assert!(SortColumn::from_str("colour").is_err());
    }

    #[test]
    fn descending_reverses_ordering() {
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
    }
}
