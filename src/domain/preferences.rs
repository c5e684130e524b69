use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Vnd,
}

impl Currency {
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Vnd => "VND",
        }
    }
}

/// Which percent change the board treats as "the" trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
pub enum Timeframe {
    #[default]
    #[strum(serialize = "1h")]
    H1,
    #[strum(serialize = "24h")]
    H24,
    #[strum(serialize = "7d")]
    D7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Everything the user chooses that outlives a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub currency: Currency,
    pub timeframe: Timeframe,
    pub theme: Theme,
    /// Starred symbols in the order they were starred. No duplicates.
    pub watchlist: Vec<String>,
}

impl Preferences {
    #[inline]
    pub fn is_watched(&self, symbol: &str) -> bool {
        self.watchlist.iter().any(|s| s == symbol)
    }

    /// Adds the symbol if absent, removes it if present.
    /// Returns true when the symbol ends up watched.
    pub fn toggle_watch(&mut self, symbol: &str) -> bool {
        if self.is_watched(symbol) {
            self.watchlist.retain(|s| s != symbol);
            false
        } else {
            self.watchlist.push(symbol.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enums_use_storage_spelling() {
        assert_eq!(Currency::Vnd.as_ref(), "vnd");
        assert_eq!(Timeframe::H24.as_ref(), "24h");
        assert_eq!(Theme::Dark.as_ref(), "dark");
        assert_eq!(Timeframe::from_str("7d").ok(), Some(Timeframe::D7));
        assert!(Currency::from_str("eur").is_err());
    }

    #[test]
    fn double_toggle_restores_watchlist() {
        let mut prefs = Preferences {
            watchlist: vec!["BTC".into(), "ETH".into()],
            ..Default::default()
        };
        let before = prefs.watchlist.clone();

        assert!(prefs.toggle_watch("SOL"));
        assert!(prefs.is_watched("SOL"));
        assert!(!prefs.toggle_watch("SOL"));
        assert_eq!(prefs.watchlist, before);

        assert!(!prefs.toggle_watch("BTC"));
        assert!(prefs.toggle_watch("BTC"));
        assert_eq!(prefs.watchlist, vec!["ETH".to_string(), "BTC".to_string()]);
    }
}
