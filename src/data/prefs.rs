//! Preference persistence on top of a string key/value store.
//!
//! On the web the eframe storage is `localStorage`, so the keys below are
//! exactly what ends up in the browser.

use std::collections::HashMap;
use std::str::FromStr;

use itertools::Itertools;

use crate::config::{DF, PERSISTENCE};
use crate::domain::Preferences;

/// Minimal string store the preferences are written through.
pub trait PreferenceStore {
    fn read_pref(&self, key: &str) -> Option<String>;
    fn write_pref(&mut self, key: &str, value: &str);
}

impl PreferenceStore for dyn eframe::Storage + '_ {
    fn read_pref(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn write_pref(&mut self, key: &str, value: &str) {
        self.set_string(key, value.to_owned());
    }
}

/// In-process store. Used when no eframe storage is available and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read_pref(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write_pref(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

impl Preferences {
    /// Read all preferences. Missing or unreadable values fall back to defaults.
    pub fn load_from<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let keys = &PERSISTENCE.keys;
        let prefs = Self {
            currency: read_choice(store, keys.currency),
            timeframe: read_choice(store, keys.timeframe),
            theme: read_choice(store, keys.theme),
            watchlist: read_watchlist(store, keys.watchlist),
        };
        if DF.log_prefs {
            log::info!("Loaded preferences: {:?}", prefs);
        }
        prefs
    }

    /// Write every preference key.
    pub fn store_into<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        let keys = &PERSISTENCE.keys;
        store.write_pref(keys.currency, self.currency.as_ref());
        store.write_pref(keys.timeframe, self.timeframe.as_ref());
        store.write_pref(keys.theme, self.theme.as_ref());
        match serde_json::to_string(&self.watchlist) {
            Ok(json) => store.write_pref(keys.watchlist, &json),
            Err(e) => log::error!("Failed to encode watchlist: {}", e),
        }
        if DF.log_prefs {
            log::info!("Stored preferences: {:?}", self);
        }
    }
}

fn read_choice<S, T>(store: &S, key: &str) -> T
where
    S: PreferenceStore + ?Sized,
    T: FromStr + Default,
{
    match store.read_pref(key) {
        None => T::default(),
        Some(raw) => T::from_str(raw.trim()).unwrap_or_else(|_| {
            log::warn!("Ignoring unknown stored {} value {:?}", key, raw);
            T::default()
        }),
    }
}

fn read_watchlist<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Vec<String> {
    let Some(raw) = store.read_pref(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        // Keep first occurrence, drop repeats.
        Ok(symbols) => symbols.into_iter().unique().collect(),
        Err(e) => {
            log::warn!("Ignoring malformed stored watchlist {:?}: {}", raw, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Theme, Timeframe};

    #[test]
    fn empty_store_yields_defaults() {
        let prefs = Preferences::load_from(&MemoryStore::new());
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.currency, Currency::Usd);
        assert_eq!(prefs.timeframe, Timeframe::H1);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn preferences_survive_a_reload() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            currency: Currency::Vnd,
            timeframe: Timeframe::D7,
            theme: Theme::Dark,
            watchlist: vec!["SOL".into(), "BTC".into()],
        };
        prefs.store_into(&mut store);

        assert_eq!(store.read_pref("watchlist").as_deref(), Some("[\"SOL\",\"BTC\"]"));
        assert_eq!(store.read_pref("currency").as_deref(), Some("vnd"));
        assert_eq!(store.read_pref("timeframe").as_deref(), Some("7d"));
        assert_eq!(store.read_pref("theme").as_deref(), Some("dark"));
        assert_eq!(Preferences::load_from(&store), prefs);
    }

    #[test]
    fn garbage_values_fall_back_per_key() {
        let mut store = MemoryStore::new();
        store.write_pref("currency", "eur");
        store.write_pref("theme", "dark");
        store.write_pref("watchlist", "not json");

        let prefs = Preferences::load_from(&store);
        assert_eq!(prefs.currency, Currency::Usd);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.watchlist.is_empty());
    }

    #[test]
    fn duplicate_watchlist_entries_collapse_in_order() {
        let mut store = MemoryStore::new();
        store.write_pref("watchlist", r#"["ETH","BTC","ETH"]"#);
        let prefs = Preferences::load_from(&store);
        assert_eq!(prefs.watchlist, vec!["ETH".to_string(), "BTC".to_string()]);
    }
}
