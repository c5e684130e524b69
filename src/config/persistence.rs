//! Preference persistence configuration

/// Keys used in the preference store (browser localStorage on the web).
pub struct StorageKeys {
    /// JSON array of watched symbols
    pub watchlist: &'static str,
    pub currency: &'static str,
    pub timeframe: &'static str,
    pub theme: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub keys: StorageKeys,
    /// Path for saving/loading preferences in native builds
    pub state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    keys: StorageKeys {
        watchlist: "watchlist",
        currency: "currency",
        timeframe: "timeframe",
        theme: "theme",
    },
    state_path: ".coin_board_state.ron",
};
