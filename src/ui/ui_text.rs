use std::sync::LazyLock;

// Glyphs available in egui's bundled emoji fonts
pub const ICON_STAR: &str = "⭐";
pub const ICON_CLOSE: &str = "🗙";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_SUN: &str = "☀";
pub const ICON_MOON: &str = "🌙";
pub const ICON_SORT_ASC: &str = "⬆";
pub const ICON_SORT_DESC: &str = "⬇";
pub const ICON_PREV: &str = "◀";
pub const ICON_NEXT: &str = "▶";

pub struct UiText {
    pub app_title: String,

    // Toolbar
    pub search_hint: String,
    pub label_currency: String,
    pub label_timeframe: String,
    pub label_watch_only: String,
    pub button_refresh: String,
    pub tooltip_refresh: String,
    pub tooltip_theme_dark: String,
    pub tooltip_theme_light: String,

    // Stats cards
    pub stat_market_cap: String,
    pub stat_volume: String,
    pub stat_btc_dominance: String,
    pub stat_assets: String,

    // Table
    pub col_sparkline: String,
    pub table_empty: String,
    pub table_empty_watchlist: String,
    pub tooltip_watch_add: String,
    pub tooltip_watch_remove: String,
    pub tooltip_open_detail: String,
    pub label_unknown: String,

    // Pager
    pub label_rows_per_page: String,
    pub label_showing: String,
    pub label_of: String,
    pub label_page: String,

    // Status bar
    pub label_source: String,
    pub label_as_of: String,
    pub label_received: String,
    pub label_ago: String,
    pub label_rows: String,

    // Detail window
    pub detail_price: String,
    pub detail_market_cap: String,
    pub detail_volume: String,
    pub detail_supply: String,
    pub detail_signals: String,
    pub detail_no_signals: String,
    pub detail_history: String,
    pub detail_no_history: String,

    // Loading screen
    pub ls_title: String,
    pub ls_loading: String,
    pub ls_failed: String,
    pub ls_retry: String,
    pub ls_attempt: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Coin Board".to_string(),

    search_hint: format!("{} Search name or symbol", ICON_SEARCH),
    label_currency: "Currency".to_string(),
    label_timeframe: "Change".to_string(),
    label_watch_only: "Watchlist only".to_string(),
    button_refresh: format!("{} Refresh", ICON_REFRESH),
    tooltip_refresh: "Fetch a fresh market summary".to_string(),
    tooltip_theme_dark: "Switch to dark theme".to_string(),
    tooltip_theme_light: "Switch to light theme".to_string(),

    stat_market_cap: "Global Market Cap".to_string(),
    stat_volume: "24h Volume".to_string(),
    stat_btc_dominance: "BTC Dominance".to_string(),
    stat_assets: "Assets".to_string(),

    col_sparkline: "Last 7 Days".to_string(),
    table_empty: "No assets match the current search.".to_string(),
    table_empty_watchlist: "Your watchlist is empty. Star an asset to follow it.".to_string(),
    tooltip_watch_add: "Add to watchlist".to_string(),
    tooltip_watch_remove: "Remove from watchlist".to_string(),
    tooltip_open_detail: "Click for price history".to_string(),
    label_unknown: "-".to_string(),

    label_rows_per_page: "Rows per page".to_string(),
    label_showing: "Showing".to_string(),
    label_of: "of".to_string(),
    label_page: "Page".to_string(),

    label_source: "Source".to_string(),
    label_as_of: "Data as of".to_string(),
    label_received: "Received".to_string(),
    label_ago: "ago".to_string(),
    label_rows: "assets shown".to_string(),

    detail_price: "Price".to_string(),
    detail_market_cap: "Market Cap".to_string(),
    detail_volume: "Volume (24h)".to_string(),
    detail_supply: "Circulating Supply".to_string(),
    detail_signals: "Signals".to_string(),
    detail_no_signals: "No signals for this asset.".to_string(),
    detail_history: "Price History".to_string(),
    detail_no_history: "No price history available.".to_string(),

    ls_title: "Coin Board".to_string(),
    ls_loading: "Fetching market summary...".to_string(),
    ls_failed: "Could not load market data".to_string(),
    ls_retry: format!("{} Retry", ICON_REFRESH),
    ls_attempt: "Attempt".to_string(),
});
