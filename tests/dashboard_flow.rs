use coin_board::Dashboard;
use coin_board::data::{BundledSummaryProvider, MemoryStore};
use coin_board::domain::{Currency, FeedStatus, Preferences, Theme, Timeframe};
use coin_board::models::{SortColumn, SortDirection};

fn loaded_board(prefs: Preferences) -> Dashboard {
    let summary = BundledSummaryProvider::default()
        .load()
        .expect("bundled snapshot");
    let mut board = Dashboard::new(prefs);
    board.apply_snapshot(summary, FeedStatus::Offline, "bundled snapshot".to_string());
    board
}

fn symbols(board: &Dashboard) -> Vec<String> {
    board
        .page_rows()
        .iter()
        .map(|r| r.asset.symbol.clone())
        .collect()
}

#[test]
fn first_page_follows_snapshot_order() {
    let board = loaded_board(Preferences::default());
    assert_eq!(board.page_count(), 1);
    let syms = symbols(&board);
    assert_eq!(syms.len(), 18);
    assert_eq!(&syms[..3], &["BTC", "ETH", "USDT"]);
}

#[test]
fn search_then_sort_then_clear() {
    let mut board = loaded_board(Preferences::default());

    board.set_search("eth");
    assert_eq!(symbols(&board)[0], "ETH");

    board.set_search("bitcon");
    assert_eq!(symbols(&board), vec!["BTC"]);

    board.clear_search();
    board.set_sort(Some((SortColumn::Price, SortDirection::Descending)));
    assert_eq!(symbols(&board)[0], "BTC");

    board.set_sort(Some((SortColumn::Price, SortDirection::Ascending)));
    assert_eq!(symbols(&board)[0], "SHIB");
}

#[test]
fn watchlist_survives_a_round_trip_through_storage() {
    let mut board = loaded_board(Preferences::default());
    board.toggle_watch("SOL");
    board.toggle_watch("BTC");
    board.set_currency(Currency::Vnd);
    board.set_timeframe(Timeframe::D7);
    board.toggle_theme();

    let prefs = board.take_dirty_prefs().expect("prefs changed");
    let mut store = MemoryStore::new();
    prefs.store_into(&mut store);

    let restored = Preferences::load_from(&store);
    assert_eq!(restored.watchlist, vec!["SOL", "BTC"]);
    assert_eq!(restored.currency, Currency::Vnd);
    assert_eq!(restored.timeframe, Timeframe::D7);
    assert_eq!(restored.theme, Theme::Dark);

    let mut board = loaded_board(restored);
    board.set_watch_only(true);
    assert_eq!(symbols(&board), vec!["BTC", "SOL"]);
}

#[test]
fn detail_follows_the_symbol() {
    let mut board = loaded_board(Preferences::default());
    board.open_detail("DOGE");
    let asset = board.detail_asset().expect("detail open");
    assert_eq!(asset.name, "Dogecoin");
    assert!(asset.supply_pct().is_none());
    assert_eq!(asset.ohlc.len(), 30);

    board.open_detail("NOPE");
    assert_eq!(board.detail_asset().map(|a| a.symbol.as_str()), Some("DOGE"));
}
