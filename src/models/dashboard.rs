use crate::config::{DF, TABLE};
use crate::domain::{
    Asset, Currency, FeedStatus, GlobalStats, MarketSummary, Preferences, Theme, Timeframe,
};
use crate::models::{AssetRow, SortColumn, SortDirection};
use crate::search::{FuzzyIndex, SearchHit};
use crate::utils::AppInstant;

/// One fetch worth of data. Never patched, only replaced.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub summary: MarketSummary,
    pub status: FeedStatus,
    /// Provider name the data came from
    pub source: String,
    pub received_at: AppInstant,
}

/// All client state behind the board: the current snapshot, the search
/// index built from it, the user's preferences and the table view settings.
///
/// The table, the index and the detail panel only ever read from
/// `snapshot`, and `apply_snapshot` swaps all of them in one call.
pub struct Dashboard {
    snapshot: Option<Snapshot>,
    index: FuzzyIndex,
    prefs: Preferences,
    prefs_dirty: bool,

    query: String,
    // None = no active query
    hits: Option<Vec<SearchHit>>,
    sort: Option<(SortColumn, SortDirection)>,
    watch_only: bool,

    page: usize,
    page_len: usize,

    // Symbol rather than index: survives a refresh that reorders rows.
    detail: Option<String>,
}

impl Dashboard {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            snapshot: None,
            index: FuzzyIndex::default(),
            prefs,
            prefs_dirty: false,
            query: String::new(),
            hits: None,
            sort: None,
            watch_only: false,
            page: 0,
            page_len: TABLE.default_page_len,
            detail: None,
        }
    }

    // --- SNAPSHOT ---

    pub fn apply_snapshot(&mut self, summary: MarketSummary, status: FeedStatus, source: String) {
        self.index = FuzzyIndex::new(&summary.data);
        self.hits = Self::run_search(&self.index, &self.query);

        if let Some(symbol) = &self.detail {
            if summary.find(symbol).is_none() {
                if DF.log_selection {
                    log::info!("Closing detail for {}: not in the new snapshot", symbol);
                }
                self.detail = None;
            }
        }

        self.snapshot = Some(Snapshot {
            summary,
            status,
            source,
            received_at: AppInstant::now(),
        });
        self.clamp_page();
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn assets(&self) -> &[Asset] {
        self.snapshot
            .as_ref()
            .map(|s| s.summary.data.as_slice())
            .unwrap_or_default()
    }

    pub fn global(&self) -> Option<&GlobalStats> {
        self.snapshot.as_ref().map(|s| &s.summary.global)
    }

    pub fn status(&self) -> Option<FeedStatus> {
        self.snapshot.as_ref().map(|s| s.status)
    }

    // --- PREFERENCES ---

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Preferences changed since the last call, if any.
    pub fn take_dirty_prefs(&mut self) -> Option<Preferences> {
        if self.prefs_dirty {
            self.prefs_dirty = false;
            Some(self.prefs.clone())
        } else {
            None
        }
    }

    pub fn set_currency(&mut self, currency: Currency) {
        if self.prefs.currency != currency {
            self.prefs.currency = currency;
            self.prefs_dirty = true;
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.prefs.timeframe != timeframe {
            self.prefs.timeframe = timeframe;
            self.prefs_dirty = true;
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.theme = self.prefs.theme.toggle();
        self.prefs_dirty = true;
        self.prefs.theme
    }

    /// Star or unstar a symbol. Returns true when it is now watched.
    pub fn toggle_watch(&mut self, symbol: &str) -> bool {
        let watched = self.prefs.toggle_watch(symbol);
        self.prefs_dirty = true;
        if self.watch_only {
            self.clamp_page();
        }
        watched
    }

    #[inline]
    pub fn is_watched(&self, symbol: &str) -> bool {
        self.prefs.is_watched(symbol)
    }

    // --- SEARCH / FILTER ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.hits = Self::run_search(&self.index, &self.query);
        self.page = 0;
        if DF.log_search {
            log::info!(
                "Search {:?}: {} hits",
                self.query,
                self.hits.as_ref().map_or(self.assets().len(), Vec::len)
            );
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn is_searching(&self) -> bool {
        self.hits.is_some()
    }

    fn run_search(index: &FuzzyIndex, query: &str) -> Option<Vec<SearchHit>> {
        if query.trim().is_empty() {
            None
        } else {
            Some(index.search(query))
        }
    }

    pub fn watch_only(&self) -> bool {
        self.watch_only
    }

    pub fn set_watch_only(&mut self, on: bool) {
        if self.watch_only != on {
            self.watch_only = on;
            self.page = 0;
        }
    }

    // --- SORT ---

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    /// Ascending, then descending, then back to unsorted.
    pub fn cycle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((c, SortDirection::Ascending)) if c == column => {
                Some((column, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn set_sort(&mut self, sort: Option<(SortColumn, SortDirection)>) {
        self.sort = sort;
    }

    // --- VIEW ---

    /// Snapshot positions of the rows to show, in display order.
    ///
    /// Unsorted means snapshot order, or best-match order while searching.
    pub fn visible_indices(&self) -> Vec<usize> {
        let assets = self.assets();
        let base: Vec<usize> = match &self.hits {
            Some(hits) => hits.iter().map(|h| h.index).collect(),
            None => (0..assets.len()).collect(),
        };

        let mut rows: Vec<usize> = base
            .into_iter()
            .filter(|&i| !self.watch_only || self.prefs.is_watched(&assets[i].symbol))
            .collect();

        if let Some((column, direction)) = self.sort {
            let currency = self.prefs.currency;
            // sort_by is stable, so ties keep the order above
            rows.sort_by(|&a, &b| direction.apply(column.compare(&assets[a], &assets[b], currency)));
        }
        rows
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices().len()
    }

    pub fn row(&self, index: usize) -> Option<AssetRow<'_>> {
        let asset = self.assets().get(index)?;
        Some(AssetRow {
            index,
            asset,
            price: asset.price_in(self.prefs.currency),
            trend: asset.change_over(self.prefs.timeframe),
            watched: self.prefs.is_watched(&asset.symbol),
            supply_pct: asset.supply_pct(),
        })
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<AssetRow<'_>> {
        self.visible_indices()
            .into_iter()
            .skip(self.page * self.page_len)
            .take(self.page_len)
            .filter_map(|i| self.row(i))
            .collect()
    }

    // --- PAGING ---

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_len(&self) -> usize {
        self.page_len
    }

    pub fn page_count(&self) -> usize {
        self.visible_count().div_ceil(self.page_len).max(1)
    }

    pub fn set_page_len(&mut self, len: usize) {
        let len = len.max(1);
        if self.page_len != len {
            self.page_len = len;
            self.page = 0;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page > last {
            self.page = last;
        }
    }

    // --- DETAIL ---

    pub fn open_detail(&mut self, symbol: &str) {
        if self.assets().iter().any(|a| a.symbol == symbol) {
            if DF.log_selection {
                log::info!("Opening detail for {}", symbol);
            }
            self.detail = Some(symbol.to_string());
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail_asset(&self) -> Option<&Asset> {
        let symbol = self.detail.as_deref()?;
        self.assets().iter().find(|a| a.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(rank: u32, symbol: &str, name: &str, usd: f64, vnd: f64) -> Asset {
        Asset {
            rank,
            symbol: symbol.into(),
            name: name.into(),
            price_usd: usd,
            price_vnd: vnd,
            percent_change_1h: rank as f64 * 0.1,
            percent_change_24h: -(rank as f64),
            percent_change_7d: 2.0,
            market_cap_usd: 1000.0 / rank as f64,
            volume_24h_usd: 10.0,
            circulating_supply: 50.0,
            total_supply: if rank % 2 == 0 { Some(100.0) } else { None },
            sparkline: vec![1.0, 2.0],
            ohlc: vec![],
            signals: vec![],
        }
    }

    fn board_with(n: u32) -> Dashboard {
        let data = (1..=n)
            .map(|r| asset(r, &format!("C{}", r), &format!("Coin {}", r), r as f64, 1.0 / r as f64))
            .collect();
        let mut board = Dashboard::new(Preferences::default());
        board.apply_snapshot(
            MarketSummary {
                data,
                ..Default::default()
            },
            FeedStatus::Live,
            "test".into(),
        );
        board
    }

    #[test]
    fn unsorted_view_keeps_snapshot_order() {
        let board = board_with(5);
        assert_eq!(board.visible_indices(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut board = board_with(3);
        board.cycle_sort(SortColumn::Price);
        assert_eq!(board.visible_indices(), vec![0, 1, 2]);
        board.cycle_sort(SortColumn::Price);
        assert_eq!(board.visible_indices(), vec![2, 1, 0]);
        board.cycle_sort(SortColumn::Price);
        assert_eq!(board.sort(), None);
        assert_eq!(board.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn price_sort_follows_currency() {
        let mut board = board_with(3);
        board.set_sort(Some((SortColumn::Price, SortDirection::Ascending)));
        assert_eq!(board.visible_indices(), vec![0, 1, 2]);
        board.set_currency(Currency::Vnd);
        // vnd prices run the other way in this fixture
        assert_eq!(board.visible_indices(), vec![2, 1, 0]);
    }

    #[test]
    fn currency_changes_prices_not_order() {
        let mut board = board_with(4);
        let before: Vec<usize> = board.page_rows().iter().map(|r| r.index).collect();
        let usd: Vec<f64> = board.page_rows().iter().map(|r| r.price).collect();

        board.set_currency(Currency::Vnd);
        let after: Vec<usize> = board.page_rows().iter().map(|r| r.index).collect();
        let vnd: Vec<f64> = board.page_rows().iter().map(|r| r.price).collect();

        assert_eq!(before, after);
        assert_ne!(usd, vnd);
        assert_eq!(board.take_dirty_prefs().map(|p| p.currency), Some(Currency::Vnd));
        assert!(board.take_dirty_prefs().is_none());
    }

    #[test]
    fn paging_splits_and_clamps() {
        let mut board = board_with(45);
        assert_eq!(board.page_len(), 20);
        assert_eq!(board.page_count(), 3);
        assert_eq!(board.page_rows().len(), 20);

        board.set_page(2);
        assert_eq!(board.page_rows().len(), 5);
        board.next_page();
        assert_eq!(board.page(), 2);

        board.set_page_len(50);
        assert_eq!(board.page(), 0);
        assert_eq!(board.page_count(), 1);
        assert_eq!(board.page_rows().len(), 45);
    }

    #[test]
    fn search_resets_page_and_clearing_restores_everything() {
        let mut board = board_with(45);
        board.set_page(1);
        board.set_search("C44");
        assert_eq!(board.page(), 0);
        assert_eq!(board.visible_indices().first(), Some(&43));

        board.clear_search();
        assert!(!board.is_searching());
        assert_eq!(board.visible_indices(), (0..45).collect::<Vec<_>>());
    }

    #[test]
    fn watch_only_filters_to_starred_rows() {
        let mut board = board_with(5);
        board.toggle_watch("C4");
        board.toggle_watch("C2");
        board.set_watch_only(true);
        assert_eq!(board.visible_indices(), vec![1, 3]);

        board.toggle_watch("C2");
        assert_eq!(board.visible_indices(), vec![3]);
    }

    #[test]
    fn supply_sort_puts_unknown_last_when_descending() {
        let mut board = board_with(4);
        board.set_sort(Some((SortColumn::Supply, SortDirection::Descending)));
        // ranks 2 and 4 have a total supply, ties keep snapshot order
        assert_eq!(board.visible_indices(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn detail_survives_refresh_only_if_symbol_remains() {
        let mut board = board_with(3);
        board.open_detail("C2");
        assert_eq!(board.detail_asset().map(|a| a.rank), Some(2));

        board.open_detail("NOPE");
        assert_eq!(board.detail_asset().map(|a| a.rank), Some(2));

        let shrunk = MarketSummary {
            data: vec![asset(1, "C1", "Coin 1", 1.0, 1.0)],
            ..Default::default()
        };
        board.apply_snapshot(shrunk, FeedStatus::Offline, "test".into());
        assert!(board.detail_asset().is_none());
        assert_eq!(board.status(), Some(FeedStatus::Offline));
    }

    #[test]
    fn refresh_reruns_the_active_search_on_new_data() {
        let mut board = board_with(3);
        board.set_search("C3");
        assert_eq!(board.visible_indices().first(), Some(&2));

        let fresh = MarketSummary {
            data: vec![
                asset(1, "C3", "Coin 3", 3.0, 3.0),
                asset(2, "ZZ", "Zed", 1.0, 1.0),
            ],
            ..Default::default()
        };
        board.apply_snapshot(fresh, FeedStatus::Live, "test".into());
        assert_eq!(board.visible_indices(), vec![0]);
    }
}
