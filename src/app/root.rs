use {
    anyhow::{Result, anyhow},
    eframe::{
        Frame, Storage,
        egui::{Context, Key},
    },
    std::{
        sync::mpsc::{self, Receiver, TryRecvError},
        time::Duration,
    },
};

use crate::{
    Cli,
    app::AppState,
    config::DF,
    data::{FetchOutcome, default_providers, fetch_market_summary},
    domain::{Preferences, Theme},
    models::Dashboard,
    ui::{BoardEvent, render_bootstrap, setup_custom_visuals},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

pub struct App {
    pub(crate) board: Dashboard,
    /// Contents of the search box. The board only sees committed queries.
    pub(crate) search_text: String,
    state: AppState,
    args: Cli,
    fetch_rx: Option<Receiver<Result<FetchOutcome>>>,
    /// When the latest fetch started. Failed refreshes count too.
    last_fetch_at: Option<AppInstant>,
    applied_theme: Option<Theme>,
}

/// Whether a snapshot fetched `since` ago should be replaced.
pub(crate) fn refresh_due(since: Duration, interval: Duration) -> bool {
    since >= interval
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let prefs = match cc.storage {
            Some(storage) => Preferences::load_from(storage),
            None => Preferences::default(),
        };

        let mut app = Self {
            board: Dashboard::new(prefs),
            search_text: String::new(),
            state: AppState::default(),
            args,
            fetch_rx: None,
            last_fetch_at: None,
            applied_theme: None,
        };
        app.spawn_fetch(&cc.egui_ctx);
        app
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.fetch_rx.is_some()
    }

    /// Start loading a fresh summary in the background.
    /// Ignored while a previous fetch is still running.
    pub(crate) fn spawn_fetch(&mut self, ctx: &Context) {
        if self.is_fetching() {
            return;
        }
        if let AppState::Loading(state) = &mut self.state {
            state.attempts += 1;
            state.error = None;
        }

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        self.last_fetch_at = Some(AppInstant::now());
        let args = self.args.clone();
        let repaint = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            thread::spawn(move || {
                let result = match Runtime::new() {
                    Ok(rt) => rt.block_on(async move {
                        fetch_market_summary(&default_providers(&args)).await
                    }),
                    Err(e) => Err(anyhow!("Failed to create runtime: {}", e)),
                };
                let _ = tx.send(result);
                repaint.request_repaint();
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_market_summary(&default_providers(&args)).await;
                let _ = tx.send(result);
                repaint.request_repaint();
            });
        }
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(anyhow!("Fetch worker exited without a result")),
        };
        self.fetch_rx = None;
        self.on_fetch_result(result);
    }

    fn on_fetch_result(&mut self, result: Result<FetchOutcome>) {
        match result {
            Ok(outcome) => {
                if DF.log_fetch {
                    log::info!(
                        "Showing {} assets from {} [{}]",
                        outcome.summary.data.len(),
                        outcome.source,
                        outcome.status
                    );
                }
                self.board
                    .apply_snapshot(outcome.summary, outcome.status, outcome.source);
                self.state = AppState::Running;
            }
            Err(e) => {
                log::error!("Market summary unavailable: {:#}", e);
                // Once running, the previous snapshot stays on screen.
                if let AppState::Loading(state) = &mut self.state {
                    state.error = Some(format!("{:#}", e));
                }
            }
        }
    }

    /// Periodic refresh while the board is up.
    fn auto_refresh(&mut self, ctx: &Context) {
        let Some(started) = self.last_fetch_at else {
            return;
        };
        if refresh_due(started.elapsed(), self.args.refresh_interval()) {
            if DF.log_fetch {
                log::info!("Auto refresh after {:?}", self.args.refresh_interval());
            }
            self.spawn_fetch(ctx);
        }
    }

    pub(crate) fn apply_events(&mut self, ctx: &Context, events: Vec<BoardEvent>) {
        for event in events {
            #[cfg(debug_assertions)]
            if DF.log_selection {
                log::info!("UI event: {:?}", event);
            }
            match event {
                BoardEvent::Search(query) => self.board.set_search(query),
                BoardEvent::SetCurrency(currency) => self.board.set_currency(currency),
                BoardEvent::SetTimeframe(timeframe) => self.board.set_timeframe(timeframe),
                BoardEvent::ToggleTheme => {
                    self.board.toggle_theme();
                }
                BoardEvent::Refresh => self.spawn_fetch(ctx),
                BoardEvent::SetWatchOnly(on) => self.board.set_watch_only(on),
                BoardEvent::Sort(column) => self.board.cycle_sort(column),
                BoardEvent::ToggleWatch(symbol) => {
                    self.board.toggle_watch(&symbol);
                }
                BoardEvent::OpenDetail(symbol) => self.board.open_detail(&symbol),
                BoardEvent::CloseDetail => self.board.close_detail(),
                BoardEvent::Page(page) => self.board.set_page(page),
                BoardEvent::PageLen(len) => self.board.set_page_len(len),
            }
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // Typing in the search box
            return;
        }

        let mut events = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                events.push(BoardEvent::CloseDetail);
            }
            if i.key_pressed(Key::F5) {
                events.push(BoardEvent::Refresh);
            }
            if i.key_pressed(Key::ArrowRight) {
                events.push(BoardEvent::Page(self.board.page() + 1));
            }
            if i.key_pressed(Key::ArrowLeft) && self.board.page() > 0 {
                events.push(BoardEvent::Page(self.board.page() - 1));
            }
        });
        self.apply_events(ctx, events);
    }

    fn sync_theme(&mut self, ctx: &Context) {
        let theme = self.board.prefs().theme;
        if self.applied_theme != Some(theme) {
            setup_custom_visuals(ctx, theme);
            self.applied_theme = Some(theme);
        }
    }

    /// Write changed preferences straight away so a closed tab loses nothing.
    fn flush_prefs(&mut self, frame: &mut Frame) {
        let Some(prefs) = self.board.take_dirty_prefs() else {
            return;
        };
        if let Some(storage) = frame.storage_mut() {
            prefs.store_into(storage);
            storage.flush();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let frame_start = AppInstant::now();

        self.sync_theme(ctx);
        self.poll_fetch();

        let retry = match &self.state {
            AppState::Loading(state) => render_bootstrap(ctx, state),
            AppState::Running => false,
        };
        if retry {
            self.spawn_fetch(ctx);
        }
        if matches!(self.state, AppState::Running) {
            self.auto_refresh(ctx);
            self.handle_global_shortcuts(ctx);
            self.render_running_state(ctx);
        }

        self.flush_prefs(frame);

        if DF.log_performance {
            let elapsed = frame_start.elapsed().as_micros();
            if elapsed > DF.slow_frame_micros {
                log::warn!("Slow frame: {}µs", elapsed);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_prefs {
            log::info!("💾 SAVE [App]: {:?}", self.board.prefs());
        }
        self.board.prefs().store_into(storage);
    }
}
