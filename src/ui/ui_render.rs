use {
    crate::{
        App,
        ui::{
            AssetTablePanel, BoardEvent, DetailPanel, PagerPanel, Panel, StatsPanel,
            ToolbarPanel, UI_CONFIG, UI_TEXT, UiStyleExt,
        },
        utils::format_duration,
    },
    eframe::egui::{CentralPanel, Context, Id, ScrollArea, TopBottomPanel, Window},
    std::time::Duration,
};

impl App {
    pub(crate) fn render_running_state(&mut self, ctx: &Context) {
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_detail_window(ctx);

        // Keeps the "received ... ago" label current
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        let theme = self.board.prefs().theme;
        let fetching = self.is_fetching();
        let events = TopBottomPanel::top("toolbar")
            .frame(UI_CONFIG.top_panel_frame(theme))
            .show(ctx, |ui| {
                ToolbarPanel::new(
                    &mut self.search_text,
                    self.board.prefs(),
                    self.board.status(),
                    self.board.watch_only(),
                    fetching,
                )
                .render(ui)
            })
            .inner;
        self.apply_events(ctx, events);
    }

    fn render_status_panel(&self, ctx: &Context) {
        let theme = self.board.prefs().theme;
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame(theme))
            .show(ctx, |ui| {
                let Some(snapshot) = self.board.snapshot() else {
                    return;
                };
                ui.horizontal(|ui| {
                    ui.status_badge(snapshot.status);
                    ui.label_subdued(format!("{}: {}", UI_TEXT.label_source, snapshot.source));
                    if let Some(as_of) = snapshot.summary.as_of {
                        ui.separator();
                        ui.label_subdued(format!(
                            "{}: {}",
                            UI_TEXT.label_as_of,
                            as_of.format("%Y-%m-%d %H:%M UTC")
                        ));
                    }
                    if let Some(interval) = &snapshot.summary.interval {
                        ui.separator();
                        ui.label_subdued(interval.as_str());
                    }
                    ui.separator();
                    ui.label_subdued(format!(
                        "{} / {} {}",
                        self.board.visible_count(),
                        snapshot.summary.data.len(),
                        UI_TEXT.label_rows
                    ));
                    ui.separator();
                    let age_ms = snapshot.received_at.elapsed().as_millis() as i64;
                    ui.label_subdued(format!(
                        "{} {} {}",
                        UI_TEXT.label_received,
                        format_duration(age_ms),
                        UI_TEXT.label_ago
                    ));
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let prefs = self.board.prefs();
        let theme = prefs.theme;
        let currency = prefs.currency;
        let mut events: Vec<BoardEvent> = Vec::new();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame(theme))
            .show(ctx, |ui| {
                if let Some(global) = self.board.global() {
                    events.extend(
                        StatsPanel::new(global, self.board.assets().len(), theme).render(ui),
                    );
                }
                ui.add_space(8.0);

                let total = self.board.visible_count();
                ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        events.extend(
                            AssetTablePanel::new(
                                self.board.page_rows(),
                                currency,
                                self.board.sort(),
                                self.board.watch_only(),
                            )
                            .render(ui),
                        );
                        ui.add_space(6.0);
                        events.extend(
                            PagerPanel::new(
                                self.board.page(),
                                self.board.page_count(),
                                self.board.page_len(),
                                total,
                            )
                            .render(ui),
                        );
                    });
            });

        self.apply_events(ctx, events);
    }

    fn render_detail_window(&mut self, ctx: &Context) {
        let Some(asset) = self.board.detail_asset() else {
            return;
        };
        let currency = self.board.prefs().currency;
        let mut open = true;
        let mut events = Vec::new();

        Window::new(format!("{} ({})", asset.name, asset.symbol))
            .id(Id::new("asset_detail"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(640.0)
            .show(ctx, |ui| {
                events = DetailPanel::new(asset, currency).render(ui);
            });

        if !open {
            events.push(BoardEvent::CloseDetail);
        }
        self.apply_events(ctx, events);
    }
}
