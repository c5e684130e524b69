use {
    crate::{
        config::{PLOT_CONFIG, TABLE},
        domain::{Currency, FeedStatus, GlobalStats, Preferences, Theme, Timeframe},
        models::SortColumn,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt,
            ui_text::{ICON_CLOSE, ICON_MOON, ICON_NEXT, ICON_PREV, ICON_SUN},
        },
        utils::{format_money, format_pct},
    },
    eframe::egui::{Align, Button, ComboBox, Layout, RichText, TextEdit, Ui},
    strum::IntoEnumIterator,
};

/// Everything a panel can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    Search(String),
    SetCurrency(Currency),
    SetTimeframe(Timeframe),
    ToggleTheme,
    Refresh,
    SetWatchOnly(bool),
    Sort(SortColumn),
    ToggleWatch(String),
    OpenDetail(String),
    CloseDetail,
    Page(usize),
    PageLen(usize),
}

pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Top toolbar: title, feed badge, search, currency, timeframe, filters.
pub struct ToolbarPanel<'a> {
    search_text: &'a mut String,
    prefs: &'a Preferences,
    status: Option<FeedStatus>,
    watch_only: bool,
    fetching: bool,
}

impl<'a> ToolbarPanel<'a> {
    pub fn new(
        search_text: &'a mut String,
        prefs: &'a Preferences,
        status: Option<FeedStatus>,
        watch_only: bool,
        fetching: bool,
    ) -> Self {
        Self {
            search_text,
            prefs,
            status,
            watch_only,
            fetching,
        }
    }
}

impl Panel for ToolbarPanel<'_> {
    type Event = BoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.heading(RichText::new(&UI_TEXT.app_title).strong());
            if let Some(status) = self.status {
                ui.status_badge(status);
            }
            ui.separator();

            let response = ui.add(
                TextEdit::singleline(&mut *self.search_text)
                    .hint_text(UI_TEXT.search_hint.as_str())
                    .desired_width(220.0),
            );
            if response.changed() {
                events.push(BoardEvent::Search(self.search_text.clone()));
            }
            if !self.search_text.is_empty() && ui.small_button(ICON_CLOSE).clicked() {
                self.search_text.clear();
                events.push(BoardEvent::Search(String::new()));
            }
            ui.separator();

            ui.label_subdued(UI_TEXT.label_currency.as_str());
            let mut currency = self.prefs.currency;
            ComboBox::from_id_salt("currency_select")
                .selected_text(currency.label())
                .width(70.0)
                .show_ui(ui, |ui| {
                    for c in Currency::iter() {
                        ui.selectable_value(&mut currency, c, c.label());
                    }
                });
            if currency != self.prefs.currency {
                events.push(BoardEvent::SetCurrency(currency));
            }
            ui.separator();

            ui.label_subdued(UI_TEXT.label_timeframe.as_str());
            for tf in Timeframe::iter() {
                if ui
                    .selectable_label(self.prefs.timeframe == tf, tf.as_ref())
                    .clicked()
                    && self.prefs.timeframe != tf
                {
                    events.push(BoardEvent::SetTimeframe(tf));
                }
            }
            ui.separator();

            let mut watch_only = self.watch_only;
            if ui
                .checkbox(&mut watch_only, UI_TEXT.label_watch_only.as_str())
                .changed()
            {
                events.push(BoardEvent::SetWatchOnly(watch_only));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (icon, tip) = match self.prefs.theme {
                    Theme::Light => (ICON_MOON, &UI_TEXT.tooltip_theme_dark),
                    Theme::Dark => (ICON_SUN, &UI_TEXT.tooltip_theme_light),
                };
                if ui
                    .add(Button::new(icon).frame(false))
                    .on_hover_text(tip.as_str())
                    .clicked()
                {
                    events.push(BoardEvent::ToggleTheme);
                }

                if ui
                    .add_enabled(!self.fetching, Button::new(UI_TEXT.button_refresh.as_str()))
                    .on_hover_text(UI_TEXT.tooltip_refresh.as_str())
                    .clicked()
                {
                    events.push(BoardEvent::Refresh);
                }
                if self.fetching {
                    ui.spinner();
                }
            });
        });

        events
    }
}

/// Row of global market cards above the table.
pub struct StatsPanel<'a> {
    global: &'a GlobalStats,
    asset_count: usize,
    theme: Theme,
}

impl<'a> StatsPanel<'a> {
    pub fn new(global: &'a GlobalStats, asset_count: usize, theme: Theme) -> Self {
        Self {
            global,
            asset_count,
            theme,
        }
    }

    fn card(&self, ui: &mut Ui, label: &str, value: &str) {
        UI_CONFIG.card_frame(self.theme).show(ui, |ui| {
            ui.set_min_width(UI_CONFIG.card_min_width);
            ui.metric(label, value, UI_CONFIG.colors(self.theme).heading);
        });
    }
}

impl Panel for StatsPanel<'_> {
    type Event = BoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<BoardEvent> {
        ui.horizontal_wrapped(|ui| {
            // Aggregates are always reported in USD
            self.card(
                ui,
                &UI_TEXT.stat_market_cap,
                &format_money(Currency::Usd, self.global.market_cap_usd),
            );
            self.card(
                ui,
                &UI_TEXT.stat_volume,
                &format_money(Currency::Usd, self.global.volume_24h_usd),
            );
            self.card(
                ui,
                &UI_TEXT.stat_btc_dominance,
                &format_pct(self.global.btc_dominance),
            );
            self.card(ui, &UI_TEXT.stat_assets, &self.asset_count.to_string());
        });
        Vec::new()
    }
}

/// "Showing a-b of n", page buttons and the page length selector.
pub struct PagerPanel {
    page: usize,
    page_count: usize,
    page_len: usize,
    total: usize,
}

impl PagerPanel {
    pub fn new(page: usize, page_count: usize, page_len: usize, total: usize) -> Self {
        Self {
            page,
            page_count,
            page_len,
            total,
        }
    }

    /// 1-based inclusive range of the rows on the current page.
    fn shown_range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = self.page * self.page_len + 1;
        let last = ((self.page + 1) * self.page_len).min(self.total);
        (first, last)
    }
}

impl Panel for PagerPanel {
    type Event = BoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            let (first, last) = self.shown_range();
            ui.label_subdued(format!(
                "{} {}-{} {} {}",
                UI_TEXT.label_showing, first, last, UI_TEXT.label_of, self.total
            ));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut page_len = self.page_len;
                ComboBox::from_id_salt("page_len_select")
                    .selected_text(page_len.to_string())
                    .width(50.0)
                    .show_ui(ui, |ui| {
                        for &len in TABLE.page_lengths {
                            ui.selectable_value(&mut page_len, len, len.to_string());
                        }
                    });
                if page_len != self.page_len {
                    events.push(BoardEvent::PageLen(page_len));
                }
                ui.label_subdued(UI_TEXT.label_rows_per_page.as_str());
                ui.separator();

                let has_next = self.page + 1 < self.page_count;
                if ui.add_enabled(has_next, Button::new(ICON_NEXT)).clicked() {
                    events.push(BoardEvent::Page(self.page + 1));
                }
                ui.label(
                    RichText::new(format!(
                        "{} {} / {}",
                        UI_TEXT.label_page,
                        self.page + 1,
                        self.page_count
                    ))
                    .color(PLOT_CONFIG.color_text_neutral),
                );
                if ui.add_enabled(self.page > 0, Button::new(ICON_PREV)).clicked() {
                    events.push(BoardEvent::Page(self.page - 1));
                }
            });
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_range_covers_partial_last_page() {
        let pager = PagerPanel::new(1, 2, 20, 28);
        assert_eq!(pager.shown_range(), (21, 28));
    }

    #[test]
    fn pager_range_empty_table() {
        let pager = PagerPanel::new(0, 1, 20, 0);
        assert_eq!(pager.shown_range(), (0, 0));
    }
}
