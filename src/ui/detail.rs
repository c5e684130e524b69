use {
    crate::{
        config::PLOT_CONFIG,
        domain::{Asset, Currency},
        ui::{BoardEvent, CandleChart, Panel, UI_TEXT, UiStyleExt, get_outcome_color},
        utils::{format_money, format_number, format_pct},
    },
    eframe::egui::{RichText, Ui},
};

/// Body of the asset detail window: headline figures, signals, price history.
pub struct DetailPanel<'a> {
    asset: &'a Asset,
    currency: Currency,
}

impl<'a> DetailPanel<'a> {
    pub fn new(asset: &'a Asset, currency: Currency) -> Self {
        Self { asset, currency }
    }

    fn render_figures(&self, ui: &mut Ui) {
        let a = self.asset;
        let neutral = PLOT_CONFIG.color_text_neutral;
        ui.horizontal_wrapped(|ui| {
            ui.metric(
                &UI_TEXT.detail_price,
                &format_money(self.currency, a.price_in(self.currency)),
                neutral,
            );
            ui.add_space(12.0);
            for (label, value) in [
                ("1h", a.percent_change_1h),
                ("24h", a.percent_change_24h),
                ("7d", a.percent_change_7d),
            ] {
                ui.metric(label, &format_pct(value), get_outcome_color(value));
                ui.add_space(8.0);
            }
        });
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.metric(
                &UI_TEXT.detail_market_cap,
                &format_money(Currency::Usd, a.market_cap_usd),
                neutral,
            );
            ui.add_space(12.0);
            ui.metric(
                &UI_TEXT.detail_volume,
                &format_money(Currency::Usd, a.volume_24h_usd),
                neutral,
            );
            ui.add_space(12.0);
            let supply = match a.supply_pct() {
                Some(pct) => format!(
                    "{} {} ({})",
                    format_number(a.circulating_supply),
                    a.symbol,
                    format_pct(pct)
                ),
                None => format!("{} {}", format_number(a.circulating_supply), a.symbol),
            };
            ui.metric(&UI_TEXT.detail_supply, &supply, neutral);
        });
    }

    fn render_signals(&self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.detail_signals.as_str());
        if self.asset.signals.is_empty() {
            ui.label_subdued(UI_TEXT.detail_no_signals.as_str());
            return;
        }
        ui.horizontal_wrapped(|ui| {
            for signal in &self.asset.signals {
                ui.badge(signal.as_str(), PLOT_CONFIG.color_info, PLOT_CONFIG.color_badge_bg);
            }
        });
    }

    fn render_history(&self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.detail_history.as_str());
        if self.asset.ohlc.is_empty() {
            ui.label(
                RichText::new(UI_TEXT.detail_no_history.as_str())
                    .italics()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
            return;
        }
        CandleChart::new(self.asset).show(ui);
    }
}

impl Panel for DetailPanel<'_> {
    type Event = BoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<BoardEvent> {
        self.render_figures(ui);
        ui.separator();
        self.render_signals(ui);
        ui.separator();
        self.render_history(ui);
        Vec::new()
    }
}
