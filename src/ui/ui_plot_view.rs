use eframe::egui::Ui;
use egui_plot::{AxisHints, GridMark, HPlacement, Plot};

use crate::config::PLOT_CONFIG;
use crate::domain::{Asset, OhlcPoint};
use crate::ui::{CandlestickLayer, LastCloseLayer, LayerContext, PlotLayer};
use crate::utils::{TimeUtils, epoch_ms_to_date_string, format_price};

/// Label for an x grid mark: the candle's date when the mark sits on a
/// candle, nothing otherwise.
pub(crate) fn date_label(timestamps: &[i64], mark: f64) -> String {
    let idx = mark.round();
    if (mark - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    timestamps
        .get(idx as usize)
        .map(|&t| epoch_ms_to_date_string(t, TimeUtils::SHORT_DATE_FORMAT))
        .unwrap_or_default()
}

fn create_time_axis(candles: &[OhlcPoint]) -> AxisHints<'static> {
    let timestamps: Vec<i64> = candles.iter().map(|c| c.t).collect();
    AxisHints::new_x().formatter(move |mark: GridMark, _range| date_label(&timestamps, mark.value))
}

fn create_y_axis(symbol: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(symbol.to_string())
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Right)
}

/// Candlestick chart of an asset's OHLC history.
pub struct CandleChart<'a> {
    asset: &'a Asset,
    layers: Vec<Box<dyn PlotLayer>>,
}

impl<'a> CandleChart<'a> {
    pub fn new(asset: &'a Asset) -> Self {
        Self {
            asset,
            layers: vec![Box::new(CandlestickLayer), Box::new(LastCloseLayer)],
        }
    }

    pub fn show(&self, ui: &mut Ui) {
        let candles = self.asset.ohlc.as_slice();
        let ctx = LayerContext { candles };

        let mut plot = Plot::new(("candles", &self.asset.symbol))
            .height(PLOT_CONFIG.candle_plot_height)
            .custom_x_axes(vec![create_time_axis(candles)])
            .custom_y_axes(vec![create_y_axis(&self.asset.symbol)])
            .label_formatter(|_, _| String::new())
            .allow_double_click_reset(true)
            .allow_scroll(false);
        // Wicks must stay inside the auto bounds
        if let Some((lo, hi)) = OhlcPoint::price_range(candles) {
            plot = plot.include_y(lo).include_y(hi);
        }

        plot.show(ui, |plot_ui| {
            for layer in &self.layers {
                layer.render(plot_ui, &ctx);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn marks_on_candles_get_dates() {
        let ts = [1_718_841_600_000, 1_718_841_600_000 + DAY_MS];
        assert_eq!(date_label(&ts, 0.0), "Jun 20");
        assert_eq!(date_label(&ts, 1.0), "Jun 21");
    }

    #[test]
    fn marks_between_or_outside_candles_are_blank() {
        let ts = [1_718_841_600_000];
        assert_eq!(date_label(&ts, 0.5), "");
        assert_eq!(date_label(&ts, -1.0), "");
        assert_eq!(date_label(&ts, 3.0), "");
    }
}
