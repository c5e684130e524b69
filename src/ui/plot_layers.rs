use eframe::egui::{Color32, Stroke};
use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::config::PLOT_CONFIG;
use crate::domain::{CandleType, OhlcPoint};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub candles: &'a [OhlcPoint],
}

impl LayerContext<'_> {
    pub fn last_close(&self) -> Option<f64> {
        self.candles.last().map(|c| c.c)
    }
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

/// One candle per OHLC point, x = position in the series.
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (i, candle) in ctx.candles.iter().enumerate() {
            draw_candle(plot_ui, i as f64, candle);
        }
    }
}

/// Dashed horizontal line at the most recent close.
pub struct LastCloseLayer;

impl PlotLayer for LastCloseLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(close) = ctx.last_close() {
            plot_ui.hline(
                HLine::new("Last Close", close)
                    .color(PLOT_CONFIG.color_info)
                    .width(1.0)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}

pub(crate) fn candle_color(candle: &OhlcPoint) -> Color32 {
    match candle.get_type() {
        CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    }
}

fn draw_candle(ui: &mut PlotUi, x: f64, candle: &OhlcPoint) {
    let color = candle_color(candle);

    if candle.h > candle.l {
        draw_wick_line(ui, x, candle.h, candle.l, color);
    }

    let (body_bot, body_top) = candle.body_range();
    // Doji: give it a sliver of height so it stays visible
    let body_top = if (body_top - body_bot).abs() < f64::EPSILON {
        body_bot * 1.0001 + f64::EPSILON
    } else {
        body_top
    };
    draw_body_rect(ui, x, body_top, body_bot, color);
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    // No border: thin candles smear with one
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
