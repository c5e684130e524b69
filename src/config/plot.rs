//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64, // 0.0 to 1.0 (relative to time step)
    pub candle_wick_width: f32, // Pixels
    pub candle_plot_height: f32,

    // --- SPARKLINES ---
    pub sparkline_up_color: Color32,
    pub sparkline_down_color: Color32,
    pub sparkline_fill_opacity: f32,
    pub sparkline_stroke_width: f32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_star_on: Color32,
    pub color_star_off: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // --- STATUS BADGES ---
    pub color_live_bg: Color32,
    pub color_live_fg: Color32,
    pub color_offline_bg: Color32,
    pub color_offline_fg: Color32,

    // UI WIDGET STYLES
    pub color_badge_bg: Color32,
    pub color_bar_track: Color32,
    pub color_bar_fill: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.7,
    candle_wick_width: 1.0,
    candle_plot_height: 280.0,

    sparkline_up_color: Color32::from_rgb(34, 197, 94),
    sparkline_down_color: Color32::from_rgb(220, 38, 38),
    sparkline_fill_opacity: 0.3,
    sparkline_stroke_width: 1.5,

    color_profit: Color32::from_rgb(22, 163, 74),
    color_loss: Color32::from_rgb(220, 38, 38),
    color_info: Color32::from_rgb(59, 130, 246),
    color_warning: Color32::from_rgb(255, 215, 0),
    color_star_on: Color32::from_rgb(250, 204, 21),
    color_star_off: Color32::from_gray(156),

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_live_bg: Color32::from_rgb(220, 252, 231),
    color_live_fg: Color32::from_rgb(21, 128, 61),
    color_offline_bg: Color32::from_rgb(254, 226, 226),
    color_offline_fg: Color32::from_rgb(185, 28, 28),

    color_badge_bg: Color32::from_gray(200),
    color_bar_track: Color32::from_gray(200),
    color_bar_fill: Color32::from_rgb(59, 130, 246),
};
