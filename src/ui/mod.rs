mod asset_table;
mod detail;
mod plot_layers;
mod screens;
mod sparkline;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use asset_table::AssetTablePanel;
pub(crate) use detail::DetailPanel;
pub(crate) use plot_layers::{CandlestickLayer, LastCloseLayer, LayerContext, PlotLayer};

pub(crate) use screens::render_bootstrap;
pub(crate) use sparkline::Sparkline;

pub(crate) use styles::{UiStyleExt, apply_opacity, get_outcome_color};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{BoardEvent, PagerPanel, Panel, StatsPanel, ToolbarPanel};
pub(crate) use ui_plot_view::CandleChart;
pub(crate) use utils::setup_custom_visuals;
