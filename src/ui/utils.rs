use eframe::egui::{Context, Visuals};

use crate::{domain::Theme, ui::ui_config::UI_CONFIG};

/// Sets up visuals for the chosen theme
pub fn setup_custom_visuals(ctx: &Context, theme: Theme) {
    let colors = UI_CONFIG.colors(theme);
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };

    visuals.window_fill = colors.central_panel;
    visuals.panel_fill = colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = colors.label;
    visuals.widgets.inactive.fg_stroke.color = colors.label;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
