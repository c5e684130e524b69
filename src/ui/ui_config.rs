use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::domain::Theme;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
    pub card_rounding: u8,
    pub card_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        label: Color32::from_rgb(200, 200, 205),
        heading: Color32::from_rgb(240, 240, 245),
        central_panel: Color32::from_rgb(18, 18, 22),
        side_panel: Color32::from_rgb(28, 28, 34),
        card: Color32::from_rgb(36, 36, 44),
    },
    light: UiColors {
        label: Color32::from_rgb(50, 50, 60),
        heading: Color32::from_rgb(15, 15, 25),
        central_panel: Color32::from_rgb(248, 248, 250),
        side_panel: Color32::from_rgb(236, 236, 240),
        card: Color32::WHITE,
    },
    card_rounding: 6,
    card_min_width: 180.0,
};

impl UiConfig {
    pub fn colors(&self, theme: Theme) -> &UiColors {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self, theme: Theme) -> Frame {
        Frame {
            fill: self.colors(theme).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self, theme: Theme) -> Frame {
        Frame {
            fill: self.colors(theme).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self, theme: Theme) -> Frame {
        Frame {
            fill: self.colors(theme).central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    /// Frame for a single stats card
    pub fn card_frame(&self, theme: Theme) -> Frame {
        Frame {
            fill: self.colors(theme).card,
            stroke: Stroke::NONE,
            corner_radius: CornerRadius::same(self.card_rounding),
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}
