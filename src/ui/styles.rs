use {
    crate::{config::PLOT_CONFIG, domain::FeedStatus, utils::format_pct},
    eframe::egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Ui},
};

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

/// Green for gains (zero included), red for losses.
pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub fn status_colors(status: FeedStatus) -> (Color32, Color32) {
    match status {
        FeedStatus::Live => (PLOT_CONFIG.color_live_fg, PLOT_CONFIG.color_live_bg),
        FeedStatus::Offline => (PLOT_CONFIG.color_offline_fg, PLOT_CONFIG.color_offline_bg),
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Rounded pill with coloured text
    fn badge(&mut self, text: impl Into<String>, fg: Color32, bg: Color32) -> Response;
    fn status_badge(&mut self, status: FeedStatus) -> Response;
    /// Signed percentage coloured by direction
    fn pct_label(&mut self, value: f64) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().size(18.0).color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(PLOT_CONFIG.color_info));
    }

    fn badge(&mut self, text: impl Into<String>, fg: Color32, bg: Color32) -> Response {
        Frame::new()
            .fill(bg)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(6, 2))
            .show(self, |ui| {
                ui.label(RichText::new(text).small().strong().color(fg));
            })
            .response
    }

    fn status_badge(&mut self, status: FeedStatus) -> Response {
        let (fg, bg) = status_colors(status);
        self.badge(status.to_string(), fg, bg)
    }

    fn pct_label(&mut self, value: f64) -> Response {
        self.label(RichText::new(format_pct(value)).color(get_outcome_color(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_change_counts_as_gain() {
        assert_eq!(get_outcome_color(0.0), PLOT_CONFIG.color_profit);
        assert_eq!(get_outcome_color(-0.01), PLOT_CONFIG.color_loss);
    }

    #[test]
    fn status_badge_colours_differ() {
        assert_ne!(status_colors(FeedStatus::Live), status_colors(FeedStatus::Offline));
    }
}
