use {
    crate::{
        app::LoadingState,
        config::PLOT_CONFIG,
        ui::{UI_TEXT, UiStyleExt},
    },
    eframe::egui::{Button, CentralPanel, Context, RichText},
};

/// Loading screen shown until the first snapshot lands.
/// Returns true when the user asked for another attempt.
pub(crate) fn render_bootstrap(ctx: &Context, state: &LoadingState) -> bool {
    let mut retry = false;
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(20.0);

            match &state.error {
                None => {
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(&UI_TEXT.ls_loading)
                            .italics()
                            .color(PLOT_CONFIG.color_text_neutral),
                    );
                }
                Some(err) => {
                    ui.label(RichText::new(&UI_TEXT.ls_failed).strong().color(PLOT_CONFIG.color_loss));
                    ui.add_space(5.0);
                    ui.label_subdued(err.as_str());
                    ui.label_subdued(format!("{} {}", UI_TEXT.ls_attempt, state.attempts));
                    ui.add_space(15.0);
                    retry = ui.add(Button::new(UI_TEXT.ls_retry.as_str())).clicked();
                }
            }
        });
    });
    retry
}
