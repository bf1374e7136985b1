use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText};

impl EguiApp {
    /// Collapsible row for editing and saving the service base URL.
    pub(super) fn render_service_settings(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut save_clicked = false;
        egui::CollapsingHeader::new("Prediction service").show(ui, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.service_url.text)
                        .hint_text("http://localhost:5000")
                        .desired_width(320.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Save").clicked() || submitted {
                    save_clicked = true;
                }
            });
            if let Some(error) = self.controller.ui.service_url.error.as_deref() {
                ui.label(RichText::new(error).color(palette.warning));
            }
        });
        if save_clicked {
            let _ = self.controller.save_service_url();
        }
    }
}
