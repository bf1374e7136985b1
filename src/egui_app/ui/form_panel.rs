use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use crate::form::{FieldId, parse_feature};
use eframe::egui::{self, RichText};

impl EguiApp {
    /// Render the nine inputs plus the Predict and Reset buttons.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let focus_first = std::mem::take(&mut self.controller.ui.form.focus_first_requested);
        let mut edits = Vec::new();
        let mut enter_pressed = false;

        egui::Grid::new("predictor_form_grid")
            .num_columns(3)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                for (index, field) in FieldId::ALL.into_iter().enumerate() {
                    let current = self.controller.ui.form.fields.get(field);
                    let mut value = current.to_string();
                    ui.label(RichText::new(field.label()).color(palette.text_primary));
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut value)
                            .hint_text(field.wire_key())
                            .desired_width(180.0),
                    );
                    if index == 0 && focus_first {
                        response.request_focus();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        enter_pressed = true;
                    }
                    if !value.trim().is_empty() && parse_feature(&value).is_nan() {
                        ui.label(RichText::new("not a number").color(palette.warning));
                    } else {
                        ui.label("");
                    }
                    if response.changed() {
                        edits.push((field, value));
                    }
                    ui.end_row();
                }
            });
        for (field, value) in edits {
            self.controller.update_field(field, value);
        }

        ui.add_space(12.0);
        let form = &self.controller.ui.form;
        let can_submit = form.can_submit();
        let missing = !form.loading && !form.fields.is_complete();
        let mut submit_clicked = false;
        let mut reset_clicked = false;
        ui.horizontal(|ui| {
            let label = view_model::submit_button_label(form.loading);
            let mut predict = ui.add_enabled(
                can_submit,
                egui::Button::new(label).min_size(egui::vec2(120.0, 28.0)),
            );
            if missing {
                predict = predict.on_disabled_hover_text("Fill in every field first");
            }
            if predict.clicked() {
                submit_clicked = true;
            }
            ui.add_space(8.0);
            if ui
                .add(egui::Button::new("Reset").min_size(egui::vec2(120.0, 28.0)))
                .clicked()
            {
                reset_clicked = true;
            }
            if form.loading {
                ui.add_space(8.0);
                ui.spinner();
            }
        });

        if reset_clicked {
            self.controller.reset();
        } else if submit_clicked || (enter_pressed && can_submit) {
            self.controller.submit();
        }
    }
}
