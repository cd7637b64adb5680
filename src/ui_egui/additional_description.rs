use egui::RichText;

use crate::services::toggle::AdditionalDescription;

/// Collapsible block with a shipping option's additional description.
pub fn render_additional_description(ui: &mut egui::Ui, extra: &mut AdditionalDescription) {
    let arrow = if extra.is_expanded() { "▼" } else { "▶" };
    if ui
        .selectable_label(false, format!("{arrow} Delivery details"))
        .clicked()
    {
        extra.toggle();
    }

    if let Some(text) = extra.visible_text() {
        ui.indent("additional_description", |ui| {
            ui.label(RichText::new(text).italics());
        });
    }
}
