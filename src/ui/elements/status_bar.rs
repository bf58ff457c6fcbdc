// src/ui/elements/status_bar.rs

use bevy_egui::egui;

use crate::catalog::CatalogState;
use crate::selection::SelectionState;
use crate::ui::UiFeedbackState;

pub fn show_status_bar(
    ui: &mut egui::Ui,
    selection: &SelectionState,
    catalog: &CatalogState,
    ui_feedback: &UiFeedbackState,
) {
    ui.horizontal(|ui| {
        ui.label(selection.summary());
        if let Some(loaded_at) = &catalog.last_loaded_at {
            ui.separator();
            ui.label(format!("Updated {}", loaded_at.format("%H:%M:%S")));
        }
        if !ui_feedback.last_message.is_empty() {
            ui.separator();
            let color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.colored_label(color, &ui_feedback.last_message);
        }
    });
}
