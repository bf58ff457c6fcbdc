// src/ui/elements/custom_select_popup.rs

use bevy::prelude::*;
use bevy_egui::egui;

use crate::selection::events::RequestBulkSelect;
use crate::ui::elements::state::BrowserWindowState;

/// Popup asking for N; submits "select the first N rows across all pages".
/// It stays open until the count is accepted.
pub fn show_custom_select_popup(
    ctx: &egui::Context,
    state: &mut BrowserWindowState,
    bulk_writer: &mut EventWriter<RequestBulkSelect>,
) {
    if !state.show_custom_select {
        return;
    }

    let mut popup_open = state.show_custom_select;
    let mut submit = false;

    egui::Window::new("Custom Select")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 60.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.select_count_input)
                        .hint_text("Select N rows")
                        .desired_width(140.0),
                );
                if response.changed() {
                    state.custom_select_error = None;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui
                    .add_enabled(
                        !state.select_count_input.trim().is_empty(),
                        egui::Button::new("Apply"),
                    )
                    .clicked()
                {
                    submit = true;
                }
            });

            if let Some(err) = &state.custom_select_error {
                ui.colored_label(egui::Color32::RED, err);
            }
        });

    if submit {
        bulk_writer.write(RequestBulkSelect {
            input: state.select_count_input.clone(),
        });
    }

    if !popup_open {
        state.show_custom_select = false;
        state.custom_select_error = None;
    }
}
