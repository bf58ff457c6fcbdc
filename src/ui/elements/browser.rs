// src/ui/elements/browser.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{CatalogState, RequestPageLoad};
use crate::selection::events::{RequestBulkSelect, RequestVisibleSelectionEdit};
use crate::selection::SessionSelection;
use crate::settings::BrowserConfig;
use crate::ui::UiFeedbackState;

use super::artworks_table::artworks_table;
use super::custom_select_popup::show_custom_select_popup;
use super::paginator::show_paginator;
use super::state::BrowserWindowState;
use super::status_bar::show_status_bar;

#[allow(clippy::too_many_arguments)]
pub fn artwork_browser_ui(
    mut contexts: EguiContexts,
    mut window_state: ResMut<BrowserWindowState>,
    catalog: Res<CatalogState>,
    selection: Res<SessionSelection>,
    config: Res<BrowserConfig>,
    ui_feedback: Res<UiFeedbackState>,
    mut page_writer: EventWriter<RequestPageLoad>,
    mut edit_writer: EventWriter<RequestVisibleSelectionEdit>,
    mut bulk_writer: EventWriter<RequestBulkSelect>,
) {
    let ctx = contexts.ctx_mut();

    show_custom_select_popup(ctx, &mut window_state, &mut bulk_writer);

    egui::TopBottomPanel::top("browser_toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Custom Select").clicked() {
                window_state.show_custom_select = !window_state.show_custom_select;
                window_state.custom_select_error = None;
            }
            ui.separator();
            show_paginator(ui, &catalog, config.page_size, &mut page_writer);
        });
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("browser_status_bar").show(ctx, |ui| {
        show_status_bar(ui, &selection.state, &catalog, &ui_feedback);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(err) = &catalog.last_error {
            ui.colored_label(egui::Color32::RED, format!("Last request failed: {}", err));
        }
        match &catalog.loaded {
            Some(page) if page.records.is_empty() => {
                ui.vertical_centered(|ui| {
                    ui.label(format!("Page {} has no artworks.", page.page));
                });
            }
            Some(page) => {
                artworks_table(ui, page, &selection.state, &mut edit_writer);
            }
            None if catalog.is_loading() => {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label("Loading artworks...");
                });
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.label("No artworks loaded.");
                });
            }
        }
    });
}
