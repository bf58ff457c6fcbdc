// src/ui/elements/paginator.rs

use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::{CatalogState, RequestPageLoad};

pub fn show_paginator(
    ui: &mut egui::Ui,
    catalog: &CatalogState,
    page_size: u32,
    page_writer: &mut EventWriter<RequestPageLoad>,
) {
    let current = catalog.current_page();
    let page_count = catalog.page_count(page_size);
    let at_last = page_count.is_some_and(|count| current >= count);
    let mut target: Option<u32> = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, egui::Button::new("<<")).clicked() {
            target = Some(1);
        }
        if ui.add_enabled(current > 1, egui::Button::new("<")).clicked() {
            target = Some(current - 1);
        }

        match page_count {
            Some(count) => ui.label(format!("Page {} of {}", current, count)),
            None => ui.label(format!("Page {}", current)),
        };

        if ui.add_enabled(!at_last, egui::Button::new(">")).clicked() {
            target = Some(current + 1);
        }
        if let Some(count) = page_count {
            if ui.add_enabled(!at_last, egui::Button::new(">>")).clicked() {
                target = Some(count);
            }
        }

        if let Some(total) = catalog.total_records() {
            ui.separator();
            ui.label(format!("{} records", total));
        }
        if catalog.is_loading() {
            ui.spinner();
        }
    });

    if let Some(page) = target {
        debug!("Paginator: navigating from page {} to {}", current, page);
        page_writer.write(RequestPageLoad { page });
    }
}
