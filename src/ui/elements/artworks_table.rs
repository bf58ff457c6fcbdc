// src/ui/elements/artworks_table.rs

use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};
use std::collections::HashSet;

use crate::catalog::{Artwork, ArtworkPage};
use crate::selection::events::RequestVisibleSelectionEdit;
use crate::selection::{RowId, SelectionState};

const COLUMN_TITLES: [&str; 6] = [
    "TITLE",
    "PLACE OF ORIGIN",
    "ARTIST",
    "INSCRIPTIONS",
    "START DATE",
    "END DATE",
];

fn text_or_placeholder(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => "N/A",
    }
}

fn year_or_placeholder(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |y| y.to_string())
}

/// Checked set after the header checkbox is toggled.
pub(crate) fn header_toggle(page: &ArtworkPage, select_all: bool) -> HashSet<RowId> {
    if select_all {
        page.records.iter().map(|a| a.id).collect()
    } else {
        HashSet::new()
    }
}

pub(crate) fn page_edit(page: &ArtworkPage, checked: HashSet<RowId>) -> RequestVisibleSelectionEdit {
    RequestVisibleSelectionEdit {
        page: page.page,
        page_row_ids: page.row_ids(),
        checked_row_ids: checked,
    }
}

fn artwork_row_cells(row: &mut egui_extras::TableRow<'_, '_>, artwork: &Artwork) {
    row.col(|ui| {
        let title = text_or_placeholder(&artwork.title);
        let url = artwork.web_url();
        if ui.link(title).on_hover_text(url.as_str()).clicked() {
            if let Err(e) = open::that(&url) {
                warn!("Failed to open {} in browser: {}", url, e);
            }
        }
    });
    row.col(|ui| {
        ui.add(egui::Label::new(text_or_placeholder(&artwork.place_of_origin)).truncate());
    });
    row.col(|ui| {
        ui.add(egui::Label::new(text_or_placeholder(&artwork.artist_display)).truncate());
    });
    row.col(|ui| {
        ui.add(egui::Label::new(text_or_placeholder(&artwork.inscriptions)).truncate());
    });
    row.col(|ui| {
        ui.label(year_or_placeholder(artwork.date_start));
    });
    row.col(|ui| {
        ui.label(year_or_placeholder(artwork.date_end));
    });
}

/// Renders one page with checkboxes pre-checked from the session selection
/// and reports the page's new checked set whenever a box changes.
pub fn artworks_table(
    ui: &mut egui::Ui,
    page: &ArtworkPage,
    selection: &SelectionState,
    edit_writer: &mut EventWriter<RequestVisibleSelectionEdit>,
) {
    let mut checked = selection.visible_selection_ids(&page.records, page.page, page.page_size);
    let mut changed = false;

    let row_count = page.records.len();
    let all_checked = row_count > 0 && checked.len() == row_count;
    let any_checked = !checked.is_empty();
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(28.0))
        .column(Column::initial(260.0).at_least(80.0).clip(true))
        .columns(Column::initial(160.0).at_least(60.0).clip(true), 3)
        .columns(Column::initial(90.0).at_least(60.0), 2)
        .min_scrolled_height(0.0)
        .header(24.0, |mut header| {
            header.col(|ui| {
                let mut select_all = all_checked;
                let response = ui.add(
                    egui::Checkbox::without_text(&mut select_all)
                        .indeterminate(any_checked && !all_checked),
                );
                if response.changed() {
                    checked = header_toggle(page, select_all);
                    changed = true;
                }
            });
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, row_count, |mut row| {
                let Some(artwork) = page.records.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    let mut is_checked = checked.contains(&artwork.id);
                    if ui.checkbox(&mut is_checked, "").changed() {
                        if is_checked {
                            checked.insert(artwork.id);
                        } else {
                            checked.remove(&artwork.id);
                        }
                        changed = true;
                    }
                });
                artwork_row_cells(&mut row, artwork);
            });
        });

    if changed {
        edit_writer.write(page_edit(page, checked));
    }
}
