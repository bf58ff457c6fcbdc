// src/cli/preview.rs
use std::collections::HashSet;
use std::time::Duration;

use crate::catalog::{ArtworkClient, ArtworkPage, CatalogError};
use crate::selection::{absolute_position, RowId, SelectionState};
use crate::settings::BrowserConfig;

/// Applies `--include` / `--exclude` to the page as one checkbox edit.
/// Ids that are not on the page are ignored.
pub fn apply_overrides(
    state: &mut SelectionState,
    page: &ArtworkPage,
    include: &[RowId],
    exclude: &[RowId],
) {
    if include.is_empty() && exclude.is_empty() {
        return;
    }
    let page_ids = page.row_ids();
    let mut checked = state.visible_selection_ids(&page.records, page.page, page.page_size);
    checked.extend(include.iter().copied().filter(|id| page_ids.contains(id)));
    let excluded: HashSet<RowId> = exclude.iter().copied().collect();
    checked.retain(|id| !excluded.contains(id));
    state.apply_visible_selection_edit(&page_ids, &checked);
}

pub fn render_lines(page: &ArtworkPage, state: &SelectionState) -> Vec<String> {
    let checked = state.visible_selection_ids(&page.records, page.page, page.page_size);
    page.records
        .iter()
        .enumerate()
        .map(|(offset, artwork)| {
            let marker = if checked.contains(&artwork.id) { "[x]" } else { "[ ]" };
            format!(
                "{} {:>7} {:>9}  {}",
                marker,
                absolute_position(page.page, page.page_size, offset),
                artwork.id,
                artwork.title.as_deref().unwrap_or("(untitled)")
            )
        })
        .collect()
}

pub fn run(
    config: &BrowserConfig,
    page_number: u32,
    bulk: Option<i64>,
    include: &[RowId],
    exclude: &[RowId],
) -> Result<(), CatalogError> {
    let client = ArtworkClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    println!(
        "Fetching page {} ({} rows per page) from {}\n",
        page_number,
        config.page_size,
        client.base_url()
    );
    let page = client.fetch_page_blocking(page_number, config.page_size)?;

    let mut state = SelectionState::new();
    if let Some(count) = bulk {
        if let Err(e) = state.apply_bulk_select(count) {
            eprintln!("Ignoring --bulk: {}", e);
        }
    }
    apply_overrides(&mut state, &page, include, exclude);

    println!("{:<3} {:>7} {:>9}  {}", "Sel", "Pos", "Id", "Title");
    println!("{}", "-".repeat(80));
    for line in render_lines(&page, &state) {
        println!("{}", line);
    }
    println!(
        "\n{} of {} row(s) on this page selected; {} record(s) in total. {}",
        state.visible_selection(&page.records, page.page, page.page_size).len(),
        page.records.len(),
        page.total,
        state.summary()
    );
    Ok(())
}
