// src/catalog/resources.rs

use bevy::prelude::*;
use chrono::{DateTime, Local};

use super::client::{ArtworkClient, CatalogError};
use super::definitions::{total_pages, ArtworkPage};

#[derive(Resource, Debug, Clone)]
pub struct CatalogClient(pub ArtworkClient);

/// What the table is currently showing and what is on its way.
#[derive(Resource, Debug, Default)]
pub struct CatalogState {
    /// Last page that arrived. Its records and page number always travel
    /// together so positions are computed against the right page.
    pub loaded: Option<ArtworkPage>,
    /// Page the user navigated to most recently.
    pub requested_page: u32,
    pub pending_generation: Option<u64>,
    next_generation: u64,
    pub last_error: Option<CatalogError>,
    pub last_loaded_at: Option<DateTime<Local>>,
}

impl CatalogState {
    /// Registers a new fetch and returns its generation. Any fetch still in
    /// flight is superseded.
    pub fn begin_request(&mut self, page: u32) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.requested_page = page;
        self.pending_generation = Some(generation);
        generation
    }

    /// Applies a finished fetch. Returns `false` when the response belongs
    /// to a superseded request and was dropped.
    pub fn accept(&mut self, generation: u64, result: Result<ArtworkPage, CatalogError>) -> bool {
        if self.pending_generation != Some(generation) {
            debug!(
                "Catalog: dropping stale response (generation {}, pending {:?})",
                generation, self.pending_generation
            );
            return false;
        }
        self.pending_generation = None;
        match result {
            Ok(page) => {
                self.loaded = Some(page);
                self.last_error = None;
                self.last_loaded_at = Some(Local::now());
            }
            Err(e) => {
                self.last_error = Some(e);
                if let Some(page) = &self.loaded {
                    self.requested_page = page.page;
                }
            }
        }
        true
    }

    /// Page the paginator counts from: the page in flight while loading,
    /// otherwise the page whose rows are on screen.
    pub fn current_page(&self) -> u32 {
        if self.is_loading() {
            return self.requested_page.max(1);
        }
        self.loaded
            .as_ref()
            .map_or(self.requested_page, |p| p.page)
            .max(1)
    }

    pub fn is_loading(&self) -> bool {
        self.pending_generation.is_some()
    }

    pub fn total_records(&self) -> Option<u64> {
        self.loaded.as_ref().map(|p| p.total)
    }

    /// Page count based on the last known total, if any page has loaded.
    pub fn page_count(&self, page_size: u32) -> Option<u32> {
        self.total_records().map(|total| total_pages(total, page_size))
    }

    /// Clamps `page` into `1..=page_count` (upper bound only once known).
    pub fn clamp_page(&self, page: u32, page_size: u32) -> u32 {
        let page = page.max(1);
        match self.page_count(page_size) {
            Some(count) => page.min(count),
            None => page,
        }
    }
}
