// src/catalog/events.rs

use bevy::prelude::*;

use super::client::CatalogError;
use super::definitions::ArtworkPage;

/// Ask for a page to be fetched and shown. `page` is 1-based.
#[derive(Event, Debug, Clone, Copy)]
pub struct RequestPageLoad {
    pub page: u32,
}

/// Completion of a background page fetch.
#[derive(Event, Debug, Clone)]
pub struct PageLoadedEvent {
    /// Matches the generation handed out when the request was issued.
    pub generation: u64,
    pub page: u32,
    pub result: Result<ArtworkPage, CatalogError>,
}
