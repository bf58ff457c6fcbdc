// src/catalog/definitions.rs

use serde::{Deserialize, Serialize};

use crate::selection::{RowId, SelectableRow};

/// Fields requested from the artworks endpoint; everything else is dropped
/// server-side.
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// One record of the artworks collection. Only `id` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: RowId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl SelectableRow for Artwork {
    fn row_id(&self) -> RowId {
        self.id
    }
}

impl Artwork {
    /// Public collection page for this artwork.
    pub fn web_url(&self) -> String {
        format!("https://www.artic.edu/artworks/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// Raw response body of `GET /artworks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<Artwork>,
}

/// A fetched page, tagged with the page number it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkPage {
    pub page: u32,
    pub page_size: u32,
    pub records: Vec<Artwork>,
    pub total: u64,
}

impl ArtworkPage {
    pub fn from_response(page: u32, page_size: u32, response: ApiResponse) -> Self {
        Self {
            page,
            page_size,
            records: response.data,
            total: response.pagination.total,
        }
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.records.iter().map(|a| a.id).collect()
    }
}

/// Number of pages needed for `total` records; never less than 1.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
