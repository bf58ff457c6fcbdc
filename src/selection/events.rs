// src/selection/events.rs

use bevy::prelude::*;
use std::collections::HashSet;

use super::state::{RowId, SelectionError};

/// The table reports the checked rows of the page it is showing.
#[derive(Event, Debug, Clone)]
pub struct RequestVisibleSelectionEdit {
    /// Page the ids belong to; only used for logging.
    pub page: u32,
    /// Every row id on the page, in display order.
    pub page_row_ids: Vec<RowId>,
    /// The subset of `page_row_ids` now checked.
    pub checked_row_ids: HashSet<RowId>,
}

/// Raw text submitted from the "Select N rows" field.
#[derive(Event, Debug, Clone)]
pub struct RequestBulkSelect {
    pub input: String,
}

/// Result of a [`RequestBulkSelect`]; `Ok` carries the applied count.
#[derive(Event, Debug, Clone)]
pub struct BulkSelectOutcome {
    pub result: Result<u64, SelectionError>,
}
