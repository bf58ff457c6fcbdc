// src/selection/handler.rs

use bevy::prelude::*;

use super::events::{BulkSelectOutcome, RequestBulkSelect, RequestVisibleSelectionEdit};
use super::resources::SessionSelection;
use crate::ui::OperationFeedback;

pub(crate) fn handle_visible_selection_edit_system(
    mut edit_events: EventReader<RequestVisibleSelectionEdit>,
    mut selection: ResMut<SessionSelection>,
) {
    for event in edit_events.read() {
        debug!(
            "Selection: applying edit for page {} ({} of {} rows checked)",
            event.page,
            event.checked_row_ids.len(),
            event.page_row_ids.len()
        );
        selection
            .state
            .apply_visible_selection_edit(&event.page_row_ids, &event.checked_row_ids);
    }
}

pub(crate) fn handle_bulk_select_request_system(
    mut request_events: EventReader<RequestBulkSelect>,
    mut selection: ResMut<SessionSelection>,
    mut outcome_writer: EventWriter<BulkSelectOutcome>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in request_events.read() {
        let result = selection
            .state
            .apply_bulk_select_input(&event.input)
            .map(|count| count.get());

        match &result {
            Ok(count) => {
                info!("Selection: bulk-selected the first {} row(s)", count);
                feedback_writer.write(OperationFeedback {
                    message: format!("Selected the first {} row(s)", count),
                    is_error: false,
                });
            }
            Err(e) => {
                warn!("Selection: rejected bulk count '{}': {}", event.input, e);
                feedback_writer.write(OperationFeedback {
                    message: format!("Invalid row count: {}", e),
                    is_error: true,
                });
            }
        }
        outcome_writer.write(BulkSelectOutcome { result });
    }
}
