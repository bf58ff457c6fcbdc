// src/selection/plugin.rs

use bevy::prelude::*;

use super::events::{BulkSelectOutcome, RequestBulkSelect, RequestVisibleSelectionEdit};
use super::handler::{handle_bulk_select_request_system, handle_visible_selection_edit_system};
use super::resources::SessionSelection;

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionSelection>();

        app.add_event::<RequestVisibleSelectionEdit>()
            .add_event::<RequestBulkSelect>()
            .add_event::<BulkSelectOutcome>();

        // Page edits apply before bulk commands received in the same frame.
        app.add_systems(
            Update,
            (
                handle_visible_selection_edit_system,
                handle_bulk_select_request_system,
            )
                .chain(),
        );

        info!("SelectionPlugin initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::state::SelectionError;
    use crate::ui::OperationFeedback;
    use std::collections::HashSet;

    fn selection_app() -> App {
        let mut app = App::new();
        app.add_event::<OperationFeedback>();
        app.add_plugins(SelectionPlugin);
        app
    }

    fn outcomes(app: &App) -> Vec<BulkSelectOutcome> {
        app.world()
            .resource::<Events<BulkSelectOutcome>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    fn feedback(app: &App) -> Vec<OperationFeedback> {
        app.world()
            .resource::<Events<OperationFeedback>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    #[test]
    fn bulk_command_wins_over_page_edit_in_same_frame() {
        let mut app = selection_app();
        app.world_mut().send_event(RequestBulkSelect {
            input: "3".to_string(),
        });
        app.world_mut().send_event(RequestVisibleSelectionEdit {
            page: 1,
            page_row_ids: vec![1, 2],
            checked_row_ids: HashSet::from([1]),
        });
        app.update();

        let state = &app.world().resource::<SessionSelection>().state;
        assert!(state.included().is_empty());
        assert!(state.excluded().is_empty());
        assert_eq!(state.bulk_count().map(|n| n.get()), Some(3));
        assert!(state.resolve(2, 2));
    }

    #[test]
    fn accepted_bulk_count_reports_outcome_and_feedback() {
        let mut app = selection_app();
        app.world_mut().send_event(RequestBulkSelect {
            input: " 15 ".to_string(),
        });
        app.update();

        let results: Vec<_> = outcomes(&app).into_iter().map(|o| o.result).collect();
        assert_eq!(results, vec![Ok(15)]);
        let messages = feedback(&app);
        assert_eq!(messages.len(), 1);
        assert!(!messages[0].is_error);
    }

    #[test]
    fn rejected_bulk_count_reports_error_and_keeps_state() {
        let mut app = selection_app();
        app.world_mut().send_event(RequestVisibleSelectionEdit {
            page: 1,
            page_row_ids: vec![4, 5],
            checked_row_ids: HashSet::from([5]),
        });
        app.update();
        app.world_mut().send_event(RequestBulkSelect {
            input: "0".to_string(),
        });
        app.update();

        let results: Vec<_> = outcomes(&app).into_iter().map(|o| o.result).collect();
        assert_eq!(results, vec![Err(SelectionError::NonPositiveCount(0))]);
        let messages = feedback(&app);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_error);

        let state = &app.world().resource::<SessionSelection>().state;
        assert_eq!(state.included(), &HashSet::from([5]));
        assert_eq!(state.bulk_count(), None);
    }
}
