// src/ui/systems.rs
use bevy::prelude::*;
use std::any;

use crate::selection::events::BulkSelectOutcome;
use crate::ui::{elements::state::BrowserWindowState, OperationFeedback, UiFeedbackState};

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<OperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prefer the first success, otherwise the last error
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Closes the custom-select popup once a bulk count has been accepted.
pub fn handle_bulk_select_outcome(
    mut outcome_events: EventReader<BulkSelectOutcome>,
    mut window_state: ResMut<BrowserWindowState>,
) {
    for event in outcome_events.read() {
        match &event.result {
            Ok(_) => {
                window_state.show_custom_select = false;
                window_state.select_count_input.clear();
                window_state.custom_select_error = None;
            }
            Err(e) => {
                window_state.custom_select_error = Some(e.to_string());
            }
        }
    }
}

/// Carries an event produced off the main thread into the ECS.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>().split("::").last().unwrap_or("UnknownEvent").to_string();
    }

    let mut count = 0;
    for (entity, send_event_component) in query.iter() {
        count += 1;
        debug!("Forwarding event type '{}' #{}: {:?}", *event_type_name, count, send_event_component.event);
        writer.write(send_event_component.event.clone());
        commands.entity(entity).despawn();
    }

    if count > 0 {
        debug!("Forwarded {} instance(s) of event type '{}'.", count, *event_type_name);
    }
}
