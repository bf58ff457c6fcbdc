// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::browser::artwork_browser_ui;
use elements::state::BrowserWindowState;
use systems::{handle_bulk_select_outcome, handle_ui_feedback};

/// User-facing result of an operation, shown in the status bar.
#[derive(Event, Debug, Clone)]
pub struct OperationFeedback {
    pub message: String,
    pub is_error: bool,
}

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the paginated artworks browser.
pub struct BrowserUiPlugin;

impl Plugin for BrowserUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OperationFeedback>()
            .init_resource::<UiFeedbackState>()
            .init_resource::<BrowserWindowState>()
            .add_systems(Update, (handle_bulk_select_outcome, handle_ui_feedback))
            .add_systems(EguiContextPass, artwork_browser_ui);

        info!("BrowserUiPlugin initialized.");
    }
}
