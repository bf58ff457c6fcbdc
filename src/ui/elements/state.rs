// src/ui/elements/state.rs
use bevy::prelude::*;

/// Widget-only state of the browser window. Selection itself lives in
/// `SessionSelection`.
#[derive(Resource, Debug, Default, Clone)]
pub struct BrowserWindowState {
    pub show_custom_select: bool,
    pub select_count_input: String,
    pub custom_select_error: Option<String>,
}
