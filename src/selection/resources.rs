// src/selection/resources.rs

use bevy::prelude::*;

use super::state::SelectionState;

/// Session-wide selection. Created empty at startup and dropped at exit.
#[derive(Resource, Debug, Default)]
pub struct SessionSelection {
    pub state: SelectionState,
}
