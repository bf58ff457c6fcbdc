// src/selection/mod.rs

// Pure selection engine; no I/O in this module tree.
pub mod state;
pub mod events;
pub mod resources;
pub mod plugin;

pub(crate) mod handler;

pub use plugin::SelectionPlugin;
pub use resources::SessionSelection;
pub use state::{absolute_position, RowId, SelectableRow, SelectionState};
