// src/ui/elements/mod.rs

// Top-level browser view
pub mod browser;
pub mod state;

pub mod artworks_table;
pub mod custom_select_popup;
pub mod paginator;
pub mod status_bar;
