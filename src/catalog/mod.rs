// src/catalog/mod.rs

// Remote artworks collection: HTTP client, wire types and page-load state.
pub mod client;
pub mod definitions;
pub mod events;
pub mod resources;
pub mod plugin;

pub(crate) mod handler;

pub use client::{ArtworkClient, CatalogError};
pub use definitions::{Artwork, ArtworkPage};
pub use events::RequestPageLoad;
pub use plugin::CatalogPlugin;
pub use resources::CatalogState;
