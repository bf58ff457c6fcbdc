// src/catalog/plugin.rs

use bevy::prelude::*;

use super::events::{PageLoadedEvent, RequestPageLoad};
use super::handler::{
    handle_page_load_request_system, handle_page_loaded_system, request_start_page_system,
    setup_catalog_client_system,
};
use super::resources::CatalogState;
use crate::ui::systems::forward_events;

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogState>();

        app.add_event::<RequestPageLoad>()
            .add_event::<PageLoadedEvent>();

        app.add_systems(
            Startup,
            (setup_catalog_client_system, request_start_page_system).chain(),
        );

        app.add_systems(
            Update,
            (
                handle_page_load_request_system,
                forward_events::<PageLoadedEvent>,
                handle_page_loaded_system,
            )
                .chain(),
        );

        info!("CatalogPlugin initialized.");
    }
}
