// src/catalog/handler.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::time::Duration;

use super::client::{ArtworkClient, CatalogError};
use super::events::{PageLoadedEvent, RequestPageLoad};
use super::resources::{CatalogClient, CatalogState};
use crate::settings::BrowserConfig;
use crate::ui::systems::SendEvent;
use crate::ui::OperationFeedback;

pub(crate) fn setup_catalog_client_system(mut commands: Commands, config: Res<BrowserConfig>) {
    match ArtworkClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(client) => {
            info!("Catalog: client ready for {}", client.base_url());
            commands.insert_resource(CatalogClient(client));
        }
        Err(e) => {
            error!("Catalog: failed to build HTTP client: {}", e);
        }
    }
}

pub(crate) fn request_start_page_system(
    config: Res<BrowserConfig>,
    mut page_writer: EventWriter<RequestPageLoad>,
) {
    page_writer.write(RequestPageLoad {
        page: config.start_page,
    });
}

/// Starts a background fetch for the newest page request of this frame.
pub(crate) fn handle_page_load_request_system(
    mut request_events: EventReader<RequestPageLoad>,
    mut state: ResMut<CatalogState>,
    client: Option<Res<CatalogClient>>,
    config: Res<BrowserConfig>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    let Some(request) = request_events.read().last().copied() else {
        return;
    };
    let Some(client) = client else {
        warn!("Catalog: page {} requested but no HTTP client is available.", request.page);
        feedback_writer.write(OperationFeedback {
            message: "Cannot load artworks: HTTP client unavailable".to_string(),
            is_error: true,
        });
        return;
    };

    let page = state.clamp_page(request.page, config.page_size);
    let page_size = config.page_size;
    let generation = state.begin_request(page);
    info!("Catalog: loading page {} (generation {})", page, generation);

    let client = client.0.clone();
    let commands_entity = commands.spawn_empty().id();
    runtime.spawn_background_task(move |mut ctx| async move {
        let result = client.fetch_page(page, page_size).await;
        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx
                .world
                .commands()
                .entity(commands_entity)
                .insert(SendEvent::<PageLoadedEvent> {
                    event: PageLoadedEvent {
                        generation,
                        page,
                        result,
                    },
                });
        })
        .await;
    });
}

pub(crate) fn handle_page_loaded_system(
    mut loaded_events: EventReader<PageLoadedEvent>,
    mut state: ResMut<CatalogState>,
    mut feedback_writer: EventWriter<OperationFeedback>,
) {
    for event in loaded_events.read() {
        let failure: Option<CatalogError> = event.result.as_ref().err().cloned();
        if !state.accept(event.generation, event.result.clone()) {
            continue;
        }
        match failure {
            None => {
                let count = state.loaded.as_ref().map_or(0, |p| p.records.len());
                info!("Catalog: page {} loaded with {} record(s)", event.page, count);
            }
            Some(e) => {
                error!("Catalog: page {} failed to load: {}", event.page, e);
                feedback_writer.write(OperationFeedback {
                    message: format!("Failed to load page {}: {}", event.page, e),
                    is_error: true,
                });
            }
        }
    }
}
