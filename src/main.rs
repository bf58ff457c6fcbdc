// src/main.rs

use bevy::{log::LogPlugin, prelude::*, window::WindowPlugin, winit::{UpdateMode, WinitSettings}};
use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

mod catalog;
mod cli;
mod selection;
mod settings;
mod ui;

use catalog::CatalogPlugin;
use cli::{Cli, Commands};
use selection::SelectionPlugin;
use settings::{load_or_init_settings, BrowserConfig};
use ui::BrowserUiPlugin;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = load_or_init_settings();
    let config = BrowserConfig::resolve(&settings, &cli);

    match cli.command {
        Some(Commands::Preview { page, bulk, include, exclude }) => {
            match cli::preview::run(&config, page, bulk, &include, &exclude) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Preview failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Some(Commands::Config) => {
            cli::show_config::run(&config);
            ExitCode::SUCCESS
        }
        None => {
            run_browser(config);
            ExitCode::SUCCESS
        }
    }
}

fn run_browser(config: BrowserConfig) {
    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(config)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Artwork Picker".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn,reqwest=warn,hyper=warn"
                        .to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(SelectionPlugin)
        .add_plugins(CatalogPlugin)
        .add_plugins(BrowserUiPlugin)
        .run();
}
