pub mod io;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use io::{load_settings_from_file, save_settings_to_file, LoadedSettings};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Persisted user settings. Fields missing from the file keep their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub page_size: u32,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub start_page: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            start_page: 1,
        }
    }
}

/// Effective configuration for this run: settings file with CLI overrides.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct BrowserConfig {
    pub page_size: u32,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub start_page: u32,
}

impl BrowserConfig {
    pub fn resolve(settings: &AppSettings, cli: &Cli) -> Self {
        Self {
            page_size: cli.page_size.unwrap_or(settings.page_size).max(1),
            api_base_url: cli
                .api_base_url
                .clone()
                .unwrap_or_else(|| settings.api_base_url.clone()),
            request_timeout_secs: settings.request_timeout_secs.max(1),
            start_page: cli.start_page.unwrap_or(settings.start_page).max(1),
        }
    }
}

/// Reads the settings file, writing the defaults out when none exists yet.
/// Any failure falls back to defaults.
pub fn load_or_init_settings() -> AppSettings {
    match load_settings_from_file::<AppSettings>() {
        Ok(LoadedSettings::Found(settings)) => settings,
        Ok(LoadedSettings::Missing(defaults)) => {
            if let Err(e) = save_settings_to_file(&defaults) {
                warn!("AppSettings: Could not write default settings: {}", e);
            }
            defaults
        }
        Err(e) => {
            error!("AppSettings: Failed to load settings: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let settings: AppSettings = serde_json::from_str(r#"{ "page_size": 25 }"#).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(settings.start_page, 1);
    }

    #[test]
    fn cli_overrides_settings() {
        let settings = AppSettings {
            page_size: 25,
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
            start_page: 4,
        };
        let cli = Cli::try_parse_from(["artwork_picker", "--page-size", "50", "--start-page", "2"]).unwrap();
        let config = BrowserConfig::resolve(&settings, &cli);

        assert_eq!(config.page_size, 50);
        assert_eq!(config.start_page, 2);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn zero_values_from_file_are_clamped() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "page_size": 0, "start_page": 0, "request_timeout_secs": 0 }"#).unwrap();
        let cli = Cli::try_parse_from(["artwork_picker"]).unwrap();
        let config = BrowserConfig::resolve(&settings, &cli);

        assert_eq!(config.page_size, 1);
        assert_eq!(config.start_page, 1);
        assert_eq!(config.request_timeout_secs, 1);
    }
}
