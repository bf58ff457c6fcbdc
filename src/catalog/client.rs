// src/catalog/client.rs

use bevy::log::debug;
use std::time::Duration;
use thiserror::Error;

use super::definitions::{ApiResponse, ArtworkPage, ARTWORK_FIELDS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Server answered with status {0}")]
    Status(u16),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Page numbers start at 1, got {0}")]
    InvalidPage(u32),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Builds the read-only page query against the artworks endpoint.
pub fn page_url(base_url: &str, page: u32, limit: u32) -> String {
    format!(
        "{}/artworks?page={}&limit={}&fields={}",
        base_url.trim_end_matches('/'),
        page,
        limit,
        ARTWORK_FIELDS
    )
}

fn decode_page(page: u32, limit: u32, body: &str) -> Result<ArtworkPage, CatalogError> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(ArtworkPage::from_response(page, limit, response))
}

/// Client for the paginated artworks collection.
#[derive(Debug, Clone)]
pub struct ArtworkClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl ArtworkClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page. `page` is 1-based.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }
        let url = page_url(&self.base_url, page, limit);
        debug!("Catalog: GET {}", url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        decode_page(page, limit, &body)
    }

    /// Blocking variant for headless tools. Must not be called from inside
    /// the Tokio runtime.
    pub fn fetch_page_blocking(&self, page: u32, limit: u32) -> Result<ArtworkPage, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }
        let url = page_url(&self.base_url, page, limit);
        debug!("Catalog: GET (blocking) {}", url);

        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }
        let body = response.text()?;
        decode_page(page, limit, &body)
    }
}
