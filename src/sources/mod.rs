//! Source trait and the catalog model shared by manga sources.
//!
//! This module defines the interface a site adapter implements, along with
//! the series, chapter and page types it produces.

pub mod mangamad;

pub use mangamad::MangaMad;

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::filters::FilterList;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A series as shown in a browse grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Path of the series page, relative to the site origin.
    pub url: String,

    /// Series title.
    pub title: String,

    /// Absolute cover image URL.
    pub thumbnail_url: Option<String>,
}

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MangasPage {
    pub entries: Vec<CatalogEntry>,

    /// Whether the listing has a further page.
    pub has_next_page: bool,
}

/// Publication status of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesStatus {
    Ongoing,
    Completed,
    #[default]
    Unknown,
}

/// Full metadata of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetail {
    pub title: String,

    /// Absolute cover image URL.
    pub thumbnail_url: Option<String>,

    /// Comma-joined author names.
    pub author: String,

    /// Comma-joined genre names.
    pub genre: String,

    pub status: SeriesStatus,

    /// Synopsis, followed by alternative names when the site lists any.
    pub description: String,
}

/// A chapter of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,

    /// Path of the chapter page, relative to the site origin.
    pub url: String,

    /// Sort key derived from the name; 0 when none could be read.
    pub chapter_number: f32,

    /// Upload time in epoch milliseconds; 0 when unknown.
    pub upload_timestamp: i64,
}

/// A single image of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Position in reading order, starting at 0.
    pub index: usize,

    /// Absolute image URL.
    pub image_url: String,
}

/// Trait for manga site adapters.
///
/// Each implementation handles one site and maps its pages into the
/// catalog model above.
#[async_trait]
pub trait Source: Send + Sync {
    /// Returns the human-readable name of this source.
    fn name(&self) -> &'static str;

    /// Returns the identifier used in logs and config (lowercase, no spaces).
    fn id(&self) -> &'static str;

    /// Content language code.
    fn lang(&self) -> &'static str;

    /// Origin every relative URL of this source is resolved against.
    fn base_url(&self) -> &url::Url;

    fn supports_latest(&self) -> bool;

    /// Whether the source carries adult content.
    fn is_nsfw(&self) -> bool;

    /// Returns the filter groups search requests accept, all unselected.
    fn filter_list(&self) -> FilterList;

    /// Fetches a page of the most popular series.
    async fn popular_manga(&self, page: u32) -> Result<MangasPage, SourceError>;

    /// Fetches a page of recently updated series.
    async fn latest_updates(&self, page: u32) -> Result<MangasPage, SourceError>;

    /// Searches series by title and filters.
    async fn search_manga(
        &self,
        page: u32,
        query: &str,
        filters: &FilterList,
    ) -> Result<MangasPage, SourceError>;

    /// Fetches full metadata of the series at `manga_url`.
    async fn manga_details(&self, manga_url: &str) -> Result<SeriesDetail, SourceError>;

    /// Fetches all chapters of the series at `manga_url`, sorted by chapter number.
    async fn chapter_list(&self, manga_url: &str) -> Result<Vec<Chapter>, SourceError>;

    /// Fetches the image pages of the chapter at `chapter_url`.
    async fn page_list(&self, chapter_url: &str) -> Result<Vec<Page>, SourceError>;
}

/// Common HTTP client configuration for sources.
pub fn create_http_client(config: &SourceConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_sec))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_status_serialization() {
        assert_eq!(
            serde_json::to_string(&SeriesStatus::Ongoing).unwrap(),
            "\"ONGOING\""
        );
        assert_eq!(SeriesStatus::default(), SeriesStatus::Unknown);
    }
}
