//! MangaMad (mangamad.com) source implementation.
//!
//! Listings, series details and chapter pages are plain HTML. The chapter
//! list comes from `/api/manga/<slug>/chapters`, which also returns HTML.

pub mod filters;
pub mod parser;

use super::{Chapter, MangasPage, Page, SeriesDetail, Source};
use crate::config::SourceConfig;
use crate::dates::DateResolver;
use crate::error::SourceError;
use crate::filters::{FilterList, UriFilter};
use crate::utils::url_without_domain;
use async_trait::async_trait;
use parser::Listing;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use scraper::Html;
use url::Url;

/// MangaMad source.
pub struct MangaMad {
    client: reqwest::Client,
    base_url: Url,
    dates: DateResolver,
}

impl MangaMad {
    /// Creates the source on top of a client owned by the host.
    ///
    /// The base URL must be a site root; request paths are origin-relative.
    pub fn new(client: reqwest::Client, config: &SourceConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.path() != "/" {
            return Err(SourceError::InvalidUrl(format!(
                "{}: base URL must not have a path",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            dates: DateResolver::new(),
        })
    }

    /// Replaces the resolver used for chapter upload dates.
    pub fn with_date_resolver(mut self, dates: DateResolver) -> Self {
        self.dates = dates;
        self
    }

    /// `/popular?page=<n>`; the page is sent even for the first page.
    pub fn popular_request(&self, page: u32) -> Result<Url, SourceError> {
        let mut url = self.base_url.join("/popular")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }

    /// `/latest`, with `?page=<n>` from the second page on.
    pub fn latest_request(&self, page: u32) -> Result<Url, SourceError> {
        let mut url = self.base_url.join("/latest")?;
        if page > 1 {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    /// `/search` with the query, every filter's parameter and the page.
    pub fn search_request(
        &self,
        page: u32,
        query: &str,
        filters: &FilterList,
    ) -> Result<Url, SourceError> {
        let mut url = self.base_url.join("/search")?;
        if !query.is_empty() {
            url.query_pairs_mut().append_pair("q", query);
        }
        filters.add_to_url(&mut url);
        if page > 1 {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    /// Series page for `manga_url`.
    pub fn details_request(&self, manga_url: &str) -> Result<Url, SourceError> {
        let path = self.relative_path(manga_url)?;
        Ok(self.base_url.join(&path)?)
    }

    /// Chapter list endpoint for `manga_url`. Any query or fragment on the
    /// series URL is dropped.
    pub fn chapter_list_request(&self, manga_url: &str) -> Result<Url, SourceError> {
        let path = self.relative_path(manga_url)?;
        let series_path = path.split(['?', '#']).next().unwrap_or_default();

        let mut url = self
            .base_url
            .join(&format!("/api/manga{}/chapters", series_path))?;
        url.query_pairs_mut().append_pair("source", "detail");
        Ok(url)
    }

    /// Chapter page for `chapter_url`.
    pub fn page_list_request(&self, chapter_url: &str) -> Result<Url, SourceError> {
        let path = self.relative_path(chapter_url)?;
        Ok(self.base_url.join(&path)?)
    }

    /// Page images are only read from the fetched chapter response.
    pub fn page_list_from_document(&self, _document: &Html) -> Result<Vec<Page>, SourceError> {
        Err(SourceError::Unsupported("page list from document"))
    }

    /// Pages carry their image URL already.
    pub fn image_url_from_document(&self, _document: &Html) -> Result<String, SourceError> {
        Err(SourceError::Unsupported("image url from document"))
    }

    /// Normalizes a path or same-site URL into a path on this site.
    fn relative_path(&self, url: &str) -> Result<String, SourceError> {
        url_without_domain(&self.base_url, url)
            .filter(|path| path.starts_with('/'))
            .ok_or_else(|| SourceError::InvalidUrl(format!("not a MangaMad path: {}", url)))
    }

    /// Fetches a page and returns its body.
    async fn fetch_text(&self, url: Url, headers: HeaderMap) -> Result<String, SourceError> {
        tracing::debug!(%url, "fetching");

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn fetch_listing(&self, url: Url, listing: Listing) -> Result<MangasPage, SourceError> {
        let html = self.fetch_text(url, HeaderMap::new()).await?;
        let page = parser::parse_manga_list(&html, &self.base_url, listing);

        tracing::debug!(
            ?listing,
            entries = page.entries.len(),
            has_next_page = page.has_next_page,
            "parsed listing"
        );
        Ok(page)
    }
}

#[async_trait]
impl Source for MangaMad {
    fn name(&self) -> &'static str {
        "MangaMad"
    }

    fn id(&self) -> &'static str {
        "mangamad"
    }

    fn lang(&self) -> &'static str {
        "en"
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn supports_latest(&self) -> bool {
        true
    }

    fn is_nsfw(&self) -> bool {
        true
    }

    fn filter_list(&self) -> FilterList {
        filters::filter_list()
    }

    async fn popular_manga(&self, page: u32) -> Result<MangasPage, SourceError> {
        let url = self.popular_request(page)?;
        self.fetch_listing(url, Listing::Popular).await
    }

    async fn latest_updates(&self, page: u32) -> Result<MangasPage, SourceError> {
        let url = self.latest_request(page)?;
        self.fetch_listing(url, Listing::Latest).await
    }

    async fn search_manga(
        &self,
        page: u32,
        query: &str,
        filters: &FilterList,
    ) -> Result<MangasPage, SourceError> {
        let url = self.search_request(page, query, filters)?;
        self.fetch_listing(url, Listing::Search).await
    }

    async fn manga_details(&self, manga_url: &str) -> Result<SeriesDetail, SourceError> {
        let url = self.details_request(manga_url)?;
        let html = self.fetch_text(url, HeaderMap::new()).await?;
        Ok(parser::parse_manga_details(&html, &self.base_url))
    }

    async fn chapter_list(&self, manga_url: &str) -> Result<Vec<Chapter>, SourceError> {
        let url = self.chapter_list_request(manga_url)?;

        // Always hit the network so chapter updates show up immediately
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let html = self.fetch_text(url, headers).await?;
        let chapters = parser::parse_chapter_list(&html, &self.base_url, &self.dates);

        tracing::debug!(manga_url, chapters = chapters.len(), "parsed chapter list");
        Ok(chapters)
    }

    async fn page_list(&self, chapter_url: &str) -> Result<Vec<Page>, SourceError> {
        let url = self.page_list_request(chapter_url)?;
        let html = self.fetch_text(url, HeaderMap::new()).await?;
        Ok(parser::parse_page_list(&html, &self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MangaMad {
        MangaMad::new(reqwest::Client::new(), &SourceConfig::default()).unwrap()
    }

    #[test]
    fn test_popular_request_always_has_page() {
        let source = source();
        assert_eq!(
            source.popular_request(1).unwrap().as_str(),
            "https://mangamad.com/popular?page=1"
        );
        assert_eq!(
            source.popular_request(3).unwrap().as_str(),
            "https://mangamad.com/popular?page=3"
        );
    }

    #[test]
    fn test_latest_request_omits_first_page() {
        let source = source();
        assert_eq!(
            source.latest_request(1).unwrap().as_str(),
            "https://mangamad.com/latest"
        );
        assert_eq!(
            source.latest_request(2).unwrap().as_str(),
            "https://mangamad.com/latest?page=2"
        );
    }

    #[test]
    fn test_search_request() {
        let source = source();
        let filters = source.filter_list();

        assert_eq!(
            source.search_request(2, "", &filters).unwrap().as_str(),
            "https://mangamad.com/search?page=2"
        );
        assert_eq!(
            source.search_request(1, "", &filters).unwrap().as_str(),
            "https://mangamad.com/search"
        );
    }

    #[test]
    fn test_search_request_with_query_and_filters() {
        let source = source();
        let mut filters = source.filter_list();
        filters.get_mut("sort").unwrap().select_value("rating").unwrap();
        filters.get_mut("status").unwrap().select(2).unwrap();

        let url = source.search_request(3, "solo climber", &filters).unwrap();
        assert_eq!(
            url.query(),
            Some("q=solo+climber&sort=rating&status=completed&page=3")
        );
    }

    #[test]
    fn test_chapter_list_request() {
        let source = source();
        assert_eq!(
            source.chapter_list_request("/manga/solo-climber").unwrap().as_str(),
            "https://mangamad.com/api/manga/manga/solo-climber/chapters?source=detail"
        );
        assert_eq!(
            source
                .chapter_list_request("https://mangamad.com/manga/solo-climber")
                .unwrap()
                .as_str(),
            "https://mangamad.com/api/manga/manga/solo-climber/chapters?source=detail"
        );
    }

    #[test]
    fn test_search_request_ignores_page_zero() {
        let source = source();
        assert_eq!(
            source.search_request(0, "", &source.filter_list()).unwrap().as_str(),
            "https://mangamad.com/search"
        );
    }

    #[test]
    fn test_chapter_list_request_drops_query() {
        let source = source();
        assert_eq!(
            source.chapter_list_request("/manga/one?ref=pop").unwrap().as_str(),
            "https://mangamad.com/api/manga/manga/one/chapters?source=detail"
        );
        assert_eq!(
            source.chapter_list_request("/manga/one#top").unwrap().as_str(),
            "https://mangamad.com/api/manga/manga/one/chapters?source=detail"
        );
    }

    #[test]
    fn test_base_url_with_path_rejected() {
        let config = SourceConfig {
            base_url: "https://mirror.example.org/mm/".to_string(),
            ..SourceConfig::default()
        };
        assert!(matches!(
            MangaMad::new(reqwest::Client::new(), &config),
            Err(SourceError::InvalidUrl(_))
        ));

        let config = SourceConfig {
            base_url: "https://mirror.example.org".to_string(),
            ..SourceConfig::default()
        };
        let source = MangaMad::new(reqwest::Client::new(), &config).unwrap();
        assert_eq!(
            source.popular_request(1).unwrap().as_str(),
            "https://mirror.example.org/popular?page=1"
        );
        assert_eq!(
            source.chapter_list_request("/manga/x").unwrap().as_str(),
            "https://mirror.example.org/api/manga/manga/x/chapters?source=detail"
        );
    }

    #[test]
    fn test_foreign_urls_rejected() {
        let source = source();
        assert!(matches!(
            source.details_request("https://elsewhere.org/manga/x"),
            Err(SourceError::InvalidUrl(_))
        ));
        assert!(source.page_list_request("").is_err());
    }

    #[test]
    fn test_details_and_page_requests() {
        let source = source();
        assert_eq!(
            source.details_request("/manga/solo-climber").unwrap().as_str(),
            "https://mangamad.com/manga/solo-climber"
        );
        assert_eq!(
            source
                .page_list_request("/manga/solo-climber/chapter-1")
                .unwrap()
                .as_str(),
            "https://mangamad.com/manga/solo-climber/chapter-1"
        );
    }

    #[test]
    fn test_document_page_paths_unsupported() {
        let source = source();
        let doc = Html::parse_document("<div class=\"chapter-image\"></div>");

        assert!(matches!(
            source.page_list_from_document(&doc),
            Err(SourceError::Unsupported(_))
        ));
        assert!(matches!(
            source.image_url_from_document(&doc),
            Err(SourceError::Unsupported(_))
        ));
    }

    #[test]
    fn test_source_metadata() {
        let source = source();
        assert_eq!(source.name(), "MangaMad");
        assert_eq!(source.lang(), "en");
        assert!(source.supports_latest());
        assert_eq!(source.filter_list().len(), 3);
    }
}
