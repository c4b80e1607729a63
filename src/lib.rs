//! MangaMad - source adapter for the mangamad.com manga aggregator.
//!
//! This library provides functionality for:
//! - Building listing, search, chapter list and page requests for the site
//! - Parsing the returned HTML into series, chapters and pages
//! - Resolving the site's relative upload dates into timestamps

pub mod config;
pub mod console;
pub mod dates;
pub mod error;
pub mod filters;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use console::Console;
pub use dates::{Clock, DateResolver, FixedClock, SystemClock};
pub use error::{ConfigError, SourceError};
pub use filters::{FilterList, FilterOption, SelectFilter, UriFilter};
pub use sources::{
    CatalogEntry, Chapter, MangaMad, MangasPage, Page, SeriesDetail, SeriesStatus, Source,
};
