//! HTML parsing for MangaMad listing, detail, chapter list and chapter pages.
//!
//! Every function here is pure. Missing optional fields degrade to empty
//! values; entries missing a required field are skipped.

use crate::dates::DateResolver;
use crate::sources::{CatalogEntry, Chapter, MangasPage, Page, SeriesDetail, SeriesStatus};
use crate::utils::{absolute_url, normalized_text, own_text, url_without_domain};
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Prefix of the alternative-names block appended to descriptions.
const ALT_NAME_LABEL: &str = "Alternative Name: ";

/// Reads a chapter number from a regex match.
type NumberExtractor = fn(&Captures) -> f32;

/// Chapter number patterns over the lowercased chapter name, tried in order.
/// The first pattern that matches decides the number.
static CHAPTER_NUMBER_PATTERNS: LazyLock<Vec<(Regex, NumberExtractor)>> = LazyLock::new(|| {
    vec![
        // "Vol.2 Chapter 5" sorts volumes ahead of chapters
        (
            Regex::new(r"vol.([0-9]+).*?chapter.*?([0-9]+\.?[0-9]?)").expect("Invalid volume pattern"),
            volume_chapter_number as NumberExtractor,
        ),
        // "Chapter 3.5"
        (
            Regex::new(r"chapter.*?([0-9]+\.?[0-9]?)").expect("Invalid chapter pattern"),
            plain_chapter_number,
        ),
        // "Chapter 12-1"; the plain pattern always matches first
        (
            Regex::new(r"chapter.*?([0-9]+-?[0-9]?)").expect("Invalid hyphen pattern"),
            hyphen_chapter_number,
        ),
    ]
});

/// CSS selectors used for parsing.
struct Selectors {
    /// Result card on popular and latest listings.
    listing_item: Selector,
    /// Result card on search listings (results live in the third section box).
    search_item: Selector,
    /// Pagination link that exists only when there's a further page.
    next_page: Selector,
    card_link: Selector,
    card_title: Selector,
    card_thumbnail: Selector,
    cover: Selector,
    meta_row: Selector,
    link: Selector,
    table_cell: Selector,
    description: Selector,
    alt_names: Selector,
    chapter_row: Selector,
    chapter_title: Selector,
    chapter_update: Selector,
    page_image: Selector,
}

impl Selectors {
    fn new() -> Self {
        let parse = |css: &str| Selector::parse(css).expect("Invalid selector");
        Self {
            listing_item: parse(".book-item"),
            search_item: parse("div.section.box:nth-child(3) .book-item"),
            next_page: parse(".paginator:not(.order) > a:last-child[href]"),
            card_link: parse("div.title h3 a"),
            card_title: parse("div.title"),
            card_thumbnail: parse("div.thumb a img"),
            cover: parse("div.img-cover img"),
            meta_row: parse("div.detail div.meta.box p"),
            link: parse("a"),
            table_cell: parse("td"),
            description: parse("div.section-body p.content"),
            alt_names: parse("div.detail div.name.box h2"),
            chapter_row: parse(".chapter-list li"),
            chapter_title: parse(".chapter-title"),
            chapter_update: parse(".chapter-update"),
            page_image: parse("div.chapter-image img"),
        }
    }
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

/// Which listing a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Popular,
    Latest,
    Search,
}

impl Listing {
    fn item_selector(self) -> &'static Selector {
        match self {
            Listing::Popular | Listing::Latest => &SELECTORS.listing_item,
            Listing::Search => &SELECTORS.search_item,
        }
    }
}

/// Parses a listing page into its result cards.
pub fn parse_manga_list(html: &str, base: &Url, listing: Listing) -> MangasPage {
    let doc = Html::parse_document(html);

    let entries = doc
        .select(listing.item_selector())
        .filter_map(|card| parse_manga_entry(card, base))
        .collect();
    let has_next_page = doc.select(&SELECTORS.next_page).next().is_some();

    MangasPage {
        entries,
        has_next_page,
    }
}

/// Parses a single result card. Returns `None` when the title or link is missing.
pub fn parse_manga_entry(card: ElementRef, base: &Url) -> Option<CatalogEntry> {
    let url = card
        .select(&SELECTORS.card_link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| url_without_domain(base, href));
    let title = card
        .select(&SELECTORS.card_title)
        .next()
        .map(normalized_text)
        .filter(|t| !t.is_empty());

    let (Some(url), Some(title)) = (url, title) else {
        tracing::debug!(card = %card.html(), "skipping result card without title or link");
        return None;
    };

    let thumbnail_url = card
        .select(&SELECTORS.card_thumbnail)
        .next()
        .and_then(|img| img.value().attr("data-src"))
        .map(|src| absolute_url(base, src))
        .filter(|src| !src.is_empty());

    Some(CatalogEntry {
        url,
        title,
        thumbnail_url,
    })
}

/// Parses a series detail page.
pub fn parse_manga_details(html: &str, base: &Url) -> SeriesDetail {
    let doc = Html::parse_document(html);
    let mut detail = SeriesDetail::default();

    if let Some(cover) = doc.select(&SELECTORS.cover).next() {
        detail.title = cover.value().attr("alt").unwrap_or_default().trim().to_string();
        detail.thumbnail_url = cover
            .value()
            .attr("data-src")
            .map(|src| absolute_url(base, src))
            .filter(|src| !src.is_empty());
    }

    for row in doc.select(&SELECTORS.meta_row) {
        let text = normalized_text(row);
        let (label, value) = text.split_once(':').unwrap_or((text.as_str(), ""));

        match label.trim().to_lowercase().as_str() {
            "authors" => detail.author = joined_link_texts(row),
            "genres" => detail.genre = joined_link_texts(row),
            "status" => detail.status = parse_status(row, value),
            _ => {}
        }
    }

    detail.description = doc
        .select(&SELECTORS.description)
        .next()
        .map(normalized_text)
        .unwrap_or_default();

    let alt_names: Vec<String> = doc
        .select(&SELECTORS.alt_names)
        .next()
        .map(own_text)
        .map(|text| {
            text.split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if !alt_names.is_empty() {
        let names = format!("{}{}", ALT_NAME_LABEL, alt_names.join(", "));
        detail.description = if detail.description.is_empty() {
            names
        } else {
            format!("{}\n\n{}", detail.description, names)
        };
    }

    detail
}

/// Joins the text of every link in `row`, each cut at its first comma.
fn joined_link_texts(row: ElementRef) -> String {
    row.select(&SELECTORS.link)
        .map(|a| {
            let text = normalized_text(a);
            match text.split_once(',') {
                Some((head, _)) => head.trim().to_string(),
                None => text,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads the status from the row's table cells, or from the text after the label.
fn parse_status(row: ElementRef, value: &str) -> SeriesStatus {
    let cells: Vec<String> = row.select(&SELECTORS.table_cell).map(normalized_text).collect();
    let status = if cells.is_empty() {
        value.trim().to_lowercase()
    } else {
        cells.join(" ").trim().to_lowercase()
    };

    match status.as_str() {
        "ongoing" => SeriesStatus::Ongoing,
        "completed" => SeriesStatus::Completed,
        _ => SeriesStatus::Unknown,
    }
}

/// Parses the chapter list endpoint response, sorted by chapter number.
///
/// The sort is stable, so chapters with equal numbers keep page order.
pub fn parse_chapter_list(html: &str, base: &Url, dates: &DateResolver) -> Vec<Chapter> {
    let doc = Html::parse_document(html);

    let mut chapters: Vec<Chapter> = doc
        .select(&SELECTORS.chapter_row)
        .filter_map(|row| parse_chapter(row, base, dates))
        .collect();

    chapters.sort_by(|a, b| a.chapter_number.total_cmp(&b.chapter_number));
    chapters
}

/// Parses one chapter row. Returns `None` when the name or link is missing.
pub fn parse_chapter(row: ElementRef, base: &Url, dates: &DateResolver) -> Option<Chapter> {
    let name = row
        .select(&SELECTORS.chapter_title)
        .next()
        .map(normalized_text)
        .filter(|n| !n.is_empty());
    let url = row
        .select(&SELECTORS.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| url_without_domain(base, href));

    let (Some(name), Some(url)) = (name, url) else {
        tracing::debug!(row = %row.html(), "skipping chapter row without name or link");
        return None;
    };

    let upload_timestamp = row
        .select(&SELECTORS.chapter_update)
        .next()
        .map(|el| dates.resolve(&normalized_text(el)))
        .unwrap_or(0);

    Some(Chapter {
        chapter_number: parse_chapter_number(&name),
        name,
        url,
        upload_timestamp,
    })
}

/// Derives a sortable chapter number from a chapter name, 0 when there's none.
pub fn parse_chapter_number(name: &str) -> f32 {
    let name = name.to_lowercase();

    CHAPTER_NUMBER_PATTERNS
        .iter()
        .find_map(|(pattern, extract)| pattern.captures(&name).map(|caps| extract(&caps)))
        .unwrap_or(0.0)
}

fn capture_f32(caps: &Captures, group: usize) -> Option<f32> {
    caps.get(group).and_then(|m| m.as_str().parse::<f32>().ok())
}

fn volume_chapter_number(caps: &Captures) -> f32 {
    let volume = capture_f32(caps, 1).unwrap_or(0.0);
    let chapter = capture_f32(caps, 2).unwrap_or(0.0);
    volume * 10000.0 + chapter
}

fn plain_chapter_number(caps: &Captures) -> f32 {
    capture_f32(caps, 1).unwrap_or(0.0)
}

fn hyphen_chapter_number(caps: &Captures) -> f32 {
    caps.get(1)
        .and_then(|m| m.as_str().replace('-', ".").parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Parses the images of a chapter page in reading order.
pub fn parse_page_list(html: &str, base: &Url) -> Vec<Page> {
    let doc = Html::parse_document(html);

    doc.select(&SELECTORS.page_image)
        .map(|img| absolute_url(base, img.value().attr("data-src").unwrap_or_default()))
        .enumerate()
        .map(|(index, image_url)| Page { index, image_url })
        .collect()
}
