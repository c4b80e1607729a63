//! Utility functions for common operations.

use scraper::ElementRef;
use url::Url;

/// Resolves `href` against `base` into an absolute URL.
///
/// Returns an empty string when `href` is empty or can't be resolved.
pub fn absolute_url(base: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }

    base.join(href).map(|u| u.to_string()).unwrap_or_default()
}

/// Normalizes `href` into a path relative to the origin of `base`.
///
/// Links on the same host are reduced to path, query and fragment. Links to
/// another host stay absolute.
pub fn url_without_domain(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let resolved = base.join(href).ok()?;
    if resolved.host_str() != base.host_str() {
        return Some(resolved.to_string());
    }

    let mut out = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = resolved.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    Some(out)
}

/// Collects all descendant text of an element with whitespace runs collapsed.
pub fn normalized_text(elem: ElementRef) -> String {
    collapse_whitespace(&elem.text().collect::<String>())
}

/// Collects only the element's direct text nodes, ignoring child elements.
pub fn own_text(elem: ElementRef) -> String {
    let text: String = elem
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|t| &**t)
        .collect();
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn base() -> Url {
        Url::parse("https://mangamad.com").unwrap()
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url(&base(), "/covers/one.jpg"),
            "https://mangamad.com/covers/one.jpg"
        );
        assert_eq!(
            absolute_url(&base(), "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(absolute_url(&base(), "  "), "");
    }

    #[test]
    fn test_url_without_domain() {
        assert_eq!(
            url_without_domain(&base(), "https://mangamad.com/manga/one?ref=home").as_deref(),
            Some("/manga/one?ref=home")
        );
        assert_eq!(
            url_without_domain(&base(), "/manga/two").as_deref(),
            Some("/manga/two")
        );
        assert_eq!(
            url_without_domain(&base(), "https://elsewhere.org/x").as_deref(),
            Some("https://elsewhere.org/x")
        );
        assert_eq!(url_without_domain(&base(), ""), None);
    }

    #[test]
    fn test_own_text_skips_children() {
        let doc = Html::parse_fragment("<h2> First;  Second <small>not me</small> </h2>");
        let selector = Selector::parse("h2").unwrap();
        let h2 = doc.select(&selector).next().unwrap();

        assert_eq!(own_text(h2), "First; Second");
        assert_eq!(normalized_text(h2), "First; Second not me");
    }
}
