//! Link and content extraction
//!
//! Both extractors parse the document with scraper. Link extraction walks
//! every anchor carrying an href; content extraction concatenates the text
//! nodes under body.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the resolved outbound links of a page
///
/// Every `a[href]` element is considered. An href whose raw string contains
/// `#` anywhere is dropped wholesale (not fragment-stripped), so
/// `/page#section` and `page?x=1#y` both disappear entirely. Survivors are
/// resolved against `base`; hrefs that fail to resolve are skipped. The
/// result is deduplicated in first-seen order. No scheme or origin
/// filtering is applied.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base` - The address the document was fetched from
///
/// # Returns
///
/// Deduplicated absolute link targets in document order
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if href.contains('#') {
                    continue;
                }

                if let Ok(resolved) = base.join(href) {
                    let resolved = resolved.to_string();
                    if seen.insert(resolved.clone()) {
                        links.push(resolved);
                    }
                }
            }
        }
    }

    links
}

/// Extracts the normalized visible text of a page body
///
/// Concatenates every text node under `body` — including inline script and
/// style text, which the parser treats as ordinary text nodes — then trims
/// and collapses whitespace.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            let raw: String = body.text().collect();
            return collapse_whitespace(&raw);
        }
    }

    String::new()
}

/// Trims and collapses every whitespace run to a single space
///
/// Idempotent: collapsing already-collapsed text is a no-op.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
