//! Script risk classification
//!
//! Pages whose inline scripts show dynamic behavior (navigation, cookies,
//! timers, network calls) render little useful static content, so the
//! crawl skips them instead of capturing them. Matching is plain substring
//! search on raw script text, not semantic analysis; minified or obfuscated
//! code can slip through either way.

use scraper::{Html, Selector};

/// Inline-script substrings that classify a page as script-dependent
///
/// Navigation assignment, cookie access, delayed/periodic scheduling, and
/// the two network-call idioms (promise-style and callback-style).
const SCRIPT_SIGNATURES: [&str; 6] = [
    "window.location",
    "document.cookie",
    "setTimeout",
    "setInterval",
    "fetch",
    "XMLHttpRequest",
];

/// Returns true if any inline script matches a dynamic-behavior signature
///
/// Short-circuits on the first matching script element. Scripts loaded via
/// `src` have no inline text and never match.
///
/// # Arguments
///
/// * `html` - The HTML document to inspect
pub fn has_significant_script(html: &str) -> bool {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("script") {
        for element in document.select(&selector) {
            let content: String = element.text().collect();
            if SCRIPT_SIGNATURES.iter().any(|sig| content.contains(sig)) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_script(script: &str) -> String {
        format!(
            r#"<html><head><script>{}</script></head><body>Hello</body></html>"#,
            script
        )
    }

    #[test]
    fn test_no_scripts() {
        let html = r#"<html><body><p>Static page</p></body></html>"#;
        assert!(!has_significant_script(html));
    }

    #[test]
    fn test_benign_inline_script() {
        let html = page_with_script("var x = 1 + 1;");
        assert!(!has_significant_script(&html));
    }

    #[test]
    fn test_navigation_assignment() {
        let html = page_with_script("window.location = '/login';");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_cookie_access() {
        let html = page_with_script("var session = document.cookie;");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_delayed_execution() {
        let html = page_with_script("setTimeout(refresh, 5000);");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_periodic_execution() {
        let html = page_with_script("setInterval(poll, 1000);");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_promise_style_network_call() {
        let html = page_with_script("fetch('/api/data').then(render);");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_callback_style_network_call() {
        let html = page_with_script("var xhr = new XMLHttpRequest();");
        assert!(has_significant_script(&html));
    }

    #[test]
    fn test_external_script_has_no_inline_text() {
        let html =
            r#"<html><head><script src="/app.js"></script></head><body>Hi</body></html>"#;
        assert!(!has_significant_script(html));
    }

    #[test]
    fn test_signature_in_body_text_does_not_match() {
        let html = r#"<html><body><p>Use setTimeout to schedule work.</p></body></html>"#;
        assert!(!has_significant_script(html));
    }

    #[test]
    fn test_second_script_matches() {
        let html = r#"<html><head>
            <script>var a = 1;</script>
            <script>document.cookie = 'k=v';</script>
        </head><body></body></html>"#;
        assert!(has_significant_script(html));
    }
}
