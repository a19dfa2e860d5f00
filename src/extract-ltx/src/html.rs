//! HTML parsing utilities for extracting metadata and content.

use scraper::{Html, Selector};

use crate::errors::{ExtractError, Result};
use crate::text_utils::clean_text;

/// CSS selectors used on every page, compiled once at startup.
///
/// Selector compilation is the only way the HTML machinery can be
/// unavailable, so a failure here is a fatal precondition rather than a
/// per-file error.
pub struct Selectors {
    navigation: Selector,
    breadcrumb: Selector,
    breadcrumb_item: Selector,
    heading: Selector,
    title: Selector,
    chrome: Selector,
    embedded: Selector,
    main: Selector,
    main_class: Selector,
    main_id: Selector,
    body: Selector,
}

impl Selectors {
    /// Compiles the full selector set.
    ///
    /// # Errors
    ///
    /// Returns an error if any selector fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            navigation: parse_selector("nav.navigation")?,
            breadcrumb: parse_selector("ol.breadcrumb-nav")?,
            breadcrumb_item: parse_selector("li")?,
            heading: parse_selector("h1")?,
            title: parse_selector("title")?,
            chrome: parse_selector("nav, footer, header, aside")?,
            embedded: parse_selector("script, style")?,
            main: parse_selector("main")?,
            main_class: parse_selector("div.main-content")?,
            main_id: parse_selector("div#main-content")?,
            body: parse_selector("body")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::SelectorError(format!("{}: {}", css, e)))
}

/// Navigation metadata extracted from a page before content stripping.
#[derive(Debug, Default)]
pub struct NavInfo {
    /// Best-effort page title, cleaned
    pub title: Option<String>,
    /// Breadcrumb trail labels, outermost first
    pub breadcrumb: Vec<String>,
}

/// Extracts navigation metadata from the page.
///
/// Must run on the intact document tree: the breadcrumb lives inside the
/// navigation region that [`strip_non_content`] later removes.
pub fn extract_navigation_info(document: &Html, selectors: &Selectors) -> NavInfo {
    let mut nav_info = NavInfo::default();

    if let Some(nav) = document.select(&selectors.navigation).next() {
        if let Some(breadcrumb) = nav.select(&selectors.breadcrumb).next() {
            nav_info.breadcrumb = breadcrumb
                .select(&selectors.breadcrumb_item)
                .map(|item| item.text().collect::<String>().trim().to_string())
                .collect();
        }
    }

    // First top-level heading wins, document title element otherwise
    let title_elem = document
        .select(&selectors.heading)
        .next()
        .or_else(|| document.select(&selectors.title).next());

    if let Some(elem) = title_elem {
        nav_info.title = Some(clean_text(&elem.text().collect::<String>()));
    }

    nav_info
}

/// Detaches navigation, footer, header, and sidebar regions, then embedded
/// script/style blocks, from the working tree so they never leak into the
/// extracted text.
pub fn strip_non_content(document: &mut Html, selectors: &Selectors) {
    for selector in [&selectors.chrome, &selectors.embedded] {
        let ids: Vec<_> = document.select(selector).map(|element| element.id()).collect();
        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

/// Extracts the cleaned main content of the page.
///
/// Prefers the designated main content region, trying in order:
/// 1. `<main>`
/// 2. `<div class="main-content">`
/// 3. `<div id="main-content">`
/// 4. `<body>`
/// 5. the whole document
///
/// Text nodes are joined with newlines so element boundaries become line
/// breaks rather than running words together.
pub fn extract_content(document: &Html, selectors: &Selectors) -> String {
    let region = document
        .select(&selectors.main)
        .next()
        .or_else(|| document.select(&selectors.main_class).next())
        .or_else(|| document.select(&selectors.main_id).next())
        .or_else(|| document.select(&selectors.body).next())
        .unwrap_or_else(|| document.root_element());

    let content = region.text().collect::<Vec<_>>().join("\n");
    clean_text(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Selectors {
        Selectors::new().unwrap()
    }

    #[test]
    fn test_selectors_compile() {
        assert!(Selectors::new().is_ok());
    }

    #[test]
    fn test_title_prefers_h1() {
        let document = Html::parse_document(
            r#"<html><head><title>Doc Title</title></head><body><h1>Page Heading</h1></body></html>"#,
        );
        let nav_info = extract_navigation_info(&document, &selectors());
        assert_eq!(nav_info.title.as_deref(), Some("Page Heading"));
    }

    #[test]
    fn test_title_falls_back_to_title_element() {
        let document =
            Html::parse_document(r#"<html><head><title>Doc Title</title></head><body></body></html>"#);
        let nav_info = extract_navigation_info(&document, &selectors());
        assert_eq!(nav_info.title.as_deref(), Some("Doc Title"));
    }

    #[test]
    fn test_missing_title() {
        let document = Html::parse_document(r#"<html><body><p>no headings here</p></body></html>"#);
        let nav_info = extract_navigation_info(&document, &selectors());
        assert!(nav_info.title.is_none());
    }

    #[test]
    fn test_breadcrumb_extraction() {
        let document = Html::parse_document(
            r#"<html><body>
                <nav class="navigation">
                  <ol class="breadcrumb-nav">
                    <li> Home </li>
                    <li>Guides</li>
                  </ol>
                </nav>
                <main>content</main>
            </body></html>"#,
        );
        let nav_info = extract_navigation_info(&document, &selectors());
        assert_eq!(nav_info.breadcrumb, vec!["Home", "Guides"]);
    }

    #[test]
    fn test_breadcrumb_requires_navigation_region() {
        let document = Html::parse_document(
            r#"<html><body><ol class="breadcrumb-nav"><li>Home</li></ol></body></html>"#,
        );
        let nav_info = extract_navigation_info(&document, &selectors());
        assert!(nav_info.breadcrumb.is_empty());
    }

    #[test]
    fn test_strip_non_content() {
        let sels = selectors();
        let mut document = Html::parse_document(
            r#"<html><body>
                <nav class="navigation">menu items</nav>
                <header>site header</header>
                <div>the real content of this page</div>
                <aside>sidebar links</aside>
                <footer>copyright</footer>
                <script>var x = 1;</script>
            </body></html>"#,
        );
        strip_non_content(&mut document, &sels);
        let content = extract_content(&document, &sels);

        assert!(content.contains("the real content"));
        assert!(!content.contains("menu items"));
        assert!(!content.contains("site header"));
        assert!(!content.contains("sidebar links"));
        assert!(!content.contains("copyright"));
        assert!(!content.contains("var x"));
    }

    #[test]
    fn test_extract_content_prefers_main() {
        let document = Html::parse_document(
            r#"<html><body><p>outside</p><main>Hello   world</main></body></html>"#,
        );
        assert_eq!(extract_content(&document, &selectors()), "Hello world");
    }

    #[test]
    fn test_extract_content_marker_attributes() {
        let by_class = Html::parse_document(
            r#"<html><body><div class="main-content">class marker content</div></body></html>"#,
        );
        assert_eq!(extract_content(&by_class, &selectors()), "class marker content");

        let by_id = Html::parse_document(
            r#"<html><body><div id="main-content">id marker content</div></body></html>"#,
        );
        assert_eq!(extract_content(&by_id, &selectors()), "id marker content");
    }

    #[test]
    fn test_extract_content_body_fallback() {
        let document =
            Html::parse_document(r#"<html><body><p>just</p><p>body text</p></body></html>"#);
        assert_eq!(extract_content(&document, &selectors()), "just body text");
    }
}
