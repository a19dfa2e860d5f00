//! The extraction pipeline: discover files, parse each into a page record,
//! order the collection.

use std::path::Path;

use scraper::Html;
use url::Url;

use crate::config::ExtractorOptions;
use crate::discover::find_html_files;
use crate::errors::Result;
use crate::html::{Selectors, extract_content, extract_navigation_info, strip_non_content};
use crate::page::{PageRecord, page_priority, sort_pages};

/// Minimum cleaned-content length (in characters) for a page to be kept.
const MIN_CONTENT_LEN: usize = 50;

/// Walks a built documentation site and turns it into an ordered collection
/// of page records.
pub struct SiteExtractor {
    options: ExtractorOptions,
    selectors: Selectors,
    base: Url,
}

impl SiteExtractor {
    /// Creates an extractor, compiling the selector set and validating the
    /// base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector fails to compile or the base URL is
    /// not a valid absolute URL.
    pub fn new(options: ExtractorOptions) -> Result<Self> {
        let selectors = Selectors::new()?;
        let base = Url::parse(&options.base_url)?;
        Ok(Self { options, selectors, base })
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Parses every HTML file in the site directory into page records and
    /// sorts them into canonical order.
    ///
    /// A failure on one file never aborts the run: the error is printed
    /// with the filename and that file is skipped.
    pub fn parse_site(&self) -> Vec<PageRecord> {
        let html_files = find_html_files(&self.options.site_dir, &self.options.skip_fragments);
        tracing::debug!("Discovered {} HTML files under {}", html_files.len(), self.options.site_dir.display());

        let mut pages = Vec::new();
        for html_file in &html_files {
            match self.parse_page(html_file) {
                Ok(Some(page)) => pages.push(page),
                Ok(None) => {
                    tracing::debug!("Skipping {}: not enough content", html_file.display());
                }
                Err(e) => println!("Error parsing {}: {}", html_file.display(), e),
            }
        }

        sort_pages(&mut pages);
        pages
    }

    /// Parses one file into a record. `None` means the file was read fine
    /// but its cleaned content is too short to keep.
    fn parse_page(&self, html_file: &Path) -> Result<Option<PageRecord>> {
        let raw = std::fs::read_to_string(html_file)?;
        let mut document = Html::parse_document(&raw);

        let rel_path = html_file
            .strip_prefix(&self.options.site_dir)
            .unwrap_or(html_file)
            .to_string_lossy()
            .into_owned();

        // Metadata comes off the intact tree; stripping happens after.
        let nav_info = extract_navigation_info(&document, &self.selectors);
        strip_non_content(&mut document, &self.selectors);
        let content = extract_content(&document, &self.selectors);

        if content.trim().chars().count() < MIN_CONTENT_LEN {
            return Ok(None);
        }

        let url = self.base.join(&rel_path)?;

        Ok(Some(PageRecord {
            priority: page_priority(&rel_path),
            url: url.to_string(),
            title: nav_info.title.unwrap_or_else(|| "Untitled".to_string()),
            content,
            breadcrumb: nav_info.breadcrumb,
            path: rel_path,
        }))
    }
}
