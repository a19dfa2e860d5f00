//! Configuration options for site extraction.

use std::path::PathBuf;

/// Default site directory produced by the documentation build.
pub const DEFAULT_SITE_DIR: &str = "_site";

/// Default base URL for absolute page addresses.
pub const DEFAULT_BASE_URL: &str = "https://docs.trustgraph.ai";

/// Path fragments that exclude a file from extraction by default.
const DEFAULT_SKIP_FRAGMENTS: [&str; 3] = ["404.html", "search.html", "assets/"];

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Root directory containing the built HTML site
    pub site_dir: PathBuf,
    /// Base URL joined with each page's relative path
    pub base_url: String,
    /// Substring fragments; any path containing one is skipped
    pub skip_fragments: Vec<String>,
    /// Optional title to use for the generated documents
    pub title: Option<String>,
    /// Optional one-line description to use for the generated documents
    pub description: Option<String>,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_fragments: DEFAULT_SKIP_FRAGMENTS.iter().map(|s| s.to_string()).collect(),
            title: None,
            description: None,
        }
    }
}

impl ExtractorOptions {
    /// Creates a new builder for ExtractorOptions.
    pub fn builder() -> ExtractorOptionsBuilder {
        ExtractorOptionsBuilder::default()
    }
}

/// Builder for ExtractorOptions.
#[derive(Debug, Clone, Default)]
pub struct ExtractorOptionsBuilder {
    site_dir: Option<PathBuf>,
    base_url: Option<String>,
    skip_fragments: Vec<String>,
    title: Option<String>,
    description: Option<String>,
}

impl ExtractorOptionsBuilder {
    /// Sets the site directory to scan.
    pub fn site_dir(mut self, site_dir: PathBuf) -> Self {
        self.site_dir = Some(site_dir);
        self
    }

    /// Sets the base URL used to build absolute page addresses.
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Adds a path fragment to skip, on top of the default skip list.
    pub fn skip_fragment(mut self, fragment: String) -> Self {
        self.skip_fragments.push(fragment);
        self
    }

    /// Adds multiple path fragments to skip.
    pub fn skip_fragments(mut self, fragments: Vec<String>) -> Self {
        self.skip_fragments.extend(fragments);
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the document description.
    pub fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Builds the ExtractorOptions, applying defaults for unset fields.
    pub fn build(self) -> ExtractorOptions {
        let defaults = ExtractorOptions::default();
        let mut skip_fragments = defaults.skip_fragments;
        skip_fragments.extend(self.skip_fragments);

        ExtractorOptions {
            site_dir: self.site_dir.unwrap_or(defaults.site_dir),
            base_url: self.base_url.unwrap_or(defaults.base_url),
            skip_fragments,
            title: self.title,
            description: self.description,
        }
    }
}
