//! # Documentation Site Extractor
//!
//! A Rust library for converting a statically generated documentation site
//! (a tree of built HTML files) into two flat text artifacts for LLM
//! consumption: a condensed overview (`llms.txt`) and a complete content
//! dump (`llms-full.txt`).
//!
//! The pipeline is strictly sequential: discover HTML files, parse each
//! into a page record, order the records by navigational priority, and
//! render both artifacts from the ordered collection. A parse failure on
//! one file skips that file and never aborts the run.
//!
//! ## Examples
//!
//! ```no_run
//! use extract_ltx::{ExtractorOptions, SiteExtractor, render_condensed, render_full};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ExtractorOptions::builder()
//!         .site_dir("_site".into())
//!         .base_url("https://docs.trustgraph.ai".to_string())
//!         .build();
//!
//!     let extractor = SiteExtractor::new(options)?;
//!     let pages = extractor.parse_site();
//!
//!     let condensed = render_condensed(&pages, extractor.options());
//!     let full = render_full(&pages, extractor.options());
//!     println!("{} pages extracted", pages.len());
//!     Ok(())
//! }
//! ```

// Module declarations
mod config;
mod discover;
mod errors;
mod extractor;
mod html;
mod logging;
mod page;
mod render;
pub mod text_utils;

// Public API re-exports
pub use config::{DEFAULT_BASE_URL, DEFAULT_SITE_DIR, ExtractorOptions, ExtractorOptionsBuilder};
pub use errors::{ExtractError, Result};
pub use extractor::SiteExtractor;
pub use logging::setup_logging;
pub use page::{NAVIGATION_ORDER, PageRecord, page_priority, sort_pages};
pub use render::{render_condensed, render_full};

// Additional exports for advanced usage
pub use discover::find_html_files;
pub use html::{NavInfo, Selectors, extract_content, extract_navigation_info, strip_non_content};
