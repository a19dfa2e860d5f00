//! Renderers for the condensed and full text artifacts.

use std::collections::HashMap;

use crate::config::ExtractorOptions;
use crate::page::{NAVIGATION_ORDER, PageRecord};
use crate::text_utils::section_heading;

const DEFAULT_TITLE: &str = "TrustGraph Documentation";
const DEFAULT_TAGLINE: &str = "TrustGraph is a powerful graph database and analytics platform designed for trust and reputation systems.";
const FULL_DESCRIPTION: &str = "This document contains the complete TrustGraph documentation for LLM context.";

/// Maximum bullet lines under one "Sub-sections:" label.
const MAX_SUBSECTIONS: usize = 5;

/// Number of leading content segments shown as a section summary.
const SUMMARY_LINES: usize = 3;

/// Keywords that pull a line into the "Key Concepts" block.
const CONCEPT_KEYWORDS: [&str; 4] = ["concept", "fundamental", "core", "basic"];

/// Renders the condensed overview (`llms.txt`).
///
/// Groups pages by top-level section and, for each section in navigation
/// order that has a landing page, emits the landing page's title, a short
/// summary, and up to five sub-section bullets. Closes with the key-concept
/// lines pulled from the getting-started landing page.
///
/// Expects `pages` in canonical `(priority, path)` order.
pub fn render_condensed(pages: &[PageRecord], options: &ExtractorOptions) -> String {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let tagline = options.description.as_deref().unwrap_or(DEFAULT_TAGLINE);

    let mut content = vec![format!("# {}", title), String::new(), tagline.to_string(), String::new()];

    let sections = group_by_section(pages);

    content.push("## Documentation Structure".to_string());
    content.push(String::new());

    for section_name in NAVIGATION_ORDER {
        let Some(section_pages) = sections.get(section_name) else {
            continue;
        };
        // A section without a landing page gets no entry at all
        let Some(index_page) = section_pages.iter().find(|p| p.is_index()) else {
            continue;
        };

        content.push(format!("### {}", index_page.title));
        // The landing page's first lines double as the section summary
        content.extend(index_page.content.split('\n').take(SUMMARY_LINES).map(str::to_string));
        content.push(String::new());

        let sub_pages: Vec<&&PageRecord> =
            section_pages.iter().filter(|p| p.path != index_page.path).collect();
        if !sub_pages.is_empty() {
            content.push("Sub-sections:".to_string());
            for sub_page in sub_pages.iter().take(MAX_SUBSECTIONS) {
                content.push(format!("- {}", sub_page.title));
            }
            content.push(String::new());
        }
    }

    if let Some(getting_started) = pages.iter().find(|p| p.path.contains("getting-started/index.html")) {
        content.push("## Key Concepts".to_string());
        content.push(String::new());
        for line in getting_started.content.split('\n') {
            let lowered = line.to_lowercase();
            if CONCEPT_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
                content.push(line.to_string());
            }
        }
    }

    content.join("\n")
}

/// Renders the exhaustive dump (`llms-full.txt`).
///
/// Emits every page's title, URL, and full cleaned content in canonical
/// order, with a section header and rule whenever the top-level section
/// changes.
pub fn render_full(pages: &[PageRecord], options: &ExtractorOptions) -> String {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let mut content = vec![
        format!("# {} - Complete Reference", title),
        String::new(),
        FULL_DESCRIPTION.to_string(),
        String::new(),
    ];

    let mut current_section: Option<&str> = None;
    for page in pages {
        let section = page.section();
        if current_section != Some(section) {
            current_section = Some(section);
            content.push(format!("\n# {}", section_heading(section)));
            content.push("=".repeat(50));
            content.push(String::new());
        }

        content.push(format!("## {}", page.title));
        content.push(format!("URL: {}", page.url));
        content.push(String::new());
        content.push(page.content.clone());
        content.push(String::new());
        content.push("-".repeat(40));
        content.push(String::new());
    }

    content.join("\n")
}

fn group_by_section(pages: &[PageRecord]) -> HashMap<&str, Vec<&PageRecord>> {
    let mut sections: HashMap<&str, Vec<&PageRecord>> = HashMap::new();
    for page in pages {
        sections.entry(page.section()).or_default().push(page);
    }
    sections
}
