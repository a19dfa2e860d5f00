//! Page records and their canonical ordering.

/// Top-level documentation sections in navigation order.
pub const NAVIGATION_ORDER: [&str; 8] = [
    "getting-started",
    "overview",
    "deployment",
    "guides",
    "reference",
    "examples",
    "advanced",
    "community",
];

/// Priority for pages outside every known section.
const UNMAPPED_PRIORITY: u32 = 999;

/// Structured representation of one parsed HTML document.
///
/// Immutable after creation; the collection of records is sorted once into
/// canonical order and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// Relative file location within the site directory
    pub path: String,
    /// Absolute address of the page
    pub url: String,
    /// Best-effort page heading
    pub title: String,
    /// Cleaned plain-text body
    pub content: String,
    /// Ordering key derived from the path
    pub priority: u32,
    /// Breadcrumb trail labels, outermost first (may be empty)
    pub breadcrumb: Vec<String>,
}

impl PageRecord {
    /// Top-level path segment, used to group pages into sections.
    pub fn section(&self) -> &str {
        self.path.split('/').next().unwrap_or("")
    }

    /// True for a section's landing page.
    pub fn is_index(&self) -> bool {
        self.path.contains("index.html")
    }
}

/// Determines a page's sort priority from its relative path.
///
/// Landing pages sort first, then pages inside known sections in
/// navigation order, then everything else.
pub fn page_priority(path: &str) -> u32 {
    if path.contains("index.html") {
        return 0;
    }

    let components: Vec<&str> = path.split('/').collect();
    for (i, section) in NAVIGATION_ORDER.iter().enumerate() {
        if components.contains(section) {
            return i as u32 + 1;
        }
    }

    UNMAPPED_PRIORITY
}

/// Sorts records into canonical iteration order: `(priority, path)`
/// ascending. Both renderers consume this order.
pub fn sort_pages(pages: &mut [PageRecord]) {
    pages.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.path.cmp(&b.path)));
}
