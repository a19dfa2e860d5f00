//! Text cleanup utilities.

use std::sync::OnceLock;

use regex::Regex;

/// Cleans and normalizes extracted text content.
///
/// Collapses all whitespace runs (including newlines) to single spaces and
/// trims the ends, removes Liquid templating artifacts (`{% ... %}` and
/// `{{ ... }}`) that survive a partial site build, and unescapes the four
/// HTML entities that commonly leak into extracted text.
///
/// # Examples
///
/// ```
/// # use extract_ltx::text_utils::clean_text;
/// assert_eq!(clean_text("  Hello\n   world  "), "Hello world");
/// assert_eq!(clean_text("a &amp; b"), "a & b");
/// ```
pub fn clean_text(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    static LIQUID_TAG: OnceLock<Regex> = OnceLock::new();
    static LIQUID_VAR: OnceLock<Regex> = OnceLock::new();

    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    let liquid_tag = LIQUID_TAG.get_or_init(|| Regex::new(r"\{%.*? %\}").unwrap());
    let liquid_var = LIQUID_VAR.get_or_init(|| Regex::new(r"\{\{.*?\}\}").unwrap());

    let text = whitespace.replace_all(text.trim(), " ");
    let text = liquid_tag.replace_all(&text, "");
    let text = liquid_var.replace_all(&text, "");

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// Formats a section name as a display heading: hyphens become spaces and
/// every word is capitalized.
///
/// # Examples
///
/// ```
/// # use extract_ltx::text_utils::section_heading;
/// assert_eq!(section_heading("getting-started"), "Getting Started");
/// assert_eq!(section_heading("reference"), "Reference");
/// ```
pub fn section_heading(section: &str) -> String {
    let mut heading = String::with_capacity(section.len());
    let mut prev_alphabetic = false;

    for c in section.chars() {
        if c == '-' {
            heading.push(' ');
            prev_alphabetic = false;
        } else if c.is_alphabetic() {
            if prev_alphabetic {
                heading.extend(c.to_lowercase());
            } else {
                heading.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            heading.push(c);
            prev_alphabetic = false;
        }
    }

    heading
}
