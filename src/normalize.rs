//! Cell normalization
//!
//! Pure helpers shared by every table format: whitespace cleanup, standard
//! name canonicalization, SDK list parsing and status cell interpretation.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Node};
use serde::Serialize;

use crate::config::ScrapeConfig;

// Zero-width spaces, joiners and BOM render blank but are not `\s`
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{200B}-\x{200D}\x{2060}\x{FEFF}]+").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{2,}").unwrap());

/// Elements that start a new SDK token inside a cell
const BLOCK_ELEMENTS: &[&str] = &["p", "li", "div", "ul", "ol"];

/// Footnote markers that trail some tab labels
const TRAILING_QUALIFIERS: &[char] = &['*', '\u{2020}', '\u{2021}'];

/// Collapse every whitespace run (including line breaks, non-breaking and
/// zero-width spaces) to one space and trim both ends.
pub fn chomp_keep_single_spaces(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Canonical StandardName for raw tab label text.
///
/// Spaces and slashes become underscores, footnote markers are dropped and
/// known aliases are rewritten, so formatting drift in the source page never
/// changes the resulting name.
pub fn clean_standard_name(raw: &str, config: &ScrapeConfig) -> String {
    let chomped = chomp_keep_single_spaces(raw);
    let stripped = chomped.trim_end_matches(TRAILING_QUALIFIERS).trim_end();

    let underscored = stripped.replace([' ', '/'], "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&underscored, "_");
    let name = collapsed.trim_matches('_');

    match config.canonical_alias(name) {
        Some(canonical) => canonical.to_string(),
        None => name.to_string(),
    }
}

/// Chomped text content of a cell
pub fn cell_text(cell: ElementRef<'_>) -> String {
    chomp_keep_single_spaces(&cell.text().collect::<String>())
}

/// Parse the SDK cell into its ordered tokens.
///
/// Line breaks, `<br>` and block children delimit tokens. When no token
/// survives the split the whole cell text is used as a single token, and an
/// empty cell yields an empty list.
pub fn parse_sdk_list(cell: ElementRef<'_>) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    collect_segments(cell, &mut current, &mut segments);
    flush_segment(&mut current, &mut segments);

    let tokens = normalize_sdk_tokens(segments);
    if !tokens.is_empty() {
        return tokens;
    }

    single_sdk_token(cell).into_iter().collect()
}

/// Whole-cell fallback used when the cell has no delimited structure
pub fn single_sdk_token(cell: ElementRef<'_>) -> Option<String> {
    let text = cell_text(cell);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Chomp, drop blanks and drop repeats (first occurrence wins).
/// Applying it to its own output returns the same list.
pub fn normalize_sdk_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for token in tokens {
        let token = chomp_keep_single_spaces(token.as_ref());
        if token.is_empty() || out.contains(&token) {
            continue;
        }
        out.push(token);
    }
    out
}

fn collect_segments(node: ElementRef<'_>, current: &mut String, out: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                match el.name() {
                    "br" => flush_segment(current, out),
                    name if BLOCK_ELEMENTS.contains(&name) => {
                        flush_segment(current, out);
                        collect_segments(child_el, current, out);
                        flush_segment(current, out);
                    }
                    _ => collect_segments(child_el, current, out),
                }
            }
            _ => {}
        }
    }
}

fn flush_segment(current: &mut String, out: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    out.extend(current.split('\n').map(String::from));
    current.clear();
}

/// Interpretation of one status cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellStatus {
    pub present: bool,
    pub raw_text: String,
}

/// A status cell is present when it holds any marker other than blank space
/// or one of the configured absent placeholders. Icon-only cells count as
/// present; their `alt` text becomes the raw text.
pub fn status_of(cell: ElementRef<'_>, config: &ScrapeConfig) -> CellStatus {
    let text = cell_text(cell);

    if text.is_empty() {
        let icon = cell
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "img");
        if let Some(img) = icon {
            return CellStatus {
                present: true,
                raw_text: img.value().attr("alt").unwrap_or_default().to_string(),
            };
        }
    }

    CellStatus {
        present: !text.is_empty() && !config.is_absent_marker(&text),
        raw_text: text,
    }
}
