//! ATX heading parsing.

use crate::parser::exclusions::{find_exclusion_ranges, is_line_in_fenced_code};
use regex::Regex;
use std::sync::LazyLock;

/// A heading found in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The heading text (without the `#` prefix).
    pub text: String,

    /// The heading level (1-6).
    pub level: u8,

    /// Line number where this heading appears (1-indexed).
    pub line: usize,
}

// ATX-style heading: # Heading, ## Heading, etc.
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*$").unwrap());

/// Parse all headings from content, skipping fenced code blocks.
pub fn parse_headings(content: &str) -> Vec<Heading> {
    let ranges = find_exclusion_ranges(content);
    let mut headings = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        if is_line_in_fenced_code(content, line_num, &ranges) {
            continue;
        }
        if let Some(cap) = HEADING.captures(line) {
            headings.push(Heading {
                text: cap.get(2).unwrap().as_str().to_string(),
                level: cap.get(1).unwrap().as_str().len() as u8,
                line: line_num,
            });
        }
    }

    headings
}

/// The text of the first level-1 heading, if any.
pub fn first_h1(content: &str) -> Option<String> {
    parse_headings(content)
        .into_iter()
        .find(|h| h.level == 1)
        .map(|h| h.text)
}

/// Find a heading by its text, case-insensitively.
pub fn find_heading<'a>(headings: &'a [Heading], text: &str) -> Option<&'a Heading> {
    let lower = text.to_lowercase();
    headings.iter().find(|h| h.text.to_lowercase() == lower)
}
