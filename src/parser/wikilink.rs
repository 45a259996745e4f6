//! Wikilink parsing and formatting.

use crate::parser::exclusions::{find_exclusion_ranges, is_excluded};
use regex::Regex;
use std::sync::LazyLock;

/// A wikilink or embed found in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wikilink {
    /// The link target (note name or path, without heading/block fragment).
    pub target: String,

    /// Fragment after `#` (heading or block reference), kept verbatim.
    pub fragment: Option<String>,

    /// Display alias (the part after `|`).
    pub alias: Option<String>,

    /// Whether this is an embed (`![[...]]`).
    pub embed: bool,

    /// Line number where the link appears (1-indexed).
    pub line: usize,

    /// Start byte offset in the content (inclusive).
    pub start: usize,

    /// End byte offset in the content (exclusive).
    pub end: usize,
}

impl Wikilink {
    /// The text a reader sees for this link.
    pub fn display_text(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}

// [[target]] / [[target#fragment]] / [[target|alias]] / ![[embed]]
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\[\]\|#]+)(?:#([^\]\|]*))?(?:\|([^\[\]]+))?\]\]").unwrap()
});

/// Parse all wikilinks and embeds from content, skipping excluded ranges
/// (code blocks, inline code, math spans).
pub fn parse_wikilinks(content: &str) -> Vec<Wikilink> {
    let ranges = find_exclusion_ranges(content);
    let mut links = Vec::new();

    for cap in WIKILINK.captures_iter(content) {
        let whole = cap.get(0).unwrap();
        if is_excluded(whole.start(), &ranges) {
            continue;
        }

        let line = content[..whole.start()].matches('\n').count() + 1;

        links.push(Wikilink {
            target: cap.get(2).unwrap().as_str().trim().to_string(),
            fragment: cap.get(3).map(|m| m.as_str().to_string()),
            alias: cap.get(4).map(|m| m.as_str().to_string()),
            embed: !cap.get(1).unwrap().as_str().is_empty(),
            line,
            start: whole.start(),
            end: whole.end(),
        });
    }

    links
}

/// Format a plain wikilink for a note name.
pub fn format_wikilink(target: &str) -> String {
    format!("[[{}]]", target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_link() {
        let links = parse_wikilinks("See [[My Note]] for details.");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "My Note");
        assert!(links[0].alias.is_none());
        assert!(!links[0].embed);
    }

    #[test]
    fn test_link_with_alias() {
        let links = parse_wikilinks("See [[My Note|the note]].");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "My Note");
        assert_eq!(links[0].alias, Some("the note".to_string()));
        assert_eq!(links[0].display_text(), "the note");
    }

    #[test]
    fn test_link_with_fragment() {
        let links = parse_wikilinks("See [[My Note#Section]] and [[Other#^blk]].");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target, "My Note");
        assert_eq!(links[0].fragment, Some("Section".to_string()));
        assert_eq!(links[1].target, "Other");
        assert_eq!(links[1].fragment, Some("^blk".to_string()));
    }

    #[test]
    fn test_embed() {
        let links = parse_wikilinks("![[image.png]]");
        assert_eq!(links.len(), 1);
        assert!(links[0].embed);
        assert_eq!(links[0].target, "image.png");
    }

    #[test]
    fn test_link_in_code_skipped() {
        let content = "See [[real]]\n```\n[[fake]]\n```\nand `[[inline fake]]`.";
        let links = parse_wikilinks(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "real");
    }

    #[test]
    fn test_link_in_math_skipped() {
        let content = "Real [[link]] but $[[a,b]]$ is an interval.";
        let links = parse_wikilinks(content);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "link");
    }

    #[test]
    fn test_line_numbers_and_spans() {
        let content = "Line 1\n[[Second]]\n";
        let links = parse_wikilinks(content);
        assert_eq!(links[0].line, 2);
        assert_eq!(&content[links[0].start..links[0].end], "[[Second]]");
    }

    #[test]
    fn test_link_with_path() {
        let links = parse_wikilinks("[[folder/note]]");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "folder/note");
    }

    #[test]
    fn test_format_wikilink() {
        assert_eq!(format_wikilink("My Note"), "[[My Note]]");
    }
}
