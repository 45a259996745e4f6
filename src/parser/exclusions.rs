//! Detection of text regions that must not be scanned or rewritten.
//!
//! Fenced code blocks, inline code, and TeX math spans can contain `[[...]]`
//! sequences that are not links, so both the wikilink scanner and the link
//! rewriter treat these ranges as opaque.

use regex::Regex;
use std::sync::LazyLock;

/// What produced an excluded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionKind {
    FencedCode,
    InlineCode,
    Math,
}

/// A byte range of content that is opaque to link scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    pub kind: ExclusionKind,
}

// Opening of a fenced code block: ``` or ~~~ at start of line.
static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(`{3,}|~{3,})").unwrap());

// Inline code spans. The double-backtick form may contain single backticks.
static INLINE_CODE_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``(?:[^`]|`[^`])*``").unwrap());
static INLINE_CODE_SINGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

// Display math spans may cross lines; inline math must stay on one line.
static MATH_DISPLAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$.+?\$\$").unwrap());
static MATH_INLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$[^$\n]+\$").unwrap());

/// Find all excluded ranges in content, sorted by start offset.
pub fn find_exclusion_ranges(content: &str) -> Vec<ExclusionRange> {
    let mut ranges = fenced_code_ranges(content);

    push_matches(&INLINE_CODE_DOUBLE, content, ExclusionKind::InlineCode, &mut ranges);
    push_matches(&INLINE_CODE_SINGLE, content, ExclusionKind::InlineCode, &mut ranges);
    push_matches(&MATH_DISPLAY, content, ExclusionKind::Math, &mut ranges);
    push_matches(&MATH_INLINE, content, ExclusionKind::Math, &mut ranges);

    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Check if a byte offset falls inside any excluded range.
pub fn is_excluded(offset: usize, ranges: &[ExclusionRange]) -> bool {
    ranges.iter().any(|r| offset >= r.start && offset < r.end)
}

/// Check if a 1-indexed line lies inside a fenced code block.
pub fn is_line_in_fenced_code(content: &str, line: usize, ranges: &[ExclusionRange]) -> bool {
    let offset = match line_start_offset(content, line) {
        Some(o) => o,
        None => return false,
    };
    ranges
        .iter()
        .any(|r| r.kind == ExclusionKind::FencedCode && offset >= r.start && offset < r.end)
}

fn line_start_offset(content: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    if line == 1 {
        return Some(0);
    }
    content
        .match_indices('\n')
        .nth(line - 2)
        .map(|(idx, _)| idx + 1)
}

fn push_matches(
    re: &Regex,
    content: &str,
    kind: ExclusionKind,
    ranges: &mut Vec<ExclusionRange>,
) {
    for m in re.find_iter(content) {
        let overlaps = ranges
            .iter()
            .any(|r| m.start() < r.end && m.end() > r.start);
        if overlaps {
            continue;
        }
        ranges.push(ExclusionRange {
            start: m.start(),
            end: m.end(),
            kind,
        });
    }
}

/// Fenced blocks are tracked manually: a fence closes only on a line made of
/// at least as many of the same fence character.
fn fenced_code_ranges(content: &str) -> Vec<ExclusionRange> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        let Some(open) = FENCE_OPEN.find(&content[pos..]) else {
            break;
        };
        let abs_start = pos + open.start();
        let fence = &content[abs_start..abs_start + open.len()];
        let fence_char = fence.chars().next().unwrap();

        let open_line_end = content[abs_start..]
            .find('\n')
            .map(|i| abs_start + i + 1)
            .unwrap_or(content.len());

        let mut close = None;
        let mut line_start = open_line_end;
        while line_start < content.len() {
            let line_end = content[line_start..]
                .find('\n')
                .map(|i| line_start + i)
                .unwrap_or(content.len());
            let line = content[line_start..line_end].trim();
            if line.len() >= fence.len() && line.chars().all(|c| c == fence_char) {
                close = Some(line_end);
                break;
            }
            line_start = line_end + 1;
        }

        match close {
            Some(end) => {
                ranges.push(ExclusionRange {
                    start: abs_start,
                    end,
                    kind: ExclusionKind::FencedCode,
                });
                pos = end;
            }
            // Unterminated fence: treat the opener line as plain text.
            None => pos = open_line_end,
        }
    }

    ranges
}
