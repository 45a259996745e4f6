//! Rewriting note bodies: inserting and stripping cross-reference links.

use crate::keys::normalize;
use crate::note::Note;
use crate::parser::{find_heading, format_wikilink, parse_headings, parse_wikilinks};
use crate::types::LinkCandidate;

/// Outcome of planning a rewrite for one note.
#[derive(Debug, Clone)]
pub struct RewritePlan {
    /// The new full content. Equal to the original when `changed` is false.
    pub content: String,

    /// Whether a write is needed.
    pub changed: bool,

    /// Target names that will be added under the related section.
    pub added: Vec<String>,

    /// Target names skipped because the note already links to them.
    pub already_linked: Vec<String>,
}

/// Plan the insertion of links for one source note.
///
/// Accepted candidates become `- [[name]]` entries under the `heading`
/// section (created at the end of the note when absent, extended in place
/// when present). A target that is already linked anywhere in the body is
/// skipped, so running twice never duplicates anything. Self-references are
/// dropped regardless of what the engine produced.
pub fn insert_links(note: &Note, candidates: &[LinkCandidate], heading: &str) -> RewritePlan {
    let existing: Vec<String> = note
        .link_targets()
        .iter()
        .map(|t| normalize(t))
        .collect();
    let own_name = normalize(note.name());

    let mut added: Vec<String> = Vec::new();
    let mut already_linked: Vec<String> = Vec::new();

    for candidate in candidates {
        let name = candidate
            .target
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if name.is_empty() {
            continue;
        }

        let normalized = normalize(name);
        if normalized == own_name {
            continue;
        }
        if existing.contains(&normalized) {
            already_linked.push(name.to_string());
            continue;
        }
        if added.iter().any(|a| normalize(a) == normalized) {
            continue;
        }
        added.push(name.to_string());
    }

    added.sort();

    if added.is_empty() {
        return RewritePlan {
            content: note.content.clone(),
            changed: false,
            added,
            already_linked,
        };
    }

    let items: Vec<String> = added.iter().map(|n| format!("- {}", format_wikilink(n))).collect();
    let content = splice_into_section(&note.content, heading, &items);

    RewritePlan {
        content,
        changed: true,
        added,
        already_linked,
    }
}

/// Insert list items at the end of the named section, creating the section
/// at the end of the content when it does not exist.
fn splice_into_section(content: &str, heading: &str, items: &[String]) -> String {
    let headings = parse_headings(content);

    if let Some(target) = find_heading(&headings, heading) {
        let level = target.level;
        let section_end_line = headings
            .iter()
            .find(|h| h.line > target.line && h.level <= level)
            .map(|h| h.line - 1);

        let lines: Vec<&str> = content.lines().collect();
        let end = section_end_line.unwrap_or(lines.len());

        // Insert after the last non-blank line of the section so trailing
        // blank lines stay where they were.
        let mut insert_at = target.line;
        for (idx, line) in lines.iter().enumerate().take(end).skip(target.line) {
            if !line.trim().is_empty() {
                insert_at = idx + 1;
            }
        }

        let mut new_lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        for (offset, item) in items.iter().enumerate() {
            new_lines.insert(insert_at + offset, item.clone());
        }

        let mut result = new_lines.join("\n");
        if content.ends_with('\n') {
            result.push('\n');
        }
        return result;
    }

    // No section yet: append one at the end.
    let mut result = content.to_string();
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    if !result.is_empty() {
        result.push('\n');
    }
    result.push_str(&format!("## {}\n\n", heading));
    for item in items {
        result.push_str(item);
        result.push('\n');
    }
    result
}

/// Strip wikilink markup from content, keeping the display text.
///
/// `[[Target]]` becomes `Target`, `[[Target|shown]]` becomes `shown`, embeds
/// lose their `![[...]]` wrapper entirely. Links inside code and math spans
/// are left alone. Returns the new content and the number of links removed.
pub fn strip_wikilinks(content: &str) -> (String, usize) {
    let links = parse_wikilinks(content);
    if links.is_empty() {
        return (content.to_string(), 0);
    }

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;
    for link in &links {
        result.push_str(&content[cursor..link.start]);
        result.push_str(link.display_text());
        cursor = link.end;
    }
    result.push_str(&content[cursor..]);

    (result, links.len())
}
