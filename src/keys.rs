//! Match key derivation: normalization, acronyms, and per-note key sets.

use crate::note::Note;
use crate::types::{KeyKind, MatchKey};
use unicode_normalization::UnicodeNormalization;

/// Normalize a title or keyword for matching.
///
/// NFKD-decomposes, drops combining marks and anything outside ASCII
/// alphanumerics, folds case, turns `-`/`_` and runs of whitespace into
/// single spaces. `"Crème  Brûlée!"` becomes `"creme brulee"`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_space = true;
        }
        // Combining marks and other punctuation are dropped outright.
    }

    out
}

/// Generate an acronym from a normalized title.
///
/// Takes the first character of each whitespace-separated token, skipping
/// one-character tokens ("A - Deep Learning" yields `dl`, not `adl`). Titles
/// with fewer than two contributing tokens yield nothing: acronym matching is
/// best effort and must never block a run.
pub fn acronym(normalized_title: &str) -> Option<String> {
    let acronym: String = normalized_title
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .filter_map(|t| t.chars().next())
        .collect();

    if acronym.chars().count() < 2 {
        return None;
    }

    Some(acronym)
}

/// Derive the full match key set for a note.
///
/// One title key, at most one acronym key, and one key per frontmatter
/// keyword. Keys that normalize to the empty string are dropped, and
/// duplicate texts keep only the strongest kind (title > keyword > acronym).
pub fn match_keys(note: &Note) -> Vec<MatchKey> {
    let mut keys: Vec<MatchKey> = Vec::new();

    let mut push = |text: String, kind: KeyKind| {
        if text.is_empty() {
            return;
        }
        match keys.iter_mut().find(|k| k.text == text) {
            Some(existing) => {
                if kind < existing.kind {
                    existing.kind = kind;
                }
            }
            None => keys.push(MatchKey { text, kind }),
        }
    };

    let title = normalize(&note.title());
    if let Some(acr) = acronym(&title) {
        push(acr, KeyKind::Acronym);
    }
    push(title, KeyKind::Title);

    for keyword in note.keywords() {
        push(normalize(&keyword), KeyKind::Keyword);
    }

    keys
}
