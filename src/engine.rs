//! The match engine: decides which notes should reference each other.

use crate::keys;
use crate::note::Note;
use crate::types::{KeyKind, LinkCandidate, MatchKey, MatchKind, MatchMode};
use std::collections::HashMap;
use std::path::PathBuf;

/// A note reduced to its identity and match keys.
#[derive(Debug, Clone)]
pub struct NoteKeys {
    /// Path relative to vault root.
    pub path: PathBuf,

    /// Derived match keys. May be empty; such a note simply never matches.
    pub keys: Vec<MatchKey>,
}

impl NoteKeys {
    /// Extract keys from a loaded note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            path: note.path.clone(),
            keys: keys::match_keys(note),
        }
    }
}

/// Compute the set of link candidates for the given notes and mode.
///
/// Matching is pure: no I/O, no mutation. Runtime is proportional to the
/// number of notes times the average key-set size (keys are bucketed by
/// text, then only notes sharing a bucket are paired).
///
/// Guarantees:
/// - no candidate has `source == target`;
/// - at most one candidate per (source, target) pair, keeping the strongest
///   match kind (exact-title > keyword > acronym);
/// - in whole-vault mode the source is the lexicographically smaller path, so
///   re-running on an unchanged vault yields identical output;
/// - in single-note mode the designated note is always the source;
/// - acronym-kind candidates whose shared key is shorter than
///   `acronym_min_len` characters are dropped.
pub fn find_candidates(
    notes: &[NoteKeys],
    mode: &MatchMode,
    acronym_min_len: usize,
) -> Vec<LinkCandidate> {
    // Bucket note indices by key text.
    let mut buckets: HashMap<&str, Vec<(usize, KeyKind)>> = HashMap::new();
    for (idx, note) in notes.iter().enumerate() {
        for key in &note.keys {
            buckets
                .entry(key.text.as_str())
                .or_default()
                .push((idx, key.kind));
        }
    }

    let mut best: HashMap<(PathBuf, PathBuf), LinkCandidate> = HashMap::new();

    // Deterministic iteration keeps the recorded key stable when two kinds
    // tie in strength.
    let mut key_texts: Vec<&str> = buckets.keys().copied().collect();
    key_texts.sort_unstable();

    for text in key_texts {
        let members = &buckets[text];
        for (i, &(a_idx, a_kind)) in members.iter().enumerate() {
            for &(b_idx, b_kind) in &members[i + 1..] {
                if a_idx == b_idx {
                    continue;
                }

                let kind = MatchKind::resolve(a_kind, b_kind);
                if kind == MatchKind::Acronym && text.chars().count() < acronym_min_len {
                    continue;
                }

                let a = &notes[a_idx].path;
                let b = &notes[b_idx].path;

                let (source, target) = match mode {
                    MatchMode::WholeVault => {
                        if a < b {
                            (a.clone(), b.clone())
                        } else {
                            (b.clone(), a.clone())
                        }
                    }
                    MatchMode::SingleNote(active) => {
                        if a == active {
                            (a.clone(), b.clone())
                        } else if b == active {
                            (b.clone(), a.clone())
                        } else {
                            continue;
                        }
                    }
                };

                let candidate = LinkCandidate {
                    source: source.clone(),
                    target: target.clone(),
                    key: text.to_string(),
                    kind,
                };

                best.entry((source, target))
                    .and_modify(|current| {
                        if kind.strength() > current.kind.strength() {
                            *current = candidate.clone();
                        }
                    })
                    .or_insert(candidate);
            }
        }
    }

    let mut candidates: Vec<LinkCandidate> = best.into_values().collect();
    candidates.sort_by(|x, y| x.source.cmp(&y.source).then(x.target.cmp(&y.target)));
    candidates
}

/// Group candidates by source note, preserving candidate order.
pub fn by_source(candidates: Vec<LinkCandidate>) -> Vec<(PathBuf, Vec<LinkCandidate>)> {
    let mut grouped: Vec<(PathBuf, Vec<LinkCandidate>)> = Vec::new();
    for candidate in candidates {
        match grouped.last_mut() {
            Some((source, group)) if *source == candidate.source => group.push(candidate),
            _ => grouped.push((candidate.source.clone(), vec![candidate])),
        }
    }
    grouped
}
