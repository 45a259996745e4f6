//! Shared types for Notelink.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of a single match key derived from a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyKind {
    /// Derived from the note title.
    Title,
    /// Derived from the `keywords` frontmatter field.
    Keyword,
    /// Derived from the initials of the title tokens.
    Acronym,
}

/// A normalized string used to detect relatedness between two notes.
///
/// Recomputed on every run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchKey {
    /// Normalized key text (accent-stripped, case-folded, separators
    /// collapsed).
    pub text: String,

    /// How the key was derived.
    pub kind: KeyKind,
}

/// Kind of a match between two notes, ordered by precedence.
///
/// `ExactTitle` is the strongest signal, `Acronym` the weakest. When a pair of
/// notes matches through multiple keys, only the strongest kind is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    ExactTitle,
    Keyword,
    Acronym,
}

impl MatchKind {
    /// Resolve the kind of a match from the key kinds on each side.
    ///
    /// A title-to-title match is exact; any keyword involvement makes the
    /// match a keyword match; everything else (an acronym on at least one
    /// side, no keyword) is an acronym match.
    pub fn resolve(a: KeyKind, b: KeyKind) -> MatchKind {
        match (a, b) {
            (KeyKind::Title, KeyKind::Title) => MatchKind::ExactTitle,
            (KeyKind::Keyword, _) | (_, KeyKind::Keyword) => MatchKind::Keyword,
            _ => MatchKind::Acronym,
        }
    }

    /// Precedence weight: higher wins during dedup.
    pub fn strength(self) -> u8 {
        match self {
            MatchKind::ExactTitle => 3,
            MatchKind::Keyword => 2,
            MatchKind::Acronym => 1,
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::ExactTitle => write!(f, "exact-title"),
            MatchKind::Keyword => write!(f, "keyword"),
            MatchKind::Acronym => write!(f, "acronym"),
        }
    }
}

/// An ordered (source, target) pair of notes that should be linked.
///
/// Produced by the match engine, consumed once by the link rewriter. A given
/// pair appears at most once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    /// Note that receives the link (relative to vault root).
    pub source: PathBuf,

    /// Note the link points at (relative to vault root).
    pub target: PathBuf,

    /// The shared normalized key that produced the match.
    pub key: String,

    /// Resolved match kind after precedence dedup.
    pub kind: MatchKind,
}

/// Which notes the match engine operates on.
///
/// The designation is host-supplied at invocation time, never inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// Match every pair of distinct notes in the vault.
    WholeVault,

    /// Match one designated note (by vault-relative path) against the rest of
    /// the vault; the designated note is always the link source.
    SingleNote(PathBuf),
}

impl MatchMode {
    /// Short name used in run reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::WholeVault => "whole-vault",
            MatchMode::SingleNote(_) => "single-note",
        }
    }
}

/// A note that could not be read or written during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteFailure {
    /// Path relative to vault root.
    pub path: PathBuf,

    /// Human-readable reason.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_kind_resolution() {
        use KeyKind::*;
        assert_eq!(MatchKind::resolve(Title, Title), MatchKind::ExactTitle);
        assert_eq!(MatchKind::resolve(Title, Keyword), MatchKind::Keyword);
        assert_eq!(MatchKind::resolve(Keyword, Acronym), MatchKind::Keyword);
        assert_eq!(MatchKind::resolve(Keyword, Keyword), MatchKind::Keyword);
        assert_eq!(MatchKind::resolve(Title, Acronym), MatchKind::Acronym);
        assert_eq!(MatchKind::resolve(Acronym, Acronym), MatchKind::Acronym);
    }

    #[test]
    fn test_match_kind_precedence() {
        assert!(MatchKind::ExactTitle.strength() > MatchKind::Keyword.strength());
        assert!(MatchKind::Keyword.strength() > MatchKind::Acronym.strength());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(MatchMode::WholeVault.as_str(), "whole-vault");
        assert_eq!(
            MatchMode::SingleNote(PathBuf::from("a.md")).as_str(),
            "single-note"
        );
    }
}
