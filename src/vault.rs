//! Vault representation and file enumeration.

use crate::error::{LinkerError, Result};
use crate::note::Note;
use crate::types::NoteFailure;
use glob::glob;
use std::path::{Path, PathBuf};

/// An Obsidian-style vault: a directory tree of markdown notes.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

/// Result of reading every note in the vault.
#[derive(Debug)]
pub struct VaultScan {
    /// Notes that loaded successfully, sorted by path.
    pub notes: Vec<Note>,

    /// Files that could not be decoded; excluded from the run.
    pub failures: Vec<NoteFailure>,
}

impl Vault {
    /// Open a vault, verifying the root exists and is readable.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(LinkerError::VaultNotFound(root));
        }

        // Surface permission problems up front rather than mid-run.
        std::fs::read_dir(&root).map_err(|e| LinkerError::VaultUnreadable {
            path: root.clone(),
            source: e,
        })?;

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Normalize a note path (add `.md` extension if needed).
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Resolve a host-supplied note designation to a vault-relative path.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);
        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let as_given = PathBuf::from(query);
        if self.note_exists(&as_given) {
            return Ok(as_given);
        }

        Err(LinkerError::NoteNotFound(PathBuf::from(query)))
    }

    /// Load a note from the vault.
    pub fn load_note(&self, relative_path: &Path) -> Result<Note> {
        if !self.note_exists(relative_path) {
            return Err(LinkerError::NoteNotFound(relative_path.to_path_buf()));
        }
        Note::load(&self.root, relative_path)
    }

    /// Save a note to the vault.
    pub fn save_note(&self, note: &Note) -> Result<()> {
        note.save(&self.root)
    }

    /// List all markdown files in the vault, sorted by relative path.
    ///
    /// Files under dot-directories (`.obsidian`, `.trash`, ...) are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        let hidden = relative
                            .components()
                            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
                        if !hidden {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Warning: glob error: {}", e);
                }
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Iterate over the vault's notes lazily, in path order.
    ///
    /// Each call restarts from a fresh directory listing. Items are
    /// per-note results so callers decide how to treat unreadable files.
    pub fn iter_notes(&self) -> Result<impl Iterator<Item = (PathBuf, Result<Note>)> + '_> {
        let paths = self.list_notes()?;
        Ok(paths
            .into_iter()
            .map(move |path| (path.clone(), Note::load(&self.root, &path))))
    }

    /// Read every note in the vault.
    ///
    /// Individual decode failures do not fail the scan; they are collected so
    /// the run summary can report them.
    pub fn scan(&self) -> Result<VaultScan> {
        let mut notes = Vec::new();
        let mut failures = Vec::new();

        for (path, loaded) in self.iter_notes()? {
            match loaded {
                Ok(note) => notes.push(note),
                Err(e) => failures.push(NoteFailure {
                    path,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(VaultScan { notes, failures })
    }
}
