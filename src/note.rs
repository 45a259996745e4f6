//! Note representation and operations.

use crate::error::{LinkerError, Result};
use crate::parser::{
    self, first_h1, keywords_from_frontmatter, parse_wikilinks, split_frontmatter, Wikilink,
};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};

/// A note in the vault.
///
/// Identity is the path relative to the vault root. The note is read once at
/// scan time and closed after the run; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path relative to vault root (e.g. `proj/Deep Learning.md`).
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a note from disk.
    ///
    /// A file that is not valid UTF-8 yields `NoteDecode`, which callers
    /// treat as a per-note warning rather than a fatal error.
    pub fn load(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let full_path = vault_root.join(relative_path);
        let content = std::fs::read_to_string(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                LinkerError::NoteDecode {
                    path: relative_path.to_path_buf(),
                }
            } else {
                LinkerError::Io(e)
            }
        })?;
        Ok(Self {
            path: relative_path.to_path_buf(),
            content,
        })
    }

    /// Save the note to disk.
    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let full_path = vault_root.join(&self.path);

        let write = || -> std::io::Result<()> {
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, &self.content)
        };

        write().map_err(|e| LinkerError::NoteWrite {
            path: self.path.clone(),
            source: e,
        })
    }

    /// The note name (filename without the `.md` extension). This is what
    /// link markup targets.
    pub fn name(&self) -> &str {
        self.path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
    }

    /// The note title: the first level-1 heading in the body if present,
    /// otherwise the filename stem.
    pub fn title(&self) -> String {
        first_h1(self.body()).unwrap_or_else(|| self.name().to_string())
    }

    /// Content without frontmatter.
    pub fn body(&self) -> &str {
        split_frontmatter(&self.content).body
    }

    /// Parse frontmatter as a YAML value.
    pub fn frontmatter(&self) -> Result<Option<YamlValue>> {
        parser::parse_frontmatter(&self.content, &self.path)
    }

    /// Keywords declared in the note's frontmatter `keywords` field.
    ///
    /// Malformed frontmatter yields no keywords rather than an error; key
    /// extraction must never block the run.
    pub fn keywords(&self) -> Vec<String> {
        match self.frontmatter() {
            Ok(Some(fm)) => keywords_from_frontmatter(&fm),
            _ => Vec::new(),
        }
    }

    /// All wikilinks in the note, in document order.
    pub fn links(&self) -> Vec<Wikilink> {
        parse_wikilinks(&self.content)
    }

    /// Ordered outbound link targets, reduced to the final path component.
    ///
    /// `[[folder/Note#Section|alias]]` contributes `Note`.
    pub fn link_targets(&self) -> Vec<String> {
        self.links()
            .iter()
            .map(|l| {
                l.target
                    .rsplit('/')
                    .next()
                    .unwrap_or(&l.target)
                    .to_string()
            })
            .collect()
    }

    /// Replace the note's content.
    pub fn with_content(&self, new_content: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            content: new_content.into(),
        }
    }
}

/// Output representation of a note for CLI listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteInfo {
    pub path: String,
    pub title: String,
    pub keys: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl NoteInfo {
    pub fn new(vault_root: &Path, note: &Note, keys: usize) -> Self {
        let modified = std::fs::metadata(vault_root.join(&note.path))
            .ok()
            .and_then(|m| m.modified().ok())
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339());

        Self {
            path: note.path.to_string_lossy().to_string(),
            title: note.title(),
            keys,
            modified,
        }
    }
}
