//! Notelink - insert cross-reference links between related notes in
//! Obsidian-style vaults.
//!
//! # Overview
//!
//! Notelink scans a vault of markdown notes, derives a set of match keys per
//! note (normalized title, frontmatter keywords, title acronym), computes
//! which notes should reference each other, and appends `[[wikilinks]]` under
//! a "Related" section in each source note. Runs are idempotent, and in safe
//! mode (the default) the whole vault is snapshotted before anything is
//! written.
//!
//! # Example
//!
//! ```no_run
//! use notelink::{find_candidates, insert_links, MatchMode, NoteKeys, Vault};
//!
//! let vault = Vault::open("/path/to/vault").unwrap();
//! let scan = vault.scan().unwrap();
//!
//! let keys: Vec<NoteKeys> = scan.notes.iter().map(NoteKeys::from_note).collect();
//! let candidates = find_candidates(&keys, &MatchMode::WholeVault, 3);
//!
//! for note in &scan.notes {
//!     let mine: Vec<_> = candidates
//!         .iter()
//!         .filter(|c| c.source == note.path)
//!         .cloned()
//!         .collect();
//!     let plan = insert_links(note, &mine, "Related");
//!     if plan.changed {
//!         vault.save_note(&note.with_content(plan.content)).unwrap();
//!     }
//! }
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod keys;
pub mod note;
pub mod parser;
pub mod rewrite;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use backup::{snapshot, VaultSnapshot};
pub use config::Config;
pub use engine::{find_candidates, NoteKeys};
pub use error::{LinkerError, Result};
pub use note::Note;
pub use rewrite::{insert_links, strip_wikilinks, RewritePlan};
pub use types::*;
pub use vault::Vault;
