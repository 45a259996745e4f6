//! The unlink command: strip wikilink markup from notes.

use crate::backup;
use crate::cli::args::UnlinkArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{ExitStatus, Result};
use crate::note::Note;
use crate::rewrite::strip_wikilinks;
use crate::types::NoteFailure;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;

/// End-of-run report for the unlink command.
#[derive(Debug, Serialize)]
pub struct UnlinkReport {
    pub mode: String,
    pub dry_run: bool,
    pub modified: usize,
    pub skipped: usize,
    pub failed: usize,
    pub links_removed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<NoteFailure>,
}

/// Execute the unlink command.
pub fn run(
    vault: &Vault,
    config: &Config,
    args: &UnlinkArgs,
    output: &Output,
) -> Result<ExitStatus> {
    let safe_mode = config.safe_mode && !args.no_backup;

    if !safe_mode && !args.dry_run {
        output.warn("safe mode is off: the vault will be modified without a backup");
    }

    let (mode, notes, mut failures) = match args.note.as_deref() {
        Some(query) => {
            let path = vault.resolve_note(query)?;
            (
                "single-note",
                vec![vault.load_note(&path)?],
                Vec::<NoteFailure>::new(),
            )
        }
        None => {
            let scan = vault.scan()?;
            ("whole-vault", scan.notes, scan.failures)
        }
    };

    let total = notes.len() + failures.len();

    let mut pending: Vec<(Note, usize)> = Vec::new();
    let mut links_removed = 0;
    for note in &notes {
        let (stripped, count) = strip_wikilinks(&note.content);
        if count > 0 {
            links_removed += count;
            pending.push((note.with_content(stripped), count));
        }
    }

    let mut snapshot = None;
    if !pending.is_empty() && !args.dry_run && safe_mode {
        let snap = backup::snapshot(&vault.root)?;
        output.info(&format!("Snapshot created at {}", snap.dest.display()));
        snapshot = Some(snap);
    }

    let mut modified = 0;
    for (note, count) in pending {
        if !args.dry_run {
            if let Err(e) = vault.save_note(&note) {
                failures.push(NoteFailure {
                    path: note.path.clone(),
                    reason: e.to_string(),
                });
                links_removed -= count;
                continue;
            }
        }
        modified += 1;
    }

    let failed = failures.len();
    let report = UnlinkReport {
        mode: mode.to_string(),
        dry_run: args.dry_run,
        modified,
        skipped: total - modified - failed,
        failed,
        links_removed,
        backup: snapshot.map(|s| s.dest),
        failures,
    };
    output.print(&report)?;

    if failed > 0 {
        Ok(ExitStatus::PartialFailure)
    } else {
        Ok(ExitStatus::Success)
    }
}
