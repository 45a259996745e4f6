//! The link command: match notes and insert cross-references.

use crate::backup;
use crate::cli::args::LinkArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::engine::{by_source, find_candidates, NoteKeys};
use crate::error::{ExitStatus, Result};
use crate::note::Note;
use crate::rewrite::insert_links;
use crate::types::{MatchMode, NoteFailure};
use crate::vault::Vault;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// End-of-run report for the link command.
#[derive(Debug, Serialize)]
pub struct LinkReport {
    pub mode: String,
    pub dry_run: bool,
    pub modified: usize,
    pub skipped: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub changes: Vec<NoteChange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<NoteFailure>,
}

/// Links added (or, in dry-run mode, that would be added) to one note.
#[derive(Debug, Serialize)]
pub struct NoteChange {
    pub path: PathBuf,
    pub added: Vec<String>,
}

/// Execute the link command.
pub fn run(vault: &Vault, config: &Config, args: &LinkArgs, output: &Output) -> Result<ExitStatus> {
    let safe_mode = config.safe_mode && !args.no_backup;
    let acronym_min_len = args.acronym_min_len.unwrap_or(config.acronym_min_len);
    let heading = args.section.as_deref().unwrap_or(&config.related_heading);

    if !safe_mode && !args.dry_run {
        output.warn("safe mode is off: the vault will be modified without a backup");
    }

    let mode = match args.note.as_deref() {
        Some(query) => MatchMode::SingleNote(vault.resolve_note(query)?),
        None => MatchMode::WholeVault,
    };

    let scan = vault.scan()?;
    let total = scan.notes.len() + scan.failures.len();
    let mut failures = scan.failures;

    let note_keys: Vec<NoteKeys> = scan.notes.iter().map(NoteKeys::from_note).collect();
    let candidates = find_candidates(&note_keys, &mode, acronym_min_len);
    output.debug(
        1,
        &format!("{} notes scanned, {} candidate pairs", total, candidates.len()),
    );

    let notes_by_path: HashMap<&PathBuf, &Note> =
        scan.notes.iter().map(|n| (&n.path, n)).collect();

    // Plan every rewrite before touching disk, so the snapshot (and the
    // decision to take one) happens strictly before the first mutation.
    let mut pending: Vec<(Note, Vec<String>)> = Vec::new();
    for (source, group) in by_source(candidates) {
        let Some(&note) = notes_by_path.get(&source) else {
            continue;
        };
        let plan = insert_links(note, &group, heading);
        if plan.changed {
            output.debug(
                2,
                &format!("{}: adding {}", source.display(), plan.added.join(", ")),
            );
            pending.push((note.with_content(plan.content), plan.added));
        }
    }

    let mut snapshot = None;
    if !pending.is_empty() && !args.dry_run && safe_mode {
        let snap = backup::snapshot(&vault.root)?;
        output.info(&format!("Snapshot created at {}", snap.dest.display()));
        snapshot = Some(snap);
    }

    let mut modified = 0;
    let mut changes = Vec::new();
    for (note, added) in pending {
        if !args.dry_run {
            if let Err(e) = vault.save_note(&note) {
                failures.push(NoteFailure {
                    path: note.path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        }
        modified += 1;
        changes.push(NoteChange {
            path: note.path,
            added,
        });
    }

    let failed = failures.len();
    let report = LinkReport {
        mode: mode.as_str().to_string(),
        dry_run: args.dry_run,
        modified,
        skipped: total - modified - failed,
        failed,
        backup: snapshot.map(|s| s.dest),
        changes,
        failures,
    };
    output.print(&report)?;

    if failed > 0 {
        Ok(ExitStatus::PartialFailure)
    } else {
        Ok(ExitStatus::Success)
    }
}
