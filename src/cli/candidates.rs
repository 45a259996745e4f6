//! The candidates command: show computed matches without writing.

use crate::cli::args::CandidatesArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::engine::{find_candidates, NoteKeys};
use crate::error::Result;
use crate::types::{LinkCandidate, MatchMode};
use crate::vault::Vault;
use serde::Serialize;

/// Output for the candidates command.
#[derive(Debug, Serialize)]
pub struct CandidatesOutput {
    pub mode: String,
    pub total: usize,
    pub candidates: Vec<LinkCandidate>,
}

/// Execute the candidates command.
pub fn run(vault: &Vault, config: &Config, args: &CandidatesArgs, output: &Output) -> Result<()> {
    let acronym_min_len = args.acronym_min_len.unwrap_or(config.acronym_min_len);

    let mode = match args.note.as_deref() {
        Some(query) => MatchMode::SingleNote(vault.resolve_note(query)?),
        None => MatchMode::WholeVault,
    };

    let scan = vault.scan()?;
    for failure in &scan.failures {
        output.warn(&format!(
            "skipping {}: {}",
            failure.path.display(),
            failure.reason
        ));
    }

    let note_keys: Vec<NoteKeys> = scan.notes.iter().map(NoteKeys::from_note).collect();
    let candidates = find_candidates(&note_keys, &mode, acronym_min_len);

    let result = CandidatesOutput {
        mode: mode.as_str().to_string(),
        total: candidates.len(),
        candidates,
    };
    output.print(&result)
}
