//! The list command: notes with titles and key counts.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::keys::match_keys;
use crate::note::NoteInfo;
use crate::vault::Vault;
use serde::Serialize;

/// Output for the list command.
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub notes: Vec<NoteInfo>,
    pub total: usize,
}

/// Execute the list command.
pub fn run(vault: &Vault, _args: &ListArgs, output: &Output) -> Result<()> {
    let scan = vault.scan()?;
    for failure in &scan.failures {
        output.warn(&format!(
            "skipping {}: {}",
            failure.path.display(),
            failure.reason
        ));
    }

    let notes: Vec<NoteInfo> = scan
        .notes
        .iter()
        .map(|note| NoteInfo::new(&vault.root, note, match_keys(note).len()))
        .collect();

    let total = notes.len();
    output.print(&ListOutput { notes, total })
}
