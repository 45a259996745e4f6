//! The keys command: show a note's derived match keys.

use crate::cli::args::KeysArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::keys::match_keys;
use crate::types::MatchKey;
use crate::vault::Vault;
use serde::Serialize;

/// Output for the keys command.
#[derive(Debug, Serialize)]
pub struct KeysOutput {
    pub path: String,
    pub title: String,
    pub keys: Vec<MatchKey>,
}

/// Execute the keys command.
pub fn run(vault: &Vault, args: &KeysArgs, output: &Output) -> Result<()> {
    let path = vault.resolve_note(&args.path)?;
    let note = vault.load_note(&path)?;

    let result = KeysOutput {
        path: note.path.to_string_lossy().to_string(),
        title: note.title(),
        keys: match_keys(&note),
    };
    output.print(&result)
}
