//! The backup command: snapshot the vault without linking.

use crate::backup::snapshot;
use crate::cli::args::BackupArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;

/// Execute the backup command.
pub fn run(vault: &Vault, _args: &BackupArgs, output: &Output) -> Result<()> {
    let snap = snapshot(&vault.root)?;
    output.print(&snap)
}
