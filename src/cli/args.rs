//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelink")]
#[command(author, version, about = "Insert cross-reference links between related notes", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert links between related notes
    Link(LinkArgs),

    /// Strip wikilink markup, keeping the display text
    Unlink(UnlinkArgs),

    /// Show computed link candidates without touching the vault
    Candidates(CandidatesArgs),

    /// Show the match keys derived for a note
    Keys(KeysArgs),

    /// List notes with titles and key counts
    List(ListArgs),

    /// Snapshot the vault without linking
    Backup(BackupArgs),
}

#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Operate on a single note (single-note mode); omit for the whole vault
    #[arg(long)]
    pub note: Option<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the safe-mode snapshot (accepts data-loss risk)
    #[arg(long)]
    pub no_backup: bool,

    /// Minimum shared-key length for acronym matches
    #[arg(long)]
    pub acronym_min_len: Option<usize>,

    /// Heading of the section links are inserted under
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Parser, Debug)]
pub struct UnlinkArgs {
    /// Operate on a single note; omit for the whole vault
    #[arg(long)]
    pub note: Option<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the safe-mode snapshot (accepts data-loss risk)
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Parser, Debug)]
pub struct CandidatesArgs {
    /// Single-note mode with the given note as source; omit for whole-vault
    #[arg(long)]
    pub note: Option<String>,

    /// Minimum shared-key length for acronym matches
    #[arg(long)]
    pub acronym_min_len: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Note path or name
    pub path: String,
}

#[derive(Parser, Debug)]
pub struct ListArgs {}

#[derive(Parser, Debug)]
pub struct BackupArgs {}
