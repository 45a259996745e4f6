//! Output formatting for CLI commands.
//!
//! Data goes to stdout in the selected format; diagnostics go to stderr and
//! respect quiet/verbose.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing command output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
    verbose: u8,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool, verbose: u8) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    /// Print a serializable value in the configured format.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Toml => toml::to_string_pretty(value)?,
        };
        println!("{}", rendered);
        Ok(())
    }

    /// Print a diagnostic message unless in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print a diagnostic only at the given verbosity or above.
    pub fn debug(&self, level: u8, message: &str) {
        if !self.quiet && self.verbose >= level {
            eprintln!("{}", message);
        }
    }

    /// Print a warning. Warnings ignore quiet mode.
    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }
}
