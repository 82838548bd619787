//! `bulletin import` command implementation.

use std::path::PathBuf;

use bulletin_codec::import_html;
use clap::Args;

use super::read_input;
use crate::error::CliError;
use crate::output::{Output, emit};

/// Arguments for the import command.
#[derive(Args)]
pub(crate) struct ImportArgs {
    /// Exported HTML file (default: read stdin).
    input: Option<PathBuf>,

    /// Write the recovered document JSON to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ImportArgs {
    /// Execute the import command.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid embedded document is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let html = read_input(self.input.as_deref())?;
        let imported = import_html(&html)?;
        output.info(&format!(
            "Recovered {} document ({} payload, {} sections)",
            imported.document.template,
            imported.format,
            imported.document.sections.len()
        ));

        let json = serde_json::to_string_pretty(&imported.payload)?;
        emit(self.output.as_deref(), &json)?;
        Ok(())
    }
}
