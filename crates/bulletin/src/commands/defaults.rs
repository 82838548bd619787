//! `bulletin defaults` command implementation.

use std::path::{Path, PathBuf};

use bulletin_config::Config;
use bulletin_model::TemplateKind;
use bulletin_model::defaults::default_document;
use clap::Args;

use crate::error::CliError;
use crate::output::emit;

/// Arguments for the defaults command.
#[derive(Args)]
pub(crate) struct DefaultsArgs {
    /// Template to start from (`ff` or `briefing`).
    template: TemplateKind,

    /// Write the document JSON to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DefaultsArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let doc = default_document(self.template, &config);
        emit(self.output.as_deref(), &serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}
