//! `bulletin render` and `bulletin plaintext` command implementations.

use std::path::{Path, PathBuf};

use bulletin_codec::minify_html;
use bulletin_config::Config;
use bulletin_render::{compose_document, compose_plain_text};
use clap::Args;

use super::DocumentInput;
use crate::error::CliError;
use crate::output::emit;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    document: DocumentInput,

    /// Write HTML to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Collapse whitespace between tags.
    #[arg(long)]
    minify: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or the output written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let doc = self.document.load(&config)?;

        let html = compose_document(&doc, &config);
        let html = if self.minify {
            minify_html(&html).into_owned()
        } else {
            html
        };
        tracing::info!(size = html.len(), "Rendered document");

        emit(self.output.as_deref(), &html)?;
        Ok(())
    }
}

/// Arguments for the plaintext command.
#[derive(Args)]
pub(crate) struct PlainTextArgs {
    #[command(flatten)]
    document: DocumentInput,

    /// Write text to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PlainTextArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let doc = self.document.load(&config)?;
        emit(self.output.as_deref(), &compose_plain_text(&doc, &config))?;
        Ok(())
    }
}
