//! `bulletin export` command implementation.

use std::path::{Path, PathBuf};

use bulletin_codec::{ExportOptions, export_document, take_export_options};
use bulletin_config::{CliSettings, Config};
use chrono::{Local, NaiveDate};
use clap::Args;

use super::DocumentInput;
use crate::error::CliError;
use crate::output::{Output, emit};

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    document: DocumentInput,

    /// Directory to write the exported file into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Collapse whitespace between tags (overrides config and document).
    #[arg(long)]
    minify: bool,

    /// Keep whitespace between tags (overrides config and document).
    #[arg(long, conflicts_with = "minify")]
    no_minify: bool,

    /// Leave out the embedded document; the file cannot be imported again.
    #[arg(long)]
    strip_json: bool,

    /// Date used in the filename, as YYYY-MM-DD (default: today).
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// Options are resolved in order: configuration, the document's own
    /// `export_options`, then command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, serialized or written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(config_path, Some(&cli_settings))?;

        let mut value = self.document.read_value()?;
        let options = take_export_options(&mut value, ExportOptions::from(&config.export))?;
        let options = self.apply_flags(options);
        let doc = self.document.build_document(value, &config)?;

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let file = export_document(&doc, &config, options, date)?;

        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(&file.filename);
        std::fs::write(&path, &file.html)?;

        output.success(&format!(
            "Exported {} ({} bytes)",
            path.display(),
            file.html.len()
        ));
        if options.strip_json {
            output.warning("Embedded document stripped; this file cannot be imported again");
        }
        emit(None, &path.display().to_string())?;
        Ok(())
    }

    fn minify_flag(&self) -> Option<bool> {
        if self.minify {
            Some(true)
        } else if self.no_minify {
            Some(false)
        } else {
            None
        }
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            minify: self.minify_flag(),
            strip_json: self.strip_json.then_some(true),
        }
    }

    fn apply_flags(&self, mut options: ExportOptions) -> ExportOptions {
        if let Some(minify) = self.minify_flag() {
            options.minify = minify;
        }
        if self.strip_json {
            options.strip_json = true;
        }
        options
    }
}
