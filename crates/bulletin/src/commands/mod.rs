//! CLI command implementations.

mod audit;
mod defaults;
mod export;
mod import;
mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use bulletin_config::Config;
use bulletin_model::defaults::fill_config_defaults;
use bulletin_model::{Document, ModelError};
use clap::Args;
use serde_json::Value;

use crate::error::CliError;

pub(crate) use audit::{StatsArgs, ValidateArgs};
pub(crate) use defaults::DefaultsArgs;
pub(crate) use export::ExportArgs;
pub(crate) use import::ImportArgs;
pub(crate) use render::{PlainTextArgs, RenderArgs};

/// Document source shared by every command that takes a document.
#[derive(Args)]
pub(crate) struct DocumentInput {
    /// Path to the document JSON (default: read stdin).
    input: Option<PathBuf>,

    /// Fill empty masthead and footer fields from configuration.
    #[arg(long)]
    fill_defaults: bool,
}

impl DocumentInput {
    /// Read and parse the document as raw JSON.
    pub(crate) fn read_value(&self) -> Result<Value, CliError> {
        let text = read_input(self.input.as_deref())?;
        let value = serde_json::from_str(&text).map_err(ModelError::from)?;
        Ok(value)
    }

    /// Turn raw JSON into a document, filling defaults if requested.
    pub(crate) fn build_document(&self, value: Value, config: &Config) -> Result<Document, CliError> {
        let mut doc = Document::from_value(value)?;
        if self.fill_defaults {
            fill_config_defaults(&mut doc, config);
        }
        Ok(doc)
    }

    pub(crate) fn load(&self, config: &Config) -> Result<Document, CliError> {
        let value = self.read_value()?;
        self.build_document(value, config)
    }
}

/// Read a file, or stdin when the path is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use bulletin_model::TemplateKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn input_for(contents: &str, fill_defaults: bool) -> (tempfile::TempDir, DocumentInput) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, contents).unwrap();
        (
            dir,
            DocumentInput {
                input: Some(path),
                fill_defaults,
            },
        )
    }

    #[test]
    fn test_load_document_from_file() {
        let (_dir, input) = input_for(r#"{"template": "briefing"}"#, false);
        let doc = input.load(&Config::default()).unwrap();
        assert_eq!(doc.template, TemplateKind::Briefing);
        assert_eq!(doc.masthead.title, "");
    }

    #[test]
    fn test_fill_defaults() {
        let (_dir, input) = input_for(r#"{"template": "ff"}"#, true);
        let config = Config::default();
        let doc = input.load(&config).unwrap();
        assert_eq!(doc.masthead.title, config.templates.ff.title);
        assert!(!doc.footer.address_lines.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let (_dir, input) = input_for("{not json", false);
        let err = input.load(&Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Model(ModelError::InvalidJson(_))));
    }

    #[test]
    fn test_malformed_document() {
        let (_dir, input) = input_for(r#"{"sections": 5}"#, false);
        let err = input.load(&Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Model(ModelError::Malformed(_))));
    }

    #[test]
    fn test_missing_file() {
        let input = DocumentInput {
            input: Some(PathBuf::from("/nonexistent/doc.json")),
            fill_defaults: false,
        };
        assert!(matches!(input.read_value(), Err(CliError::Io(_))));
    }
}
