//! Export pipeline: render, minify and embed.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use bulletin_config::{Config, ExportConfig};
use bulletin_model::{Document, TemplateKind};
use bulletin_render::compose_document;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CodecError;
use crate::minify::minify_html;
use crate::{PAYLOAD_LINE_WIDTH, PAYLOAD_MARKER};

/// Key under which an export request carries its options.
const OPTIONS_KEY: &str = "export_options";

/// Suffix appended to the filename of production (payload-free) exports.
const PRODUCTION_SUFFIX: &str = "_PRODUCTION";

/// Switches controlling a single export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Collapse whitespace between tags.
    pub minify: bool,
    /// Leave out the embedded payload; the file can no longer be imported.
    pub strip_json: bool,
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            minify: config.minify,
            strip_json: config.strip_json,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptionOverrides {
    minify: Option<bool>,
    strip_json: Option<bool>,
}

/// Remove `export_options` from an export request and overlay it on `defaults`.
///
/// Absent keys keep the default. A request that is not a JSON object, or has
/// no options, yields `defaults` unchanged.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the options are not an object of
/// booleans.
pub fn take_export_options(
    request: &mut Value,
    defaults: ExportOptions,
) -> Result<ExportOptions, CodecError> {
    let Some(raw) = request
        .as_object_mut()
        .and_then(|map| map.remove(OPTIONS_KEY))
    else {
        return Ok(defaults);
    };
    if raw.is_null() {
        return Ok(defaults);
    }

    let overrides: OptionOverrides = serde_json::from_value(raw).map_err(CodecError::Malformed)?;
    Ok(ExportOptions {
        minify: overrides.minify.unwrap_or(defaults.minify),
        strip_json: overrides.strip_json.unwrap_or(defaults.strip_json),
    })
}

/// Serialize a document into the wrapped base64 block stored in exports.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if the document cannot be serialized.
pub fn encode_payload(doc: &Document) -> Result<String, CodecError> {
    let json = serde_json::to_string(doc).map_err(CodecError::Serialize)?;
    let encoded = BASE64_STANDARD.encode(json);

    let mut block = String::with_capacity(encoded.len() + encoded.len() / PAYLOAD_LINE_WIDTH + 1);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % PAYLOAD_LINE_WIDTH == 0 {
            block.push('\n');
        }
        block.push(c);
    }
    Ok(block)
}

/// Embed a document into rendered HTML.
///
/// The payload comment is inserted before the last `</body>`, or appended
/// when the HTML has none.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if the document cannot be serialized.
pub fn embed_document(html: &str, doc: &Document) -> Result<String, CodecError> {
    let comment = format!("{PAYLOAD_MARKER}\n{}\n-->\n", encode_payload(doc)?);

    let mut out = String::with_capacity(html.len() + comment.len());
    match html.rfind("</body>") {
        Some(pos) => {
            out.push_str(&html[..pos]);
            out.push_str(&comment);
            out.push_str(&html[pos..]);
        }
        None => {
            out.push_str(html);
            out.push_str(&comment);
        }
    }
    Ok(out)
}

/// Build the download filename, e.g. `Friday_Focus_2025-03-07.html`.
#[must_use]
pub fn export_filename(
    template: TemplateKind,
    date: NaiveDate,
    strip_json: bool,
    config: &ExportConfig,
) -> String {
    let suffix = if strip_json { PRODUCTION_SUFFIX } else { "" };
    format!(
        "{}{}{suffix}.html",
        config.prefix_for(template.as_str()),
        date.format("%Y-%m-%d")
    )
}

/// A finished export, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub html: String,
}

/// Render a document and package it as a downloadable HTML file.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if the payload cannot be embedded.
pub fn export_document(
    doc: &Document,
    config: &Config,
    options: ExportOptions,
    date: NaiveDate,
) -> Result<ExportedFile, CodecError> {
    let mut html = compose_document(doc, config);
    let original_size = html.len();

    if options.minify {
        html = minify_html(&html).into_owned();
        tracing::info!(
            original = original_size,
            minified = html.len(),
            "Minified export"
        );
    }

    if options.strip_json {
        tracing::info!(size = html.len(), "Exporting without embedded payload");
    } else {
        html = embed_document(&html, doc)?;
        tracing::info!(size = html.len(), "Embedded document payload");
    }

    Ok(ExportedFile {
        filename: export_filename(doc.template, date, options.strip_json, &config.export),
        html,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_take_export_options_overlays_defaults() {
        let mut request = json!({"template": "ff", "export_options": {"strip_json": true}});
        let defaults = ExportOptions {
            minify: true,
            strip_json: false,
        };

        let options = take_export_options(&mut request, defaults).unwrap();

        assert_eq!(
            options,
            ExportOptions {
                minify: true,
                strip_json: true
            }
        );
        assert_eq!(request, json!({"template": "ff"}));
    }

    #[test]
    fn test_take_export_options_absent() {
        let mut request = json!({"template": "ff"});
        let options = take_export_options(&mut request, ExportOptions::default()).unwrap();
        assert_eq!(options, ExportOptions::default());
    }

    #[test]
    fn test_take_export_options_rejects_non_bool() {
        let mut request = json!({"export_options": {"minify": "yes"}});
        let err = take_export_options(&mut request, ExportOptions::default()).unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn test_payload_wraps_at_line_width() {
        let mut doc = Document::default();
        doc.masthead.title = "x".repeat(400);

        let block = encode_payload(&doc).unwrap();
        let lines: Vec<&str> = block.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines[..lines.len() - 1].iter().all(|l| l.len() == PAYLOAD_LINE_WIDTH));
        assert!(lines[lines.len() - 1].len() <= PAYLOAD_LINE_WIDTH);
    }

    #[test]
    fn test_embed_before_last_body_close() {
        let html = "<html><body><p>&lt;/body&gt;</p></body></html>";
        let out = embed_document(html, &Document::default()).unwrap();

        let marker = out.find(PAYLOAD_MARKER).unwrap();
        assert!(out[..marker].ends_with("</p>"));
        assert!(out.ends_with("-->\n</body></html>"));
    }

    #[test]
    fn test_embed_without_body_appends() {
        let out = embed_document("<p>fragment</p>", &Document::default()).unwrap();
        assert!(out.starts_with("<p>fragment</p><!-- WSU_NEWSLETTER_DATA_B64\n"));
        assert!(out.ends_with("\n-->\n"));
    }

    #[test]
    fn test_export_filename() {
        let config = ExportConfig::default();
        assert_eq!(
            export_filename(TemplateKind::Ff, date(), false, &config),
            "Friday_Focus_2025-03-07.html"
        );
        assert_eq!(
            export_filename(TemplateKind::Briefing, date(), true, &config),
            "Briefing_2025-03-07_PRODUCTION.html"
        );
    }

    #[test]
    fn test_export_document_strip_json() {
        let config = Config::default();
        let doc = Document::default();
        let options = ExportOptions {
            minify: true,
            strip_json: true,
        };

        let file = export_document(&doc, &config, options, date()).unwrap();

        assert!(!file.html.contains(PAYLOAD_MARKER));
        assert!(!file.html.contains(">\n<"));
        assert_eq!(file.filename, "Friday_Focus_2025-03-07_PRODUCTION.html");
    }
}
