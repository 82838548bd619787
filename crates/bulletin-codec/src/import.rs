//! Recover a document from an exported HTML file.

use std::fmt;
use std::sync::LazyLock;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use bulletin_model::Document;
use regex::Regex;
use serde_json::Value;

use crate::error::CodecError;
use crate::migrate::migrate;

static PAYLOAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!-- WSU_NEWSLETTER_DATA_B64\s+(.*?)\s+-->").unwrap());

static LEGACY_PAYLOAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!-- WSU_NEWSLETTER_DATA:(.*?) -->").unwrap());

/// Which embedding an imported document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedFormat {
    /// Wrapped base64 block.
    Base64,
    /// Raw JSON in a single-line comment.
    Legacy,
}

impl fmt::Display for EmbeddedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base64 => "base64",
            Self::Legacy => "legacy",
        })
    }
}

/// A document read back from exported HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Imported {
    pub document: Document,
    pub format: EmbeddedFormat,
    /// The migrated payload exactly as embedded, without defaults filled in.
    pub payload: Value,
}

/// Extract the embedded document from exported HTML.
///
/// The base64 payload takes precedence over the legacy one. The decoded
/// payload is migrated to the current schema before deserialization.
///
/// # Errors
///
/// - [`CodecError::NotFound`] if no payload comment exists.
/// - [`CodecError::Corrupted`] if the base64 payload does not decode to JSON.
/// - [`CodecError::InvalidJson`] if the legacy payload is not JSON.
/// - [`CodecError::Malformed`] if the JSON does not describe a document.
pub fn import_html(html: &str) -> Result<Imported, CodecError> {
    let (mut payload, format) = if let Some(caps) = PAYLOAD_RE.captures(html) {
        (decode_base64_payload(&caps[1])?, EmbeddedFormat::Base64)
    } else if let Some(caps) = LEGACY_PAYLOAD_RE.captures(html) {
        let payload = serde_json::from_str(&caps[1]).map_err(CodecError::InvalidJson)?;
        (payload, EmbeddedFormat::Legacy)
    } else {
        return Err(CodecError::NotFound);
    };

    let report = migrate(&mut payload);
    let document: Document =
        serde_json::from_value(payload.clone()).map_err(CodecError::Malformed)?;

    tracing::info!(
        %format,
        sections = document.sections.len(),
        migrated = report.changed(),
        "Imported embedded document"
    );
    Ok(Imported {
        document,
        format,
        payload,
    })
}

fn decode_base64_payload(block: &str) -> Result<Value, CodecError> {
    let compact: String = block.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64_STANDARD
        .decode(compact)
        .map_err(CodecError::corrupted)?;
    let json = String::from_utf8(bytes).map_err(CodecError::corrupted)?;
    serde_json::from_str(&json).map_err(CodecError::corrupted)
}
