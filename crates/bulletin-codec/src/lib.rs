//! Round-trip codec for exported newsletters.
//!
//! An exported HTML file carries its own editable source: the document is
//! serialized to compact JSON, base64-encoded, wrapped at 100 columns and
//! placed in an HTML comment right before `</body>`:
//!
//! ```text
//! <!-- WSU_NEWSLETTER_DATA_B64
//! eyJ0ZW1wbGF0ZSI6ImZmIiwibWFzdGhlYWQiOnsi...
//! -->
//! ```
//!
//! [`import_html`] reverses the process. It also understands the legacy
//! `<!-- WSU_NEWSLETTER_DATA:{...} -->` form written by older exports, and
//! runs [`migrate`] on every payload before it is deserialized.
//!
//! # Example
//!
//! ```
//! use bulletin_codec::{EmbeddedFormat, embed_document, import_html};
//! use bulletin_model::Document;
//!
//! let doc = Document::default();
//! let html = embed_document("<html><body></body></html>", &doc).unwrap();
//!
//! let imported = import_html(&html).unwrap();
//! assert_eq!(imported.format, EmbeddedFormat::Base64);
//! assert_eq!(imported.document, doc);
//! ```

mod error;
mod export;
mod import;
mod migrate;
mod minify;

pub use error::CodecError;
pub use export::{
    ExportOptions, ExportedFile, embed_document, encode_payload, export_document,
    export_filename, take_export_options,
};
pub use import::{EmbeddedFormat, Imported, import_html};
pub use migrate::{MigrationReport, migrate};
pub use minify::minify_html;

/// Opening marker of the base64 payload comment.
pub const PAYLOAD_MARKER: &str = "<!-- WSU_NEWSLETTER_DATA_B64";

/// Opening marker of the legacy raw JSON payload comment.
pub const LEGACY_PAYLOAD_MARKER: &str = "<!-- WSU_NEWSLETTER_DATA:";

/// Line width of the wrapped base64 payload.
pub const PAYLOAD_LINE_WIDTH: usize = 100;
