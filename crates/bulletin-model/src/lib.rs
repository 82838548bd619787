//! Newsletter document model.
//!
//! A [`Document`] is the JSON-compatible tree every Bulletin operation consumes:
//! the HTML and plain-text composers, the export codec and the audit checks.
//! Optional fields deserialize to their empty value, so a partially filled
//! document is valid input. A value of the wrong JSON type is a
//! [`ModelError::Malformed`] error.
//!
//! # Example
//!
//! ```
//! use bulletin_model::{CardKind, Document};
//!
//! let doc = Document::from_json(r#"{"template": "ff", "sections": [
//!     {"key": "news", "title": "News", "cards": [{"type": "event", "title": "Mixer"}]}
//! ]}"#).unwrap();
//!
//! assert_eq!(doc.sections[0].cards[0].kind, CardKind::Event);
//! ```

pub mod defaults;
mod document;
mod error;
mod padding;

pub use document::{
    Card, CardKind, CardStyle, Closure, CtaButton, Document, Footer, Link, Masthead,
    ResourceIcon, Section, SectionLayout, Settings, SettingsColors, SettingsTypography,
    SocialLink, TemplateKind,
};
pub use error::ModelError;
pub use padding::{PaddingOverride, coerce_int};
