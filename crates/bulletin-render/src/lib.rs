//! Email-safe newsletter rendering.
//!
//! Turns a [`bulletin_model::Document`] into:
//!
//! - a complete HTML email built from nested presentation tables with inline
//!   styles ([`compose_document`]),
//! - a plain-text alternative ([`compose_plain_text`]).
//!
//! Both composers are pure functions of the document and the injected
//! [`bulletin_config::Config`]; neither reads global state.
//!
//! # Example
//!
//! ```
//! use bulletin_config::Config;
//! use bulletin_model::{TemplateKind, defaults::default_document};
//! use bulletin_render::{compose_document, compose_plain_text};
//!
//! let config = Config::default();
//! let doc = default_document(TemplateKind::Ff, &config);
//!
//! let html = compose_document(&doc, &config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! let text = compose_plain_text(&doc, &config);
//! assert!(text.starts_with("FRIDAY FOCUS NEWSLETTER"));
//! ```

mod blocks;
mod document;
mod palette;
mod plain_text;
mod section;
mod style;
mod text;

use bulletin_config::Config;
use bulletin_model::Settings;

pub use document::compose_document;
pub use plain_text::compose_plain_text;
pub use style::{Padding, card_style, resolve_padding};
pub use text::{escape_text, html_to_plain_text};

use palette::Palette;

/// Inputs shared by every renderer while composing one document.
pub(crate) struct RenderContext<'a> {
    pub config: &'a Config,
    pub settings: &'a Settings,
    pub palette: Palette,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(config: &'a Config, settings: &'a Settings) -> Self {
        Self {
            config,
            settings,
            palette: Palette::new(&config.brand, settings),
        }
    }
}
