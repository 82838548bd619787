//! Inline style strings derived from the brand palette.
//!
//! Email clients ignore most stylesheet rules, so every element carries its
//! own `style` attribute. The strings are computed once per document from the
//! configured palette and typography, with the document's own
//! `settings.colors` and `settings.typography` taking precedence.

use std::fmt::Write;

use bulletin_config::{BrandConfig, ColorPalette};
use bulletin_model::Settings;

/// Base reset for the `<body>` element.
pub(crate) const STYLE_RESET: &str =
    "margin:0; padding:0; -ms-text-size-adjust:100%; -webkit-text-size-adjust:100%;";

/// Base style for every layout table.
pub(crate) const STYLE_TABLE: &str =
    "border-collapse:collapse; mso-table-lspace:0pt; mso-table-rspace:0pt;";

/// Base style for every image.
pub(crate) const STYLE_IMAGE: &str = "-ms-interpolation-mode:bicubic; border:0; outline:none; text-decoration:none; height:auto; line-height:100%; display:block;";

/// Resolved colors and inline styles for one document.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    pub primary: String,
    pub text_muted: String,
    pub bg_light: String,
    pub bg_card: String,
    pub bg_white: String,
    pub border_medium: String,
    pub font_family: String,

    pub link: String,
    pub h2: String,
    pub h3: String,
    pub body_text: String,
    pub meta: String,
    pub location_label: String,
    pub card_accent: String,
}

impl Palette {
    pub(crate) fn new(brand: &BrandConfig, settings: &Settings) -> Self {
        let ColorPalette {
            primary,
            text_dark,
            text_body,
            text_muted,
            bg_light,
            bg_card,
            bg_white,
            border_medium,
            ..
        } = &brand.colors;

        let colors = settings.colors.clone().unwrap_or_default();
        let primary = colors.primary.unwrap_or_else(|| primary.clone());
        let text_dark = colors.text_dark.unwrap_or_else(|| text_dark.clone());
        let text_body = colors.text_body.unwrap_or_else(|| text_body.clone());
        let text_muted = colors.text_muted.unwrap_or_else(|| text_muted.clone());

        let base = &brand.typography;
        let typo = settings.typography.clone().unwrap_or_default();
        let h2_size = typo.h2_size.unwrap_or(base.h2_size);
        let h2_line_height = typo.h2_line_height.unwrap_or(base.h2_line_height);
        let h3_size = typo.h3_size.unwrap_or(base.h3_size);
        let h3_line_height = typo.h3_line_height.unwrap_or(base.h3_line_height);
        let body_size = typo.body_size.unwrap_or(base.body_size);
        let body_line_height = typo.body_line_height.unwrap_or(base.body_line_height);
        let meta_size = typo.meta_size.unwrap_or(base.meta_size);
        let meta_line_height = typo.meta_line_height.unwrap_or(base.meta_line_height);

        Self {
            link: format!("color:{primary}; text-decoration:underline; font-weight:bold;"),
            h2: format!(
                "margin:0 0 20px 0; padding:0; font-weight:bold; font-size:{h2_size}px; line-height:{h2_line_height}; color:{primary};"
            ),
            h3: format!(
                "margin:0 0 10px 0; padding:0; font-weight:bold; font-size:{h3_size}px; line-height:{h3_line_height}; color:{text_dark};"
            ),
            body_text: format!(
                "font-size:{body_size}px; line-height:{body_line_height}; color:{text_body}; margin:0 0 12px 0;"
            ),
            meta: format!(
                "font-size:{meta_size}px; color:{text_muted}; margin:10px 0; line-height:{meta_line_height};"
            ),
            location_label: format!(
                "margin:0 0 5px 0; color:{primary}; font-weight:bold; font-size:14px;"
            ),
            card_accent: format!("width:4px; background-color:{primary};"),
            font_family: typo.font_family.unwrap_or_else(|| base.font_family.clone()),
            primary,
            text_muted,
            bg_light: bg_light.clone(),
            bg_card: bg_card.clone(),
            bg_white: bg_white.clone(),
            border_medium: border_medium.clone(),
        }
    }

    /// Stylesheet for the document `<head>`.
    pub(crate) fn email_css(&self) -> String {
        let mut css = String::with_capacity(2048);
        css.push_str("html, body {\n  margin: 0 !important;\n  padding: 0 !important;\n  height: 100% !important;\n  width: 100% !important;\n}\n");
        css.push_str("* {\n  -ms-text-size-adjust: 100%;\n  -webkit-text-size-adjust: 100%;\n}\n");
        css.push_str("table, td {\n  mso-table-lspace: 0pt;\n  mso-table-rspace: 0pt;\n  border-collapse: collapse;\n}\n");
        css.push_str("img {\n  -ms-interpolation-mode: bicubic;\n  border: 0;\n  outline: none;\n  text-decoration: none;\n  height: auto;\n  line-height: 100%;\n  display: block;\n}\n");
        let _ = write!(
            css,
            "a:not([data-role=\"footer-link\"]):not([data-role=\"cta\"]) {{\n  color: {} !important;\n  text-decoration: underline;\n}}\n",
            self.primary
        );
        css.push_str("a[x-apple-data-detectors],\n.x-apple-data-detectors a {\n  color: inherit !important;\n  text-decoration: inherit !important;\n}\n");
        css.push_str("div[style*=\"margin: 16px 0\"] {\n  margin: 0 !important;\n}\n");
        let _ = write!(
            css,
            "body, table, td {{\n  font-family: {};\n}}\n",
            self.font_family
        );
        css.push_str("@media screen and (max-width: 600px) {\n");
        css.push_str("  .container {\n    width: 100% !important;\n  }\n");
        css.push_str("  .content {\n    padding: 18px 15px 24px !important;\n  }\n");
        css.push_str("  h2 {\n    font-size: 20px !important;\n  }\n");
        css.push_str("  h3 {\n    font-size: 17px !important;\n  }\n");
        css.push_str("  p, li {\n    font-size: 15px !important;\n  }\n");
        css.push_str("}\n");
        css
    }
}
