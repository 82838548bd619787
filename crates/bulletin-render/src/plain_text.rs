//! Plain-text composer.
//!
//! Walks the document independently of the HTML composer; the two views are
//! allowed to differ in formatting.

use bulletin_config::Config;
use bulletin_model::{Card, Document, Section};

use crate::text::html_to_plain_text;

/// Width of the `=` rules around the body.
const RULE_WIDTH: usize = 60;

/// Compose the plain-text alternative of a newsletter.
///
/// # Examples
///
/// ```
/// use bulletin_config::Config;
/// use bulletin_model::Document;
/// use bulletin_render::compose_plain_text;
///
/// let mut doc = Document::default();
/// doc.masthead.title = "Friday Focus".to_owned();
///
/// let text = compose_plain_text(&doc, &Config::default());
/// assert!(text.starts_with("FRIDAY FOCUS\n"));
/// ```
pub fn compose_plain_text(doc: &Document, config: &Config) -> String {
    let mut parts: Vec<String> = Vec::new();
    let rule = format!("\n{}\n", "=".repeat(RULE_WIDTH));

    let masthead = &doc.masthead;
    if !masthead.title.is_empty() {
        parts.push(masthead.title.to_uppercase());
    }
    if !masthead.tagline.is_empty() {
        parts.push(masthead.tagline.clone());
    }
    if !masthead.preheader.is_empty() {
        parts.push(masthead.preheader.clone());
    }
    parts.push(rule.clone());

    for section in &doc.sections {
        push_section(&mut parts, section);
    }

    parts.push(rule);
    parts.extend(doc.footer.address_lines.iter().cloned());
    for link in &doc.footer.social {
        if link.url.is_empty() {
            continue;
        }
        let platform = if link.platform.is_empty() {
            "Social"
        } else {
            &link.platform
        };
        parts.push(format!("{platform}: {}", link.url));
    }

    let org = &config.organization;
    parts.push(format!("\n{}: {}", org.website_label, org.website));
    parts.join("\n")
}

fn push_section(parts: &mut Vec<String>, section: &Section) {
    let title = &section.title;
    if !title.is_empty() {
        parts.push(format!(
            "\n{}\n{}\n",
            title.to_uppercase(),
            "-".repeat(title.chars().count())
        ));
    }

    if section.is_closures() {
        for closure in &section.closures {
            let date = closure.date.trim();
            let reason = closure.reason.trim();
            if !date.is_empty() || !reason.is_empty() {
                parts.push(format!("• {date} - {reason}"));
            }
        }
        return;
    }

    for card in &section.cards {
        push_card(parts, card);
    }
}

fn push_card(parts: &mut Vec<String>, card: &Card) {
    if !card.title.is_empty() {
        parts.push(format!("\n{}", card.title));
    }
    if !card.body_html.is_empty() {
        parts.push(html_to_plain_text(&card.body_html));
    }
    for (label, value) in [
        ("Location", &card.location),
        ("Date", &card.date),
        ("Time", &card.time),
    ] {
        if !value.is_empty() {
            parts.push(format!("{label}: {value}"));
        }
    }
    for (label, url) in card.links.iter().filter_map(|link| link.usable()) {
        if url != "#" {
            parts.push(format!("{label}: {url}"));
        }
    }
    parts.push(String::new());
}
