use std::sync::LazyLock;

use bulletin_model::Document;
use regex::Regex;
use serde::Serialize;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

const WORDS_PER_MINUTE: f64 = 200.0;

/// Size summary of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub word_count: usize,
    pub read_time_minutes: u64,
    pub image_count: usize,
    pub link_count: usize,
    pub card_count: usize,
    pub section_count: usize,
    pub social_links: usize,
}

/// Count words, images and links in a document.
///
/// Words come from card bodies with tags removed. Images are the banner,
/// shown card icons that have a URL and social links with an icon. Read time
/// assumes 200 words per minute, rounded half to even, and is never below one
/// minute.
#[must_use]
pub fn stats(doc: &Document) -> ContentStats {
    let mut stats = ContentStats {
        section_count: doc.sections.len(),
        social_links: doc.footer.social.len(),
        ..ContentStats::default()
    };

    if !doc.masthead.banner_url.is_empty() {
        stats.image_count += 1;
    }

    for card in doc.sections.iter().flat_map(|section| &section.cards) {
        stats.card_count += 1;
        stats.word_count += TAG_RE
            .replace_all(&card.body_html, "")
            .split_whitespace()
            .count();
        if card.icon.show_icon && !card.icon.icon_url.is_empty() {
            stats.image_count += 1;
        }
        stats.link_count += card.links.len();
    }

    stats.image_count += doc
        .footer
        .social
        .iter()
        .filter(|link| !link.icon.is_empty())
        .count();
    stats.read_time_minutes = read_time(stats.word_count);
    stats
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn read_time(words: usize) -> u64 {
    let minutes = (words as f64 / WORDS_PER_MINUTE).round_ties_even() as u64;
    minutes.max(1)
}
