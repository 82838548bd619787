//! Upgrades for payloads written by older exports.
//!
//! Migrations operate on raw JSON before typed deserialization so they can
//! reshape fields the current model no longer accepts. Every step is
//! idempotent; running [`migrate`] on current data changes nothing.

use serde_json::{Map, Value, json};

/// Social platforms in the order the old keyed footer rendered them.
const LEGACY_PLATFORMS: [&str; 5] = ["instagram", "linkedin", "facebook", "twitter", "youtube"];

const DEFAULT_TITLE_ALIGN: &str = "left";

/// What [`migrate`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Number of entries produced when a keyed social map became a list.
    pub social_links_converted: Option<usize>,
    /// Number of section layouts that gained a `title_align`.
    pub title_aligns_added: usize,
}

impl MigrationReport {
    /// Whether any step modified the payload.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.social_links_converted.is_some() || self.title_aligns_added > 0
    }
}

/// Bring a raw document payload up to the current schema.
///
/// - `footer.social` given as a map keyed by platform becomes an ordered
///   list of `{platform, url, icon, alt}` entries. Known platforms come
///   first in their legacy order; unknown keys are dropped.
/// - Section layouts without `title_align` get `"left"`.
///
/// Values that are not objects are left untouched.
pub fn migrate(payload: &mut Value) -> MigrationReport {
    let mut report = MigrationReport::default();

    if let Some(social) = payload
        .get_mut("footer")
        .and_then(|footer| footer.get_mut("social"))
        && let Some(map) = social.as_object()
    {
        let links = social_map_to_list(map);
        tracing::info!(count = links.len(), "Migrated keyed social links to list");
        report.social_links_converted = Some(links.len());
        *social = Value::Array(links);
    }

    if let Some(sections) = payload.get_mut("sections").and_then(Value::as_array_mut) {
        for section in sections {
            let Some(layout) = section.get_mut("layout").and_then(Value::as_object_mut) else {
                continue;
            };
            if !layout.contains_key("title_align") {
                layout.insert("title_align".to_owned(), json!(DEFAULT_TITLE_ALIGN));
                report.title_aligns_added += 1;
            }
        }
    }
    if report.title_aligns_added > 0 {
        tracing::info!(
            count = report.title_aligns_added,
            "Added default title alignment to section layouts"
        );
    }

    report
}

fn social_map_to_list(map: &Map<String, Value>) -> Vec<Value> {
    LEGACY_PLATFORMS
        .iter()
        .filter_map(|&key| {
            let entry = map.get(key)?;
            let name = capitalize(key);
            match entry {
                Value::String(url) => Some(json!({
                    "platform": name,
                    "url": url,
                    "icon": "",
                    "alt": name,
                })),
                Value::Object(fields) => {
                    let text = |field: &str, default: &str| {
                        fields
                            .get(field)
                            .and_then(Value::as_str)
                            .unwrap_or(default)
                            .to_owned()
                    };
                    Some(json!({
                        "platform": name,
                        "url": text("url", ""),
                        "icon": text("icon", ""),
                        "alt": text("alt", &name),
                    }))
                }
                _ => None,
            }
        })
        .collect()
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_social_map_becomes_ordered_list() {
        let mut payload = json!({
            "footer": {
                "social": {
                    "facebook": "https://fb.example",
                    "instagram": {"url": "https://ig.example", "icon": "ig.png"},
                    "myspace": "https://myspace.example",
                    "twitter": "",
                }
            }
        });

        let report = migrate(&mut payload);

        assert_eq!(report.social_links_converted, Some(3));
        assert_eq!(
            payload["footer"]["social"],
            json!([
                {"platform": "Instagram", "url": "https://ig.example", "icon": "ig.png", "alt": "Instagram"},
                {"platform": "Facebook", "url": "https://fb.example", "icon": "", "alt": "Facebook"},
                {"platform": "Twitter", "url": "", "icon": "", "alt": "Twitter"},
            ])
        );
    }

    #[test]
    fn test_empty_url_entries_are_kept() {
        let mut payload = json!({
            "footer": {"social": {"instagram": "", "facebook": "https://fb.example"}}
        });

        let report = migrate(&mut payload);

        assert_eq!(report.social_links_converted, Some(2));
        assert_eq!(payload["footer"]["social"][0]["platform"], "Instagram");
        assert_eq!(payload["footer"]["social"][0]["url"], "");
        assert_eq!(payload["footer"]["social"][1]["url"], "https://fb.example");
    }

    #[test]
    fn test_explicit_alt_is_kept() {
        let mut payload = json!({
            "footer": {"social": {"linkedin": {"url": "u", "alt": ""}}}
        });
        migrate(&mut payload);
        assert_eq!(payload["footer"]["social"][0]["alt"], json!(""));
        assert_eq!(payload["footer"]["social"][0]["platform"], json!("Linkedin"));
    }

    #[test]
    fn test_title_align_added_only_to_existing_layouts() {
        let mut payload = json!({
            "sections": [
                {"key": "a", "layout": {"padding_top": 10}},
                {"key": "b"},
                {"key": "c", "layout": {"title_align": "center"}},
                {"key": "d", "layout": null},
            ]
        });

        let report = migrate(&mut payload);

        assert_eq!(report.title_aligns_added, 1);
        assert_eq!(payload["sections"][0]["layout"]["title_align"], json!("left"));
        assert!(payload["sections"][1].get("layout").is_none());
        assert_eq!(payload["sections"][2]["layout"]["title_align"], json!("center"));
        assert!(payload["sections"][3]["layout"].is_null());
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let mut payload = json!({
            "footer": {"social": {"youtube": "https://yt.example"}},
            "sections": [{"key": "a", "layout": {}}],
        });

        assert!(migrate(&mut payload).changed());
        let once = payload.clone();
        let report = migrate(&mut payload);

        assert!(!report.changed());
        assert_eq!(payload, once);
    }

    #[test]
    fn test_non_object_payload_untouched() {
        let mut payload = json!([1, 2, 3]);
        assert!(!migrate(&mut payload).changed());
        assert_eq!(payload, json!([1, 2, 3]));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("instagram"), "Instagram");
        assert_eq!(capitalize("YOUTUBE"), "Youtube");
        assert_eq!(capitalize(""), "");
    }
}
