//! Audits over the starter documents and JSON report shape.

use bulletin_audit::{Severity, stats, validate};
use bulletin_model::Document;
use pretty_assertions::assert_eq;
use serde_json::json;

const DRAFT: &str = r##"{
    "template": "ff",
    "masthead": {"banner_url": "https://img.example/b.png", "banner_alt": ""},
    "sections": [{
        "key": "events",
        "title": "Events",
        "cards": [{
            "type": "event",
            "title": "Open house",
            "body_html": "<p>Tour the new lab with faculty and students.</p>",
            "links": [{"label": "Details", "url": "#"}]
        }]
    }],
    "footer": {"social": [{"platform": "LinkedIn", "url": "https://li.example", "icon": "li.png", "alt": ""}]}
}"##;

#[test]
fn test_draft_report() {
    let doc = Document::from_json(DRAFT).unwrap();
    let report = validate(&doc);

    assert_eq!((report.total, report.errors, report.warnings), (3, 1, 2));
    assert_eq!(report.issues[0].severity, Severity::Error);
    assert_eq!(report.issues[1].message, "Placeholder link in 'Open house'");
    assert_eq!(report.issues[1].location, "Events");
    assert_eq!(
        report.issues[2].message,
        "Social link #1 (LinkedIn) missing alt text"
    );
}

#[test]
fn test_report_serializes_like_api() {
    let doc = Document::from_json(DRAFT).unwrap();
    let value = serde_json::to_value(validate(&doc)).unwrap();

    assert_eq!(
        value["issues"][0],
        json!({
            "severity": "error",
            "message": "Banner image missing alt text",
            "location": "Masthead",
            "fix": "Add descriptive alt text for screen readers",
        })
    );
    assert_eq!(value["errors"], json!(1));
}

#[test]
fn test_draft_stats() {
    let doc = Document::from_json(DRAFT).unwrap();
    let value = serde_json::to_value(stats(&doc)).unwrap();

    assert_eq!(
        value,
        json!({
            "word_count": 8,
            "read_time_minutes": 1,
            "image_count": 2,
            "link_count": 1,
            "card_count": 1,
            "section_count": 1,
            "social_links": 1,
        })
    );
}
