//! End-to-end composition of whole documents.

use bulletin_config::Config;
use bulletin_model::{Document, TemplateKind, defaults::default_document};
use bulletin_render::{compose_document, compose_plain_text};

fn deadlines_document() -> Document {
    Document::from_json(
        r#"{
            "template": "ff",
            "sections": [{
                "key": "deadlines",
                "title": "Deadlines",
                "cards": [{
                    "type": "standard",
                    "title": "Thesis submission",
                    "body_html": "<p>Submit by Friday.</p>",
                    "location": "",
                    "date": "",
                    "time": "",
                    "links": []
                }]
            }]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_empty_meta_fields_render_nothing() {
    let config = Config::default();
    let doc = deadlines_document();

    let html = compose_document(&doc, &config);
    assert!(html.contains(">Deadlines</h2>"));
    assert!(html.contains(">Thesis submission</h3>"));
    assert!(!html.contains("<strong>Location:</strong>"));
    assert!(!html.contains("<strong>Date:</strong>"));
    assert!(!html.contains("<strong>Time:</strong>"));

    let text = compose_plain_text(&doc, &config);
    assert!(text.contains("\nThesis submission\nSubmit by Friday.\n"));
    assert!(!text.contains("Location:"));
    assert!(!text.contains("Date:"));
    assert!(!text.contains("Time:"));
}

#[test]
fn test_single_section_has_no_divider() {
    let html = compose_document(&deadlines_document(), &Config::default());
    assert!(!html.contains("border-bottom:2px solid"));
}

#[test]
fn test_starter_documents_render() {
    let config = Config::default();
    for kind in [TemplateKind::Ff, TemplateKind::Briefing] {
        let doc = default_document(kind, &config);
        let html = compose_document(&doc, &config);
        assert_eq!(html, compose_document(&doc, &config));
        assert_eq!(
            html.matches("data-role=\"cta\"").count(),
            2,
            "stylesheet rule plus one button for {kind}"
        );
        assert_eq!(html.matches("<h2 ").count(), doc.sections.len());

        let text = compose_plain_text(&doc, &config);
        assert!(text.contains("Instagram: https://www.instagram.com/gradschoolwsu/"));
    }
}

#[test]
fn test_briefing_closures_render_in_both_views() {
    let config = Config::default();
    let doc = default_document(TemplateKind::Briefing, &config);

    let html = compose_document(&doc, &config);
    assert!(html.contains("<li>Jan 1 – Office closed for New Year&#x27;s Day</li>"));

    let text = compose_plain_text(&doc, &config);
    assert!(text.contains("• Jan 1 - Office closed for New Year's Day"));
    assert!(text.contains("Service Desk: https://jira.esg.wsu.edu/"));
}

#[test]
fn test_raw_body_html_passes_through_but_titles_are_escaped() {
    let doc = Document::from_json(
        r#"{"sections": [{"key": "a", "title": "Q&A", "cards": [
            {"title": "<script>", "body_html": "<p><strong>Bold</strong></p>"}
        ]}]}"#,
    )
    .unwrap();
    let html = compose_document(&doc, &Config::default());
    assert!(html.contains(">Q&amp;A</h2>"));
    assert!(html.contains(">&lt;script&gt;</h3>"));
    assert!(html.contains("<p><strong>Bold</strong></p>"));
}
