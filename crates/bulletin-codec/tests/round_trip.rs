//! Export-then-import round trips through the full rendering pipeline.

use bulletin_codec::{
    CodecError, EmbeddedFormat, ExportOptions, export_document, import_html, minify_html,
};
use bulletin_config::Config;
use bulletin_model::defaults::default_document;
use bulletin_model::{Card, CardKind, Document, Link, PaddingOverride, Section, TemplateKind};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
}

fn raw_padding() -> PaddingOverride {
    let sides = json!({"top": 5, "right": "7", "bottom": null, "left": 3.9});
    PaddingOverride(sides.as_object().cloned().unwrap_or_default())
}

fn edited_document(config: &Config) -> Document {
    let mut doc = default_document(TemplateKind::Ff, config);
    doc.masthead.title = "Friday Focus: Spring \"Edition\" <2025>".to_owned();
    doc.sections.push(Section {
        key: "extra".to_owned(),
        title: "Extra ünïcödé ✓".to_owned(),
        cards: vec![Card {
            kind: CardKind::Event,
            title: "Poster session".to_owned(),
            body_html: "<p>Line one</p>\n\n<p>Line   two</p>".to_owned(),
            location: "CUE 203".to_owned(),
            links: vec![Link::new("RSVP", "https://example.edu/rsvp?a=1&b=2")],
            padding: Some(raw_padding()),
            ..Card::default()
        }],
        ..Section::default()
    });
    doc
}

#[test]
fn test_round_trip_preserves_document() {
    let config = Config::default();
    let doc = edited_document(&config);

    for minify in [false, true] {
        let options = ExportOptions {
            minify,
            strip_json: false,
        };
        let file = export_document(&doc, &config, options, export_date()).unwrap();
        let imported = import_html(&file.html).unwrap();

        assert_eq!(imported.format, EmbeddedFormat::Base64);
        assert_eq!(imported.document, doc, "minify = {minify}");
    }
}

#[test]
fn test_round_trip_keeps_unknown_card_keys() {
    let config = Config::default();
    let mut doc = edited_document(&config);
    let card = &mut doc.sections.last_mut().unwrap().cards[0];
    card.extra.insert("table_border_style".to_owned(), json!("light"));
    card.extra.insert("table_font_size".to_owned(), json!(14));

    for minify in [false, true] {
        let options = ExportOptions {
            minify,
            strip_json: false,
        };
        let file = export_document(&doc, &config, options, export_date()).unwrap();
        let imported = import_html(&file.html).unwrap();

        let card = &imported.document.sections.last().unwrap().cards[0];
        assert_eq!(card.extra.get("table_border_style"), Some(&json!("light")), "minify = {minify}");
        assert_eq!(card.extra.get("table_font_size"), Some(&json!(14)), "minify = {minify}");
        let last = doc.sections.len() - 1;
        assert_eq!(imported.payload["sections"][last]["cards"][0]["table_font_size"], 14);
        assert_eq!(imported.document, doc, "minify = {minify}");
    }
}

#[test]
fn test_round_trip_briefing_starter() {
    let config = Config::default();
    let doc = default_document(TemplateKind::Briefing, &config);

    let file = export_document(&doc, &config, ExportOptions::default(), export_date()).unwrap();

    assert_eq!(file.filename, "Briefing_2025-03-07.html");
    assert_eq!(import_html(&file.html).unwrap().document, doc);
}

#[test]
fn test_reexport_is_stable() {
    let config = Config::default();
    let doc = edited_document(&config);
    let options = ExportOptions {
        minify: true,
        strip_json: false,
    };

    let first = export_document(&doc, &config, options, export_date()).unwrap();
    let reimported = import_html(&first.html).unwrap().document;
    let second = export_document(&reimported, &config, options, export_date()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_payload_survives_later_minification() {
    let config = Config::default();
    let doc = edited_document(&config);

    let file = export_document(&doc, &config, ExportOptions::default(), export_date()).unwrap();
    let minified = minify_html(&file.html);

    assert_eq!(import_html(&minified).unwrap().document, doc);
}

#[test]
fn test_production_export_cannot_be_imported() {
    let config = Config::default();
    let doc = default_document(TemplateKind::Ff, &config);
    let options = ExportOptions {
        minify: false,
        strip_json: true,
    };

    let file = export_document(&doc, &config, options, export_date()).unwrap();

    assert!(file.filename.ends_with("_PRODUCTION.html"));
    assert!(matches!(import_html(&file.html), Err(CodecError::NotFound)));
}
