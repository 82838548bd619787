//! Benchmarks for document composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bulletin_config::Config;
use bulletin_model::{Card, Document, Section, TemplateKind, defaults::default_document};
use bulletin_render::{compose_document, compose_plain_text};

/// Build a document with `sections` sections of `cards` standard cards each.
fn generate_document(sections: usize, cards: usize) -> Document {
    let config = Config::default();
    let mut doc = default_document(TemplateKind::Ff, &config);
    doc.sections = (0..sections)
        .map(|i| Section {
            key: format!("section-{i}"),
            title: format!("Section {i}"),
            cards: (0..cards)
                .map(|j| Card {
                    title: format!("Card {j}"),
                    body_html: format!(
                        "<p>Paragraph {j} with <a href=\"https://example.edu/{j}\">a link</a>.</p>"
                    ),
                    location: "Pullman".to_owned(),
                    ..Card::default()
                })
                .collect(),
            ..Section::default()
        })
        .collect();
    doc
}

fn bench_starter_documents(c: &mut Criterion) {
    let config = Config::default();
    let ff = default_document(TemplateKind::Ff, &config);
    let briefing = default_document(TemplateKind::Briefing, &config);

    c.bench_function("compose_ff_starter", |b| {
        b.iter(|| compose_document(&ff, &config));
    });
    c.bench_function("compose_briefing_starter", |b| {
        b.iter(|| compose_document(&briefing, &config));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("compose_scaling");

    for sections in [1, 5, 20] {
        let doc = generate_document(sections, 5);
        group.bench_with_input(BenchmarkId::new("html", sections), &doc, |b, doc| {
            b.iter(|| compose_document(doc, &config));
        });
        group.bench_with_input(BenchmarkId::new("plain_text", sections), &doc, |b, doc| {
            b.iter(|| compose_plain_text(doc, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_starter_documents, bench_scaling);
criterion_main!(benches);
