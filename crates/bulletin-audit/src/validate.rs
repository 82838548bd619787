//! Accessibility and content validation.

use bulletin_model::{Card, CardKind, Document, Section};
use serde::Serialize;

/// Preheaders longer than this are truncated by most inbox previews.
const MAX_PREHEADER_CHARS: usize = 90;

const UNTITLED_SECTION: &str = "Untitled Section";
const UNTITLED_CARD: &str = "Untitled Card";

/// How serious an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// Human-readable place in the document: `Masthead`, `Footer` or a
    /// section title.
    pub location: String,
    /// Suggested remedy.
    pub fix: String,
}

impl Issue {
    fn new(
        severity: Severity,
        message: impl Into<String>,
        location: impl Into<String>,
        fix: &str,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            location: location.into(),
            fix: fix.to_owned(),
        }
    }
}

/// All issues found in a document, with totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl ValidationReport {
    fn from_issues(issues: Vec<Issue>) -> Self {
        let errors = issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count();
        Self {
            total: issues.len(),
            warnings: issues.len() - errors,
            errors,
            issues,
        }
    }

    /// True when no errors were found. Warnings do not count.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Check a document for accessibility and content problems.
///
/// Issues are reported in document order: masthead, then each card of each
/// section, then footer social links.
#[must_use]
pub fn validate(doc: &Document) -> ValidationReport {
    let mut issues = Vec::new();

    let masthead = &doc.masthead;
    if masthead.banner_alt.is_empty() {
        issues.push(Issue::new(
            Severity::Error,
            "Banner image missing alt text",
            "Masthead",
            "Add descriptive alt text for screen readers",
        ));
    }
    let preheader_len = masthead.preheader.chars().count();
    if preheader_len > MAX_PREHEADER_CHARS {
        issues.push(Issue::new(
            Severity::Warning,
            format!("Preheader text is {preheader_len} characters (optimal: 40-90)"),
            "Masthead",
            "Shorten preheader for better inbox preview",
        ));
    }

    for section in &doc.sections {
        for card in &section.cards {
            check_card(&mut issues, section, card);
        }
    }

    for (idx, link) in doc.footer.social.iter().enumerate() {
        if link.alt.trim().is_empty() {
            let platform = if link.platform.is_empty() {
                "Unknown"
            } else {
                &link.platform
            };
            issues.push(Issue::new(
                Severity::Warning,
                format!("Social link #{} ({platform}) missing alt text", idx + 1),
                "Footer",
                "Add descriptive alt text for accessibility",
            ));
        }
    }

    let report = ValidationReport::from_issues(issues);
    tracing::debug!(
        errors = report.errors,
        warnings = report.warnings,
        "Validated document"
    );
    report
}

fn check_card(issues: &mut Vec<Issue>, section: &Section, card: &Card) {
    let location = or_untitled(&section.title, UNTITLED_SECTION);
    let card_title = or_untitled(&card.title, UNTITLED_CARD);

    for link in &card.links {
        if link.url.is_empty() || link.url == "#" {
            issues.push(Issue::new(
                Severity::Warning,
                format!("Placeholder link in '{card_title}'"),
                location,
                "Replace '#' with actual URL or remove link",
            ));
        }
    }
    for link in &card.links {
        if link.label.is_empty() {
            issues.push(Issue::new(
                Severity::Error,
                format!("Link missing label in '{card_title}'"),
                location,
                "Add descriptive link text",
            ));
        }
    }

    if card.kind == CardKind::Resource && card.icon.show_icon && card.icon.icon_alt.is_empty() {
        issues.push(Issue::new(
            Severity::Error,
            format!("Resource icon missing alt text in '{card_title}'"),
            location,
            "Add descriptive alt text for icon",
        ));
    }
}

fn or_untitled<'a>(title: &'a str, fallback: &'a str) -> &'a str {
    if title.trim().is_empty() {
        fallback
    } else {
        title
    }
}
