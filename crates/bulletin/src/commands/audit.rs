//! `bulletin validate` and `bulletin stats` command implementations.

use std::fmt::Write;
use std::path::Path;

use bulletin_audit::{ContentStats, Severity, ValidationReport, stats, validate};
use bulletin_config::Config;
use clap::Args;

use super::DocumentInput;
use crate::error::CliError;
use crate::output::{Output, emit};

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    #[command(flatten)]
    document: DocumentInput,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or has error-level
    /// issues. Warnings alone succeed.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(config_path, None)?;
        let doc = self.document.load(&config)?;

        let report = validate(&doc);
        if self.json {
            emit(None, &serde_json::to_string_pretty(&report)?)?;
        } else {
            print_report(&output, &report);
        }

        if report.passed() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} error(s) found",
                report.errors
            )))
        }
    }
}

fn print_report(output: &Output, report: &ValidationReport) {
    for issue in &report.issues {
        let line = format!("[{}] {}\n    fix: {}", issue.location, issue.message, issue.fix);
        match issue.severity {
            Severity::Error => output.error(&line),
            Severity::Warning => output.warning(&line),
        }
    }

    if report.total == 0 {
        output.success("No issues found.");
    } else {
        output.highlight(&format!(
            "\n{} issue(s): {} error(s), {} warning(s)",
            report.total, report.errors, report.warnings
        ));
    }
}

/// Arguments for the stats command.
#[derive(Args)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    document: DocumentInput,

    /// Print the statistics as JSON.
    #[arg(long)]
    json: bool,
}

impl StatsArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let doc = self.document.load(&config)?;

        let stats = stats(&doc);
        let text = if self.json {
            serde_json::to_string_pretty(&stats)?
        } else {
            format_stats(&stats)
        };
        emit(None, &text)?;
        Ok(())
    }
}

fn format_stats(stats: &ContentStats) -> String {
    let mut text = String::new();
    for (label, value) in [
        ("Words", stats.word_count),
        ("Images", stats.image_count),
        ("Links", stats.link_count),
        ("Cards", stats.card_count),
        ("Sections", stats.section_count),
        ("Social links", stats.social_links),
    ] {
        let _ = writeln!(text, "{label:<14}{value}");
    }
    let _ = writeln!(text, "{:<14}{} min", "Read time", stats.read_time_minutes);
    text
}
