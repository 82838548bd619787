//! Editorial checks over a newsletter document.
//!
//! [`validate`] reports accessibility and content problems an editor should
//! fix before sending; [`stats`] summarizes the document's size. Neither
//! renders anything.

mod stats;
mod validate;

pub use stats::{ContentStats, stats};
pub use validate::{Issue, Severity, ValidationReport, validate};
