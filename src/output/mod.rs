//! Report rendering
//!
//! The presentation layer receives the assembled `DiagnosticReport` and
//! renders it; it never influences probe execution.

pub mod colored;
pub mod plain;

pub use colored::ColoredFormatter;
pub use plain::PlainFormatter;

use crate::error::Result;
use crate::models::DiagnosticReport;

/// Renders a diagnostic report as section-delimited text
pub trait ReportFormatter {
    /// Format the complete report
    fn format_report(&self, report: &DiagnosticReport) -> Result<String>;
}

/// Select a formatter based on the color preference
pub fn formatter_for(enable_color: bool) -> Box<dyn ReportFormatter> {
    if enable_color {
        Box::new(ColoredFormatter::new())
    } else {
        Box::new(PlainFormatter::new())
    }
}

/// Section banner: an `=` rule sized to the title, the indented title, and
/// a closing rule.
pub(crate) fn section_banner(title: &str) -> String {
    let rule = "=".repeat(title.len() + 4);
    format!("\n{}\n  {}\n{}\n", rule, title, rule)
}
