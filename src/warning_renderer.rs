//! Terminal rendering of checker diagnostics using ariadne.
//!
//! Each diagnostic becomes one report: the match expression is labelled with
//! the headline, and every finding is listed as a note underneath.

use crate::{Diagnostic, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render diagnostics with colors to stderr.
///
/// # Example
/// ```no_run
/// use quire::render_diagnostics;
///
/// let source = "match flag with | true -> 1";
/// let diagnostics = Vec::new();
/// render_diagnostics(source, &diagnostics);
/// ```
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    render_diagnostics_to_writer(source, diagnostics, &mut std::io::stderr(), true).ok();
}

/// Render diagnostics to a specific writer.
pub fn render_diagnostics_to(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_diagnostics_to_writer(source, diagnostics, writer, true)
}

/// Render diagnostics to a String (useful for editors, logs, etc.)
pub fn render_diagnostics_to_string(
    source: &str,
    diagnostics: &[Diagnostic],
    use_color: bool,
) -> String {
    let mut buf = Vec::new();
    render_diagnostics_to_writer(source, diagnostics, &mut buf, use_color).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render diagnostics to a String without color codes (useful for tests)
pub fn render_diagnostics_to_string_no_color(source: &str, diagnostics: &[Diagnostic]) -> String {
    render_diagnostics_to_string(source, diagnostics, false)
}

fn render_diagnostics_to_writer(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Warning => ReportKind::Warning,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message("in this match")
                .with_color(color),
        );

        for note in &diag.notes {
            report = report.with_note(note);
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow so the writer is not moved into the first report.
        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
