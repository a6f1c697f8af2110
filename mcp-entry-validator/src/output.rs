//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is left to the caller.

use std::io::Write;

use crate::error::ErrorCategory;
use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  MCP SERVER ENTRY VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files checked:  {}", report.checked_files)?;
    writeln!(writer, "  Files passed:   {}", report.passed_files())?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer)?;

    if !report.failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  VALIDATION ERRORS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for failure in &report.failures {
            writeln!(writer, "{}", failure.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed validation",
            report.checked_files
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} file(s) failed validation",
            report.failed_files
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;

        if report.count_in(ErrorCategory::Structural) > 0 {
            writeln!(
                writer,
                "    - Entries live at servers/<server-name>/mcp-server.md"
            )?;
        }
        if report.count_in(ErrorCategory::Syntactic) > 0 {
            writeln!(
                writer,
                "    - Start the file with a YAML block between two --- lines"
            )?;
        }
        if report.count_in(ErrorCategory::Schema) > 0 {
            writeln!(
                writer,
                "    - Required: repo, category, language, start_command, build_command"
            )?;
            writeln!(
                writer,
                "    - repo must be https://github.com/<owner>/<repo>"
            )?;
        }
        if report.count_in(ErrorCategory::External) > 0 {
            writeln!(
                writer,
                "    - Make sure the GitHub repository is public and spelled correctly"
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn failing_report() -> ValidationReport {
        ValidationReport::from_outcomes(vec![
            ("servers/ok/mcp-server.md".to_owned(), None),
            (
                "servers/bad/mcp-server.md".to_owned(),
                Some(ValidationError::RepositoryNotAccessible {
                    path: "servers/bad/mcp-server.md".to_owned(),
                    repo: "https://github.com/acme/missing".to_owned(),
                    status: 404,
                }),
            ),
        ])
    }

    #[test]
    fn test_human_output_lists_failures_and_hints() {
        let mut out = Vec::new();
        write_human(&failing_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Files checked:  2"));
        assert!(text.contains("servers/bad/mcp-server.md: [external]"));
        assert!(text.contains("1 file(s) failed validation"));
        assert!(text.contains("GitHub repository is public"));
        assert!(!text.contains("Required: repo"));
    }

    #[test]
    fn test_human_output_success() {
        let report =
            ValidationReport::from_outcomes(vec![("servers/ok/mcp-server.md".to_owned(), None)]);
        let mut out = Vec::new();
        write_human(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("All 1 files passed validation"));
        assert!(!text.contains("VALIDATION ERRORS"));
    }

    #[test]
    fn test_json_output_shape() {
        let mut out = Vec::new();
        write_json(&failing_report(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["checked_files"], 2);
        assert_eq!(value["ok"], false);
        assert_eq!(value["failures"][0]["category"], "external");
        assert_eq!(value["failures"][0]["file"], "servers/bad/mcp-server.md");
    }
}
