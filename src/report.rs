//! Output formatting for paramlimit results.
//!
//! Supports two output formats:
//! - Text: one `file:line:col: message` line per issue, colored on terminals
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;
use std::io::Write;

use crate::check::{Issue, RunSummary};

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON report structure.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub files_scanned: usize,
    pub issue_count: usize,
    pub issues: &'a [Issue],
}

/// Write results in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &RunSummary,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, summary, color),
        OutputFormat::Json => write_json(out, summary),
    }
}

/// One line per issue. Nothing is written when there are no issues.
pub fn write_text<W: Write>(out: &mut W, summary: &RunSummary, color: bool) -> anyhow::Result<()> {
    for issue in &summary.issues {
        writeln!(out, "{}", format_issue(issue, color))?;
    }
    Ok(())
}

/// Write results as a single JSON document.
pub fn write_json<W: Write>(out: &mut W, summary: &RunSummary) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        files_scanned: summary.files_scanned,
        issue_count: summary.issues.len(),
        issues: &summary.issues,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn format_issue(issue: &Issue, color: bool) -> String {
    if !color {
        return issue.to_string();
    }

    format!(
        "{}: {} {} has {} parameters (max {})",
        issue.location().bold(),
        issue.kind,
        issue.name.cyan(),
        issue.count.to_string().red(),
        issue.limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::DeclarationKind;
    use crate::check::Visibility;

    fn summary() -> RunSummary {
        let mut summary = RunSummary::new();
        summary.add_file(vec![Issue {
            file: "foo.go".to_string(),
            name: "localFunction".to_string(),
            kind: DeclarationKind::Function,
            visibility: Visibility::Private,
            count: 3,
            limit: 1,
            line: 4,
            column: 1,
        }]);
        summary.add_file(vec![]);
        summary
    }

    #[test]
    fn test_write_text_plain() {
        let mut out = Vec::new();
        write_text(&mut out, &summary(), false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "foo.go:4:1: function localFunction has 3 parameters (max 1)\n"
        );
    }

    #[test]
    fn test_write_text_empty() {
        let mut out = Vec::new();
        write_text(&mut out, &RunSummary::new(), false).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &summary()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["issue_count"], 1);
        assert_eq!(value["issues"][0]["name"], "localFunction");
        assert_eq!(value["issues"][0]["kind"], "function");
        assert_eq!(value["issues"][0]["visibility"], "private");
        assert_eq!(value["issues"][0]["count"], 3);
        assert_eq!(value["issues"][0]["limit"], 1);
    }
}
