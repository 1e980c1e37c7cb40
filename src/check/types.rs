//! Core types for check results.

use serde::Serialize;
use std::fmt;

use crate::analysis::DeclarationKind;

use super::Visibility;

/// A declaration with more parameters than its threshold allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub file: String,
    pub name: String,
    pub kind: DeclarationKind,
    pub visibility: Visibility,
    /// Effective parameter count.
    pub count: usize,
    /// The threshold that was exceeded.
    pub limit: usize,
    pub line: usize,
    pub column: usize,
}

impl Issue {
    pub fn message(&self) -> String {
        format!(
            "{} {} has {} parameters (max {})",
            self.kind, self.name, self.count, self.limit
        )
    }

    /// `file:line:column`
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message())
    }
}

/// Results of one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Number of files analyzed.
    pub files_scanned: usize,
    pub issues: Vec<Issue>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the issues of one file.
    pub fn add_file(&mut self, issues: Vec<Issue>) {
        self.files_scanned += 1;
        self.issues.extend(issues);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
