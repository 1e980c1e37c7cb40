//! Orchestrates file selection, parsing and parameter checks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::analyze_path;
use crate::check::{check_params, GoVisibility, Issue, RunSummary, VisibilityRule};
use crate::config::Options;
use crate::walk::{Target, Walker};
use crate::Result;

/// Parse one file and check its declarations.
///
/// Read and parse failures are returned unchanged; there are no partial
/// results.
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &Options) -> Result<Vec<Issue>> {
    Runner::new(options.clone()).analyze_file(path.as_ref())
}

/// Executes the check against a set of targets.
pub struct Runner {
    options: Options,
    walker: Walker,
    visibility: Box<dyn VisibilityRule>,
}

impl Runner {
    /// Create a runner using Go's visibility convention.
    pub fn new(options: Options) -> Self {
        let walker = Walker::new(&options);
        Self {
            options,
            walker,
            visibility: Box::new(GoVisibility),
        }
    }

    /// Use a different visibility convention.
    pub fn visibility<V: VisibilityRule + 'static>(mut self, rule: V) -> Self {
        self.visibility = Box::new(rule);
        self
    }

    /// Use a custom walker (e.g. with a different directory deny-list).
    pub fn walker(mut self, walker: Walker) -> Self {
        self.walker = walker;
        self
    }

    /// Collect the files of every target, in target order, without duplicates.
    pub fn collect_files(&self, targets: &[Target]) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for target in targets {
            for file in self.walker.collect_files(target)? {
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        }

        Ok(files)
    }

    /// Check a single file.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<Issue>> {
        debug!(file = %path.display(), "analyzing");
        let facts = analyze_path(path)?;
        Ok(check_params(
            &facts.path,
            &facts.declarations,
            &self.options.limits,
            self.visibility.as_ref(),
        ))
    }

    /// Check every file selected from `targets`.
    ///
    /// Files are analyzed in parallel. Issues keep file enumeration order,
    /// and the first failing file in that order aborts the run.
    pub fn run(&self, targets: &[Target]) -> Result<RunSummary> {
        let files = self.collect_files(targets)?;
        debug!(count = files.len(), "files selected");

        let results: Vec<Result<Vec<Issue>>> = files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect();

        let mut summary = RunSummary::new();
        for result in results {
            summary.add_file(result?);
        }

        Ok(summary)
    }
}
