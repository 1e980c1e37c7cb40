//! File selection: which directories are entered and which files are analyzed.

use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::analysis::default_analyzer;
use crate::config::Options;
use crate::{Error, Result};

/// Directories never entered when recursing: version control metadata,
/// test fixtures and vendored dependencies.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "testdata", "vendor"];

/// Go-style package pattern suffix requesting a recursive walk.
const RECURSIVE_SUFFIX: &str = "...";

/// Outcome of the directory decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirDecision {
    Descend,
    SkipSubtree,
}

/// A root given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub recursive: bool,
}

impl Target {
    pub fn new<P: Into<PathBuf>>(path: P, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }

    /// Parse a path argument. `dir/...` walks `dir` recursively and a bare
    /// `...` means the current directory.
    pub fn parse(arg: &str) -> Self {
        match arg.strip_suffix(RECURSIVE_SUFFIX) {
            Some(rest) => {
                let path = match rest.trim_end_matches('/') {
                    "" if rest.starts_with('/') => "/",
                    "" => ".",
                    dir => dir,
                };
                Self::new(path, true)
            }
            None => Self::new(arg, false),
        }
    }
}

/// Decides which paths take part in the analysis.
pub struct Walker {
    recursive: bool,
    include_tests: bool,
    skip_dirs: Vec<String>,
    excludes: Vec<GlobMatcher>,
    extension: &'static str,
    test_suffix: &'static str,
}

impl Walker {
    /// Create a walker for the default language with the fixed deny-list.
    pub fn new(options: &Options) -> Self {
        let analyzer = default_analyzer();
        Self {
            recursive: options.recursive,
            include_tests: options.include_tests,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            excludes: compile_excludes(&options.exclude_patterns),
            extension: analyzer.file_extensions()[0],
            test_suffix: analyzer.test_file_suffix(),
        }
    }

    /// Replace the directory deny-list.
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Decision for a directory below the walk root.
    pub fn skip_dir(&self, path: &Path, recursive: bool) -> DirDecision {
        if !recursive {
            return DirDecision::SkipSubtree;
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if self.skip_dirs.iter().any(|d| d == name) {
            debug!(dir = %path.display(), "skipping excluded directory");
            return DirDecision::SkipSubtree;
        }

        DirDecision::Descend
    }

    /// Whether a file is left out of the analysis.
    pub fn skip_file(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != self.extension {
            return true;
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !self.include_tests && name.ends_with(self.test_suffix) {
            debug!(file = %path.display(), "skipping test file");
            return true;
        }

        if self.excludes.iter().any(|m| m.is_match(name)) {
            debug!(file = %path.display(), "skipping excluded file");
            return true;
        }

        false
    }

    /// Collect the files of one target in file-name order.
    ///
    /// A target naming a file is returned as-is.
    pub fn collect_files(&self, target: &Target) -> Result<Vec<PathBuf>> {
        let root = target.path.as_path();
        let metadata = std::fs::metadata(root).map_err(|e| Error::io(root, e))?;
        if !metadata.is_dir() {
            return Ok(vec![root.to_path_buf()]);
        }

        let recursive = target.recursive || self.recursive;
        let mut files = Vec::new();

        // Symlinks are not followed, so the walk stays inside the root tree.
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // The root itself is always visited
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || self.skip_dir(e.path(), recursive) == DirDecision::Descend
            })
        {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            if entry.file_type().is_file() && !self.skip_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Compile exclude globs. A malformed pattern is dropped with a warning, so
/// it matches nothing and the run continues.
///
/// Patterns use globset syntax, which also accepts `{a,b}` alternation; Go's
/// `filepath.Match` treats braces literally.
fn compile_excludes(patterns: &[String]) -> Vec<GlobMatcher> {
    patterns
        .iter()
        .filter_map(|pattern| {
            match GlobBuilder::new(pattern).literal_separator(true).build() {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(source) => {
                    let err = Error::Pattern {
                        pattern: pattern.clone(),
                        source,
                    };
                    warn!("{}; pattern ignored", err);
                    None
                }
            }
        })
        .collect()
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    Error::io(path, source)
}
