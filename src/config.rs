//! Resolved run configuration.
//!
//! Flags are resolved once into an [`Options`] value that stays read-only for
//! the rest of the run.

use std::path::is_separator;

use crate::check::Visibility;
use crate::{Error, Result};

/// Parameter thresholds per visibility class. `None` disables the class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub public: Option<usize>,
    pub private: Option<usize>,
}

impl Limits {
    /// No threshold for either class.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// The same threshold for both classes.
    pub fn uniform(max: usize) -> Self {
        Self {
            public: Some(max),
            private: Some(max),
        }
    }

    /// Resolve `--max`, `--private-max` and `--public-max` into thresholds.
    ///
    /// An explicit per-class value wins over `max`; `max` fills in whichever
    /// class was not given.
    pub fn resolve(max: Option<usize>, private_max: Option<usize>, public_max: Option<usize>) -> Self {
        Self {
            public: public_max.or(max),
            private: private_max.or(max),
        }
    }

    /// Threshold for the given class.
    pub fn threshold(&self, visibility: Visibility) -> Option<usize> {
        match visibility {
            Visibility::Public => self.public,
            Visibility::Private => self.private,
        }
    }

    /// Whether neither class has a threshold.
    pub fn is_unlimited(&self) -> bool {
        no_limit_is_set(&[self.public, self.private])
    }
}

/// Whether every given limit is unset.
pub fn no_limit_is_set(limits: &[Option<usize>]) -> bool {
    limits.iter().all(Option::is_none)
}

/// Split a comma-separated exclude list, dropping blank entries.
///
/// Patterns are matched against file base names, so an entry containing a
/// path separator could never match and is rejected.
pub fn parse_excludes(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.chars().any(is_separator) {
                Err(Error::Config(format!(
                    "exclude pattern {:?} contains a path separator; patterns match file names only",
                    p
                )))
            } else {
                Ok(p.to_string())
            }
        })
        .collect()
}

/// Options shared by the walker and the checker.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub limits: Limits,
    /// Glob patterns matched against file base names.
    pub exclude_patterns: Vec<String>,
    /// Descend into subdirectories of each root.
    pub recursive: bool,
    /// Analyze `_test.go` files too.
    pub include_tests: bool,
}

impl Options {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    pub fn exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }
}
