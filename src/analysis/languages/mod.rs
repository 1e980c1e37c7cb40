//! Language-specific analyzer implementations.

mod go;

pub use go::GoAnalyzer;

use super::LanguageAnalyzer;
use once_cell::sync::OnceCell;

/// Static storage for Go analyzer.
static GO_ANALYZER: OnceCell<GoAnalyzer> = OnceCell::new();

/// Get an analyzer for the given file extension.
///
/// Returns None if no analyzer is registered for the extension.
pub fn get_analyzer(ext: &str) -> Option<&'static dyn LanguageAnalyzer> {
    match ext {
        "go" => Some(GO_ANALYZER.get_or_init(GoAnalyzer::new) as &'static dyn LanguageAnalyzer),
        _ => None,
    }
}

/// Get the analyzer used when no language is requested.
pub fn default_analyzer() -> &'static dyn LanguageAnalyzer {
    GO_ANALYZER.get_or_init(GoAnalyzer::new)
}
