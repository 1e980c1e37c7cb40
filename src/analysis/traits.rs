//! Core traits for language analysis.

use std::path::{Path, PathBuf};

use crate::Result;

use super::Declaration;

/// Holds a parsed tree-sitter tree and associated metadata.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// Raw file contents, kept for node text extraction.
    pub source: Vec<u8>,
    /// The file path (for error reporting).
    pub path: PathBuf,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }
}

/// Language-specific analyzer trait.
///
/// Note: tree_sitter::Parser is not Sync, so implementations create a
/// parser per call.
pub trait LanguageAnalyzer: Send + Sync {
    /// Returns the language identifier (e.g., "go").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this analyzer handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// File name suffix that marks a test file (e.g., "_test.go").
    fn test_file_suffix(&self) -> &'static str;

    /// Parse a source file into a tree-sitter tree.
    ///
    /// Fails with [`crate::Error::Parse`] if the tree contains syntax errors;
    /// no partial tree is returned.
    fn parse(&self, path: &Path, source: &[u8]) -> Result<ParsedFile>;

    /// Extract top-level function and method declarations in source order.
    fn extract_declarations(&self, parsed: &ParsedFile) -> Result<Vec<Declaration>>;
}
