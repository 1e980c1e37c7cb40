//! AST-backed declaration extraction.
//!
//! This module turns source files into the facts the parameter check
//! consumes: top-level functions and methods with their parameter clauses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Source File     │────▶│ Analyzer     │────▶│ FileFacts     │
//! └─────────────────┘     │ (Go)         │     │ (Declarations,│
//!                         └──────────────┘     │  ParamGroups) │
//!                                              └───────────────┘
//! ```
//!
//! # Adding a New Language
//!
//! 1. Create a new module in `src/analysis/languages/`
//! 2. Implement `LanguageAnalyzer` trait
//! 3. Register the analyzer in `languages/mod.rs`
//! 4. Provide a matching `Visibility` in `crate::check`
//!
//! See `languages/go.rs` for a reference implementation.

mod facts;
mod languages;
mod traits;

use std::path::Path;

use tracing::debug;

pub use facts::{Declaration, DeclarationKind, FileFacts, ParamGroup, Span};
pub use languages::{default_analyzer, get_analyzer, GoAnalyzer};
pub use traits::{LanguageAnalyzer, ParsedFile};

use crate::{Error, Result};

/// Read, parse and extract facts from one file.
///
/// Files with an unknown extension yield empty facts.
pub fn analyze_path(path: &Path) -> Result<FileFacts> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let path_str = path.to_string_lossy().to_string();

    let analyzer = match get_analyzer(ext) {
        Some(a) => a,
        None => {
            debug!(file = %path_str, "no analyzer for extension");
            return Ok(FileFacts::empty(&path_str));
        }
    };
    debug!(file = %path_str, language = analyzer.language_id(), "parsing");

    let source = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    analyze_source(analyzer, path, &source)
}

/// Parse and extract facts from in-memory source.
pub fn analyze_source(
    analyzer: &dyn LanguageAnalyzer,
    path: &Path,
    source: &[u8],
) -> Result<FileFacts> {
    let parsed = analyzer.parse(path, source)?;
    let declarations = analyzer.extract_declarations(&parsed)?;

    Ok(FileFacts {
        path: path.to_string_lossy().to_string(),
        declarations,
    })
}
