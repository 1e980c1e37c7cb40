//! paramlimit - flag Go functions with too many parameters.
//!
//! paramlimit walks Go source trees, extracts every top-level function and
//! method with tree-sitter, and reports declarations whose parameter count
//! exceeds a limit. Exported and unexported functions have separate limits.
//!
//! # Architecture
//!
//! - `walk`: decides which directories are entered and which files are checked
//! - `analysis`: tree-sitter parsing into declarations and parameter clauses
//! - `check`: visibility classification, parameter counting, limit checks
//! - `runner`: per-file orchestration and aggregation
//! - `report`: text and JSON output
//! - `cli`: flags, logging and exit codes

pub mod analysis;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod walk;

pub use analysis::{Declaration, DeclarationKind, LanguageAnalyzer, ParamGroup};
pub use check::{check_params, effective_count, is_public, Issue, RunSummary, Visibility};
pub use config::{Limits, Options};
pub use error::{Error, Result};
pub use runner::{analyze_file, Runner};
pub use walk::{DirDecision, Target, Walker};
