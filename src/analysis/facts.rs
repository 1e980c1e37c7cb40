//! Fact structures extracted from AST analysis.

use std::fmt;

use serde::Serialize;

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
        }
    }

    /// A span pointing at the given 1-indexed line and column.
    pub fn at(line: usize, col: usize) -> Self {
        Self {
            start_byte: 0,
            end_byte: 0,
            start_line: line,
            start_col: col,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Kind of callable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Function,
    Method,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Function => "function",
            DeclarationKind::Method => "method",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parameter clause, e.g. `a, b int` or `rest ...string`.
///
/// A clause declared by type only (`func f(int)`) binds the blank name `_`,
/// so `names` is never empty for groups produced by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamGroup {
    /// Identifiers bound by this clause, in source order.
    pub names: Vec<String>,
    /// Whether the clause has the `...T` form.
    pub variadic: bool,
}

impl ParamGroup {
    pub fn new<I, S>(names: I, variadic: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            variadic,
        }
    }

    /// Number of identifiers bound by this clause.
    pub fn arity(&self) -> usize {
        self.names.len()
    }
}

/// A top-level function or method declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// The declaration name.
    pub name: String,
    /// Function or method.
    pub kind: DeclarationKind,
    /// Source span for the entire declaration.
    pub span: Span,
    /// For methods: the receiver type (e.g., "Config" for `func (c *Config) Validate()`).
    pub receiver: Option<String>,
    /// Parameter clauses in source order. The receiver is not included.
    pub params: Vec<ParamGroup>,
}

impl Declaration {
    /// Get the fully qualified name (receiver.name for methods).
    pub fn qualified_name(&self) -> String {
        if let Some(ref recv) = self.receiver {
            format!("{}.{}", recv, self.name)
        } else {
            self.name.clone()
        }
    }

    /// Whether the last parameter clause is variadic.
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|g| g.variadic)
    }
}

/// All facts extracted from a single file.
#[derive(Debug, Clone)]
pub struct FileFacts {
    /// File path.
    pub path: String,
    /// Function and method declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl FileFacts {
    /// Create empty facts for a file.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            declarations: Vec::new(),
        }
    }
}
