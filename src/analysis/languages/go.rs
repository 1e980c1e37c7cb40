//! Go language analyzer using tree-sitter.
//!
//! Extracts:
//! - Function declarations
//! - Method declarations (receiver kept apart from the parameters)
//! - Parameter clauses, including grouped names and variadic tails

use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::analysis::{
    Declaration, DeclarationKind, LanguageAnalyzer, ParamGroup, ParsedFile, Span,
};
use crate::{Error, Result};

/// Tree-sitter query for extracting Go functions and methods.
const DECLARATION_QUERY: &str = r#"
; Function declarations
(function_declaration
  name: (identifier) @func_name
  parameters: (parameter_list) @params
) @function

; Method declarations (with receiver)
(method_declaration
  receiver: (parameter_list) @receiver
  name: (field_identifier) @method_name
  parameters: (parameter_list) @params
) @method
"#;

/// Name bound by a parameter clause that only spells out a type.
const BLANK_IDENTIFIER: &str = "_";

/// Go language analyzer.
pub struct GoAnalyzer {
    language: Language,
}

impl Default for GoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GoAnalyzer {
    /// Create a new Go analyzer.
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Create a new parser for this thread.
    fn create_parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Turn a `parameter_list` node into parameter clauses.
    fn parameter_groups(&self, parsed: &ParsedFile, list: Node) -> Vec<ParamGroup> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter_map(|child| match child.kind() {
                "parameter_declaration" => {
                    Some(ParamGroup::new(self.bound_names(parsed, child), false))
                }
                "variadic_parameter_declaration" => {
                    Some(ParamGroup::new(self.bound_names(parsed, child), true))
                }
                _ => None,
            })
            .collect()
    }

    /// Names bound by one parameter clause; `_` when only a type is given.
    fn bound_names(&self, parsed: &ParsedFile, clause: Node) -> Vec<String> {
        let mut cursor = clause.walk();
        let names: Vec<String> = clause
            .children_by_field_name("name", &mut cursor)
            .map(|n| parsed.node_text(n).to_string())
            .collect();

        if names.is_empty() {
            vec![BLANK_IDENTIFIER.to_string()]
        } else {
            names
        }
    }

    /// Receiver type name with any pointer marker removed.
    fn receiver_type(&self, parsed: &ParsedFile, receiver: Node) -> Option<String> {
        let mut cursor = receiver.walk();
        let clause = receiver
            .named_children(&mut cursor)
            .find(|n| n.kind() == "parameter_declaration")?;
        let ty = clause.child_by_field_name("type")?;
        Some(parsed.node_text(ty).trim_start_matches('*').to_string())
    }
}

/// Find the first error or missing node below `node`, depth first.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    Some(node)
}

impl LanguageAnalyzer for GoAnalyzer {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn test_file_suffix(&self) -> &'static str {
        "_test.go"
    }

    fn parse(&self, path: &Path, source: &[u8]) -> Result<ParsedFile> {
        let mut parser = self.create_parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
        })?;

        if let Some(node) = first_error(tree.root_node()) {
            let pos = node.start_position();
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        Ok(ParsedFile {
            tree,
            source: source.to_vec(),
            path: path.to_path_buf(),
        })
    }

    fn extract_declarations(&self, parsed: &ParsedFile) -> Result<Vec<Declaration>> {
        let query = Query::new(&self.language, DECLARATION_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        let mut declarations = Vec::new();

        while let Some(m) = matches.next() {
            let mut name = String::new();
            let mut kind = DeclarationKind::Function;
            let mut decl_node = None;
            let mut receiver = None;
            let mut params = Vec::new();

            for capture in m.captures {
                let capture_name = query.capture_names()[capture.index as usize];
                match capture_name {
                    "func_name" => {
                        name = parsed.node_text(capture.node).to_string();
                        kind = DeclarationKind::Function;
                    }
                    "method_name" => {
                        name = parsed.node_text(capture.node).to_string();
                        kind = DeclarationKind::Method;
                    }
                    "receiver" => {
                        receiver = self.receiver_type(parsed, capture.node);
                    }
                    "params" => {
                        params = self.parameter_groups(parsed, capture.node);
                    }
                    "function" | "method" => {
                        decl_node = Some(capture.node);
                    }
                    _ => {}
                }
            }

            if let Some(node) = decl_node {
                if !name.is_empty() {
                    declarations.push(Declaration {
                        name,
                        kind,
                        span: Span::from_node(node),
                        receiver,
                        params,
                    });
                }
            }
        }

        // Source order
        declarations.sort_by_key(|d| d.span.start_byte);

        Ok(declarations)
    }
}
