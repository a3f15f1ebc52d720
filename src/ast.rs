//! tree-sitter helpers shared by the resolver and the scanner

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Result, ScanError};
use crate::lang::ScriptDialect;

/// Get text content of a node
pub fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or("")
        .to_string()
}

/// Visit all nodes in a tree in pre-order (iterative to avoid stack overflow)
pub fn visit_all<F>(node: &Node, mut visitor: F)
where
    F: FnMut(&Node),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());

            if cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}

/// Parse `source` with the grammar for `dialect`.
///
/// A tree containing error or missing nodes is reported as
/// `ScanError::Generic` so the caller can switch to text matching.
pub fn parse_script(source: &str, dialect: ScriptDialect) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.tree_sitter_language())
        .map_err(|e| ScanError::Generic(format!("Failed to load {} grammar: {}", dialect.name(), e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ScanError::Generic("Parser produced no tree".to_string()))?;

    if tree.root_node().has_error() {
        return Err(ScanError::Generic(format!(
            "Syntax error in {} source",
            dialect.name()
        )));
    }

    Ok(tree)
}
