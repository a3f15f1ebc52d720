//! Source scanning
//!
//! [`SourceScanner`] parses one unit of script text with tree-sitter and
//! reports every resolved identifier that the knowledge base knows about.
//! Member-access nodes are checked directly; calls and `new` expressions are
//! checked only when their callee is a bare identifier, since a member-access
//! callee has already been reported by its own node.
//!
//! When the source does not parse cleanly the scanner switches to
//! line-oriented text matching ([`fallback`]), so broken input still yields
//! best-effort results. Markup units go through [`markup`], which extracts
//! inline `<script>` blocks and rebases their line numbers.

pub mod fallback;
pub mod markup;

use std::sync::Arc;

use tree_sitter::Node;

use crate::ast::{parse_script, visit_all};
use crate::knowledge::{CompatibilityDescriptor, KnowledgeBase};
use crate::lang::{ScriptDialect, SourceKind};
use crate::resolve::resolve;
use crate::schema::Issue;

pub use markup::MarkupScriptExtractor;

const DEFAULT_SUGGESTION: &str = "Consider using a Baseline-supported alternative";
const DEFAULT_BROWSER_SUPPORT: &str = "Limited browser support";

/// Scans script text against a shared knowledge base
#[derive(Debug, Clone)]
pub struct SourceScanner {
    kb: Arc<KnowledgeBase>,
}

impl SourceScanner {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Scan one script unit. Never fails: unparsable input is matched as text.
    pub fn scan(&self, file: &str, source: &str, dialect: ScriptDialect) -> Vec<Issue> {
        match parse_script(source, dialect) {
            Ok(tree) => self.scan_tree(file, source, &tree.root_node()),
            Err(e) => {
                tracing::debug!("{}: {}, falling back to text matching", file, e);
                fallback::scan_text(&self.kb, file, source)
            }
        }
    }

    /// Scan a unit of either kind
    pub fn scan_unit(&self, file: &str, source: &str, kind: SourceKind) -> Vec<Issue> {
        match kind {
            SourceKind::Script(dialect) => self.scan(file, source, dialect),
            SourceKind::Markup => MarkupScriptExtractor::new(self).scan(file, source),
        }
    }

    fn scan_tree(&self, file: &str, source: &str, root: &Node) -> Vec<Issue> {
        let lines: Vec<&str> = source.split('\n').collect();
        let mut issues = Vec::new();

        visit_all(root, |node| {
            let Some(target) = match_target(node) else {
                return;
            };
            let Some(api) = resolve(&target, source) else {
                return;
            };
            let Some(descriptor) = self.kb.lookup(&api) else {
                return;
            };

            let pos = node.start_position();
            let line = lines.get(pos.row).copied().unwrap_or("");
            issues.push(build_issue(
                file,
                pos.row + 1,
                utf16_column(line, pos.column),
                descriptor,
                line.trim(),
            ));
        });

        issues
    }
}

/// Node whose resolved path should be looked up, if any
fn match_target<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    match node.kind() {
        "member_expression" => Some(*node),
        "call_expression" => node
            .child_by_field_name("function")
            .filter(|callee| callee.kind() == "identifier"),
        "new_expression" => node
            .child_by_field_name("constructor")
            .filter(|callee| callee.kind() == "identifier"),
        _ => None,
    }
}

/// Column in UTF-16 code units for a byte offset within `line`
pub(crate) fn utf16_column(line: &str, byte_column: usize) -> usize {
    match line.get(..byte_column) {
        Some(prefix) => prefix.encode_utf16().count(),
        None => byte_column,
    }
}

/// Build an issue from a descriptor, filling defaults for empty text
pub(crate) fn build_issue(
    file: &str,
    line: usize,
    column: usize,
    descriptor: &CompatibilityDescriptor,
    context: &str,
) -> Issue {
    let api = &descriptor.api_name;
    Issue {
        file: file.to_string(),
        line,
        column,
        api: api.clone(),
        kind: descriptor.status.issue_kind(),
        description: non_empty_or(&descriptor.description, || {
            format!("{} is not Baseline-supported", api)
        }),
        suggestion: non_empty_or(&descriptor.suggestion, || DEFAULT_SUGGESTION.to_string()),
        browser_support: non_empty_or(&descriptor.browser_support, || {
            DEFAULT_BROWSER_SUPPORT.to_string()
        }),
        context: context.to_string(),
        ai_suggestion: None,
    }
}

fn non_empty_or(value: &str, default: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        default()
    } else {
        value.to_string()
    }
}
