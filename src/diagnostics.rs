//! Editor-style diagnostics derived from issues
//!
//! Callers that keep a live view per document (an editor integration, a
//! watch loop) hold a [`DiagnosticMap`] and replace one document's entry
//! after every rescan of that document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::{Issue, IssueKind};

/// Value reported as the diagnostic source
pub const DIAGNOSTIC_SOURCE: &str = "Baseline Scanner";

/// Zero-based line and column; columns count UTF-16 code units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub source: String,
    pub code: IssueKind,
    pub message: String,
}

impl Diagnostic {
    pub fn from_issue(issue: &Issue) -> Self {
        let line = issue.line.saturating_sub(1);
        Self {
            range: Range {
                start: Position {
                    line,
                    character: issue.column,
                },
                end: Position {
                    line,
                    character: issue.column + issue.api.encode_utf16().count(),
                },
            },
            severity: Severity::Warning,
            source: DIAGNOSTIC_SOURCE.to_string(),
            code: issue.kind,
            message: format!("{} is not Baseline-supported. {}", issue.api, issue.suggestion),
        }
    }
}

/// Current diagnostics keyed by document identifier
pub type DiagnosticMap = BTreeMap<String, Vec<Diagnostic>>;

/// Replace the diagnostics of one document; no issues clears its entry
pub fn update_diagnostics(map: &mut DiagnosticMap, document_id: &str, issues: &[Issue]) {
    if issues.is_empty() {
        map.remove(document_id);
        return;
    }

    map.insert(
        document_id.to_string(),
        issues.iter().map(Diagnostic::from_issue).collect(),
    );
}
