//! Output types shared by the scanner, the session and the reporting layers

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Deprecated,
    NonBaseline,
    Unsafe,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::NonBaseline => "non-baseline",
            Self::Unsafe => "unsafe",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Richer guidance attached to an issue by the enrichment pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub alternative: String,
    pub explanation: String,
    pub code_example: String,
    pub browser_support: String,
}

/// One detected use of a problematic API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// File path, or a session-scoped identifier for unsaved text
    pub file: String,
    /// 1-based line
    pub line: usize,
    /// 0-based column in UTF-16 code units, as editors count them
    pub column: usize,
    pub api: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub description: String,
    pub suggestion: String,
    pub browser_support: String,
    /// Trimmed source line the issue was found on
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestion: Option<AiSuggestion>,
}

/// Aggregate over one scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub files_scanned: usize,
    pub files_with_issues: usize,
    /// Discovery order
    pub issues: Vec<Issue>,
    pub timestamp: DateTime<Utc>,
}

impl ScanResult {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            files_scanned: 0,
            files_with_issues: 0,
            issues: Vec::new(),
            timestamp,
        }
    }

    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issue counts grouped by type
    pub fn issues_by_type(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.kind).or_insert(0) += 1;
        }
        counts
    }
}
