//! baseline-scanner: finds web platform APIs that are not Baseline
//!
//! This library scans JavaScript, TypeScript and HTML sources for uses of web
//! APIs that are deprecated or not yet part of the Baseline web platform. It
//! uses tree-sitter for parsing and falls back to a line-oriented text scan
//! when a file does not parse.
//!
//! # Components
//!
//! - [`KnowledgeBase`] - API identifier to compatibility descriptor
//! - [`SourceScanner`] - AST scan with text fallback
//! - [`MarkupScriptExtractor`] - scans `<script>` blocks inside HTML
//! - [`ScanSession`] - scans many units and aggregates a [`ScanResult`]
//! - [`SuggestionEnricher`] - attaches remediation suggestions to issues
//!
//! # Example
//!
//! ```ignore
//! use baseline_scanner::{KnowledgeBase, ScanSession, SourceKind, SourceUnit, ScriptDialect};
//!
//! let session = ScanSession::new(KnowledgeBase::embedded());
//! let units = vec![SourceUnit::from_text(
//!     "snippet.js",
//!     "document.execCommand('copy');",
//!     SourceKind::Script(ScriptDialect::JavaScript),
//! )];
//!
//! let result = session.run(units);
//! for issue in &result.issues {
//!     println!("{}:{} {} ({})", issue.line, issue.column, issue.api, issue.kind);
//! }
//! ```

pub mod ast;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod enrich;
pub mod error;
pub mod knowledge;
pub mod lang;
pub mod resolve;
pub mod scanner;
pub mod schema;
pub mod session;
pub mod walk;

// Re-export commonly used types
pub use config::ScannerConfig;
pub use diagnostics::{update_diagnostics, Diagnostic, DiagnosticMap};
pub use enrich::SuggestionEnricher;
pub use error::{Result, ScanError};
pub use knowledge::{ApiInfo, ApiStatus, CompatibilityDescriptor, DatasetSource, KnowledgeBase};
pub use lang::{ScriptDialect, SourceKind};
pub use resolve::resolve;
pub use scanner::{MarkupScriptExtractor, SourceScanner};
pub use schema::{AiSuggestion, Issue, IssueKind, ScanResult};
pub use session::{CancellationToken, ScanSession, SourceUnit};
