//! Scan sessions over many source units
//!
//! A session scans units one after another, in the order given, so the issue
//! list is stable across runs. A unit that cannot be read is logged and
//! skipped; it still counts as scanned. Cancellation is checked between
//! units, never inside one, so the result only ever holds complete units.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::error::{Result, ScanError};
use crate::knowledge::KnowledgeBase;
use crate::lang::SourceKind;
use crate::scanner::SourceScanner;
use crate::schema::ScanResult;

/// Text of a unit: already in memory, or read from disk when scanned
#[derive(Debug, Clone)]
pub enum UnitContent {
    Text(String),
    File(PathBuf),
}

/// One unit of input to a scan session
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path, or a session-scoped name for unsaved text
    pub identifier: String,
    pub kind: SourceKind,
    pub content: UnitContent,
}

impl SourceUnit {
    /// In-memory text, e.g. an unsaved editor buffer or pasted snippet
    pub fn from_text(identifier: impl Into<String>, text: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            content: UnitContent::Text(text.into()),
        }
    }

    /// File on disk, kind detected from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            identifier: path.display().to_string(),
            kind: SourceKind::from_path(path)?,
            content: UnitContent::File(path.to_path_buf()),
        })
    }

    /// Load the unit's text
    pub fn read(&self) -> Result<Cow<'_, str>> {
        match &self.content {
            UnitContent::Text(text) => Ok(Cow::Borrowed(text)),
            UnitContent::File(path) => {
                if !path.exists() {
                    return Err(ScanError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Ok(Cow::Owned(std::fs::read_to_string(path)?))
            }
        }
    }
}

/// Cooperative cancellation flag shared between a session and its caller
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drives a scanner across a set of units
pub struct ScanSession {
    scanner: SourceScanner,
}

impl ScanSession {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            scanner: SourceScanner::new(kb),
        }
    }

    /// Scan all units
    pub fn run<I>(&self, units: I) -> ScanResult
    where
        I: IntoIterator<Item = SourceUnit>,
    {
        self.run_with_cancel(units, &CancellationToken::new())
    }

    /// Scan units until done or `cancel` is set
    pub fn run_with_cancel<I>(&self, units: I, cancel: &CancellationToken) -> ScanResult
    where
        I: IntoIterator<Item = SourceUnit>,
    {
        let mut result = ScanResult::new(Utc::now());

        for unit in units {
            if cancel.is_cancelled() {
                tracing::info!(
                    "Scan cancelled after {} units",
                    result.files_scanned
                );
                break;
            }

            result.files_scanned += 1;

            let text = match unit.read() {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Error scanning {}: {}", unit.identifier, e);
                    continue;
                }
            };

            let issues = self.scanner.scan_unit(&unit.identifier, &text, unit.kind);
            tracing::debug!("{}: {} issues", unit.identifier, issues.len());

            if !issues.is_empty() {
                result.files_with_issues += 1;
                result.issues.extend(issues);
            }
        }

        result
    }
}
