//! Command modules for the baseline-scanner CLI
//!
//! Each command module implements a single top-level command:
//! - `scan` - scan files, directories or stdin and report issues
//! - `lookup` - print what the knowledge base knows about one API
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format and configuration.

pub mod lookup;
pub mod scan;

pub use lookup::run_lookup;
pub use scan::run_scan;

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::config::ScannerConfig;
use crate::knowledge::{DatasetSource, KnowledgeBase};

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    /// Effective configuration (file, then environment, then flags)
    pub config: ScannerConfig,
}

impl CommandContext {
    pub fn new(format: OutputFormat, config: ScannerConfig) -> Self {
        Self { format, config }
    }

    /// Apply a `--dataset` flag on top of the loaded configuration
    pub fn with_dataset(mut self, dataset: Option<PathBuf>) -> Self {
        if dataset.is_some() {
            self.config.knowledge_base.dataset_path = dataset;
        }
        self
    }

    /// Knowledge base for the configured dataset
    pub fn knowledge_base(&self) -> Arc<KnowledgeBase> {
        match DatasetSource::from_path(self.config.knowledge_base.dataset_path.clone()) {
            DatasetSource::Embedded => KnowledgeBase::embedded(),
            source => Arc::new(KnowledgeBase::load(&source)),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(OutputFormat::Text, ScannerConfig::default())
    }
}

/// Rendered command output plus whether the process should report failure
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub text: String,
    pub failed: bool,
}

impl CommandOutput {
    pub fn ok(text: String) -> Self {
        Self {
            text,
            failed: false,
        }
    }
}
