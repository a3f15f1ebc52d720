//! Source kind detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Script dialects understood by the AST scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptDialect {
    /// JavaScript, including JSX
    JavaScript,
    TypeScript,
    Tsx,
}

impl ScriptDialect {
    /// Get the tree-sitter Language for parsing
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }
}

/// Discriminator for a source unit: plain script, or markup with inline
/// `<script>` blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Script(ScriptDialect),
    Markup,
}

impl SourceKind {
    /// Detect the source kind from a file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ScanError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect the source kind from a file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Ok(Self::Script(ScriptDialect::JavaScript)),
            "ts" | "mts" | "cts" => Ok(Self::Script(ScriptDialect::TypeScript)),
            "tsx" => Ok(Self::Script(ScriptDialect::Tsx)),
            "html" | "htm" => Ok(Self::Markup),
            _ => Err(ScanError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }
}
