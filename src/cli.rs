//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Finds web platform APIs that are deprecated or not yet Baseline
#[derive(Parser, Debug)]
#[command(name = "baseline-scanner")]
#[command(about = "Scans JavaScript, TypeScript and HTML for non-Baseline web APIs")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the per-user config location)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// web-features JSON to use instead of the embedded sample
    #[arg(long, value_name = "FILE", global = true)]
    pub dataset: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan files, directories or stdin for problematic APIs
    Scan(ScanArgs),

    /// Show what the knowledge base knows about one API
    Lookup(LookupArgs),
}

// ============================================
// Scan Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files or directories to scan; `-` reads one unit from stdin
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// How to treat text read from stdin (`-`, named at most once)
    #[arg(long, value_enum, default_value = "script")]
    pub stdin_kind: StdinKind,

    /// Attach remediation suggestions to every issue
    #[arg(long)]
    pub ai_suggestions: bool,

    /// Credential for the suggestion provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    pub fail_on_issues: bool,
}

impl ScanArgs {
    /// Whether stdin is among the inputs
    pub fn reads_stdin(&self) -> bool {
        self.paths.iter().any(|p| p.as_os_str() == "-")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StdinKind {
    /// JavaScript source
    Script,
    /// TypeScript source
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// HTML with `<script>` blocks
    Markup,
}

// ============================================
// Lookup Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// API identifier, e.g. `document.execCommand`
    #[arg(value_name = "API")]
    pub api: String,
}

// ============================================
// Shared Enums
// ============================================

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with visual formatting
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON for machine parsing
    Json,
}
