//! Error types and exit codes for baseline-scanner

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for baseline-scanner operations
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported file type for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Feature dataset error: {message}")]
    DatasetError { message: String },

    #[error("Suggestion provider returned HTTP {status}")]
    ProviderStatus { status: u16 },

    #[error("Malformed suggestion provider response: {message}")]
    MalformedResponse { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Generic(String),
}

impl ScanError {
    /// Convert error to the process exit code:
    /// - 1: File not found / IO error
    /// - 2: Unsupported file type
    /// - 3: Configuration error
    /// - 4: Dataset or internal failure
    /// - 5: Suggestion provider failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::UnsupportedLanguage { .. } => ExitCode::from(2),
            Self::ConfigError { .. } => ExitCode::from(3),
            Self::DatasetError { .. } => ExitCode::from(4),
            Self::Generic(_) => ExitCode::from(4),
            Self::ProviderStatus { .. } => ExitCode::from(5),
            Self::MalformedResponse { .. } => ExitCode::from(5),
            Self::Http(_) => ExitCode::from(5),
        }
    }
}

/// Result type alias for baseline-scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
