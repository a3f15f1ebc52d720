//! Bulk web-features dataset loader
//!
//! The embedded `data/web-features.json` is a small hand-picked sample of
//! web-features records, not a full snapshot. Its keys are registered
//! verbatim, so only entries spelled as code paths ever match source. Supply
//! a published dataset as a file (see `DatasetSource::File`) for full coverage.
//! Both the published `data.json` layout (`{ "features": { ... } }`) and the
//! bare `{ id: feature }` map are accepted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScanError};

/// Embedded dataset sample
static EMBEDDED_DATASET: &str = include_str!("../../data/web-features.json");

/// Where the bulk dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Sample compiled into the binary
    Embedded,
    /// JSON file on disk
    File(PathBuf),
}

impl DatasetSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Embedded,
        }
    }
}

/// `status.baseline` is `false`, `"low"` or `"high"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BaselineLevel {
    Flag(bool),
    Level(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureStatus {
    #[serde(default)]
    pub baseline: Option<BaselineLevel>,
    #[serde(default)]
    pub baseline_low_date: Option<String>,
    /// Browser → first supporting version
    #[serde(default)]
    pub support: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Discouraged {
    #[serde(default)]
    pub according_to: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// One feature record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<FeatureStatus>,
    #[serde(default)]
    pub compat_features: Vec<String>,
    #[serde(default)]
    pub discouraged: Option<Discouraged>,
}

impl Feature {
    /// A feature is problematic when its baseline flag is explicitly `false`
    /// or it never reached Baseline low (no `baseline_low_date`).
    pub fn is_problematic(&self) -> bool {
        match &self.status {
            None => true,
            Some(status) => {
                status.baseline == Some(BaselineLevel::Flag(false))
                    || status.baseline_low_date.is_none()
            }
        }
    }

    pub fn is_discouraged(&self) -> bool {
        self.discouraged.is_some()
    }

    /// "Supported in chrome 66, firefox 63", or `None` without support data
    pub fn support_note(&self) -> Option<String> {
        let support = &self.status.as_ref()?.support;
        if support.is_empty() {
            return None;
        }
        let browsers: Vec<String> = support
            .iter()
            .map(|(browser, version)| format!("{} {}", browser, version))
            .collect();
        Some(format!("Supported in {}", browsers.join(", ")))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetDocument {
    Wrapped { features: BTreeMap<String, Feature> },
    Bare(BTreeMap<String, Feature>),
}

/// Parsed bulk dataset, keyed by feature id
#[derive(Debug, Clone, Default)]
pub struct FeatureDataset {
    pub features: BTreeMap<String, Feature>,
}

impl FeatureDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        let document: DatasetDocument =
            serde_json::from_str(json).map_err(|e| ScanError::DatasetError {
                message: format!("Invalid feature dataset: {}", e),
            })?;

        let features = match document {
            DatasetDocument::Wrapped { features } => features,
            DatasetDocument::Bare(features) => features,
        };
        Ok(Self { features })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn load(source: &DatasetSource) -> Result<Self> {
        match source {
            DatasetSource::Embedded => Self::embedded(),
            DatasetSource::File(path) => Self::from_file(path),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
