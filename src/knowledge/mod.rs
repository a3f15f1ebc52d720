//! Knowledge base of problematic web platform APIs
//!
//! The knowledge base maps an API identifier (a dotted path such as
//! `document.execCommand`) to a [`CompatibilityDescriptor`]. It is built once
//! from two sources:
//!
//! - the bulk web-features dataset (see [`dataset`]), filtered to features that
//!   never reached Baseline
//! - a curated override table (see [`overrides`]) that always takes precedence
//!
//! A dataset that fails to load is logged and skipped; the curated table alone
//! still yields a usable knowledge base.

pub mod dataset;
pub mod overrides;

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

pub use dataset::{DatasetSource, Feature, FeatureDataset};

use crate::schema::IssueKind;

/// Status of a problematic API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiStatus {
    Deprecated,
    NonBaseline,
    Unsafe,
}

impl ApiStatus {
    /// Issue type reported for this status. Only `Deprecated` is carried over;
    /// everything else is reported as non-Baseline.
    pub fn issue_kind(&self) -> IssueKind {
        match self {
            Self::Deprecated => IssueKind::Deprecated,
            Self::NonBaseline | Self::Unsafe => IssueKind::NonBaseline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::NonBaseline => "non-baseline",
            Self::Unsafe => "unsafe",
        }
    }
}

/// Compatibility metadata for one API identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityDescriptor {
    pub api_name: String,
    pub status: ApiStatus,
    pub description: String,
    /// May be empty
    pub suggestion: String,
    pub browser_support: String,
    /// web-features id the descriptor was derived from (`None` for curated entries)
    pub feature_id: Option<String>,
}

impl CompatibilityDescriptor {
    /// Derive a descriptor for `api` from a problematic dataset feature
    pub fn from_feature(feature_id: &str, feature: &Feature, api: &str) -> Self {
        let status = if feature.is_discouraged() {
            ApiStatus::Deprecated
        } else {
            ApiStatus::NonBaseline
        };

        let description = feature
            .description
            .clone()
            .or_else(|| {
                feature
                    .name
                    .as_ref()
                    .map(|name| format!("{} is not Baseline-supported", name))
            })
            .unwrap_or_else(|| format!("{} is not Baseline-supported", api));

        let suggestion = feature
            .discouraged
            .as_ref()
            .filter(|d| !d.alternatives.is_empty())
            .map(|d| format!("Consider {} instead", d.alternatives.join(" or ")))
            .unwrap_or_default();

        Self {
            api_name: api.to_string(),
            status,
            description,
            suggestion,
            browser_support: feature
                .support_note()
                .unwrap_or_else(|| "Limited browser support".to_string()),
            feature_id: Some(feature_id.to_string()),
        }
    }
}

/// Summary of an API for hover-style lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    pub api: String,
    pub is_baseline: bool,
    pub status: String,
    pub browser_support: String,
    pub suggestion: Option<String>,
    pub description: String,
}

/// Shared knowledge base built from the embedded dataset
static EMBEDDED_KNOWLEDGE_BASE: Lazy<Arc<KnowledgeBase>> =
    Lazy::new(|| Arc::new(KnowledgeBase::load(&DatasetSource::Embedded)));

/// Immutable map from API identifier to descriptor
#[derive(Debug)]
pub struct KnowledgeBase {
    descriptors: BTreeMap<String, CompatibilityDescriptor>,
    /// Word-boundary matchers for the text fallback, compiled on first use
    matchers: OnceCell<TextMatchers>,
}

/// `\b<api>\b` matchers in identifier order, with a set that picks out the
/// few matchers worth running on a given line
#[derive(Debug)]
pub struct TextMatchers {
    set: Option<RegexSet>,
    matchers: Vec<(String, Regex)>,
}

impl TextMatchers {
    fn build<'a>(apis: impl Iterator<Item = &'a String>) -> Self {
        let matchers: Vec<(String, Regex)> = apis
            .filter_map(|api| {
                let pattern = format!(r"\b{}\b", regex::escape(api));
                match Regex::new(&pattern) {
                    Ok(re) => Some((api.clone(), re)),
                    Err(e) => {
                        tracing::warn!("Skipping text matcher for {}: {}", api, e);
                        None
                    }
                }
            })
            .collect();

        let set = match RegexSet::new(matchers.iter().map(|(_, re)| re.as_str())) {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::warn!("Text matcher set unavailable, trying every matcher: {}", e);
                None
            }
        };

        Self { set, matchers }
    }

    /// Every hit on `line` as (byte offset, identifier), grouped by
    /// identifier in identifier order
    pub fn find_all<'s>(&'s self, line: &str) -> Vec<(usize, &'s str)> {
        let mut hits = Vec::new();
        let mut collect = |(api, re): &'s (String, Regex)| {
            hits.extend(re.find_iter(line).map(|m| (m.start(), api.as_str())));
        };

        match &self.set {
            // SetMatches iterates indices in ascending order
            Some(set) => set
                .matches(line)
                .iter()
                .for_each(|i| collect(&self.matchers[i])),
            None => self.matchers.iter().for_each(collect),
        }
        hits
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Regex)> {
        self.matchers.iter()
    }
}

impl KnowledgeBase {
    /// Build from an optional bulk dataset plus the curated overrides
    pub fn from_dataset(dataset: Option<&FeatureDataset>) -> Self {
        let mut descriptors = BTreeMap::new();

        if let Some(dataset) = dataset {
            for (feature_id, feature) in &dataset.features {
                if !feature.is_problematic() {
                    continue;
                }
                for api in &feature.compat_features {
                    descriptors.insert(
                        api.clone(),
                        CompatibilityDescriptor::from_feature(feature_id, feature, api),
                    );
                }
            }
            tracing::debug!(
                "Registered {} APIs from {} dataset features",
                descriptors.len(),
                dataset.len()
            );
        }

        for descriptor in overrides::curated_descriptors() {
            descriptors.insert(descriptor.api_name.clone(), descriptor);
        }

        Self {
            descriptors,
            matchers: OnceCell::new(),
        }
    }

    /// Load the bulk dataset from `source` and build. Load failures are logged
    /// and the knowledge base falls back to the curated overrides only.
    pub fn load(source: &DatasetSource) -> Self {
        let dataset = match FeatureDataset::load(source) {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                tracing::warn!("Could not load feature dataset ({:?}): {}", source, e);
                None
            }
        };

        let kb = Self::from_dataset(dataset.as_ref());
        tracing::info!("Knowledge base ready with {} APIs", kb.len());
        kb
    }

    /// Curated overrides only
    pub fn curated() -> Self {
        Self::from_dataset(None)
    }

    /// Process-wide knowledge base over the embedded dataset
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED_KNOWLEDGE_BASE)
    }

    pub fn lookup(&self, api: &str) -> Option<&CompatibilityDescriptor> {
        self.descriptors.get(api)
    }

    pub fn contains(&self, api: &str) -> bool {
        self.descriptors.contains_key(api)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All descriptors in identifier order
    pub fn descriptors(&self) -> impl Iterator<Item = &CompatibilityDescriptor> {
        self.descriptors.values()
    }

    /// Text fallback matchers, one per identifier
    pub fn text_matchers(&self) -> &TextMatchers {
        self.matchers
            .get_or_init(|| TextMatchers::build(self.descriptors.keys()))
    }

    /// Hover-style summary. Unknown identifiers are reported as Baseline.
    pub fn api_info(&self, api: &str) -> ApiInfo {
        match self.lookup(api) {
            Some(d) => ApiInfo {
                api: api.to_string(),
                is_baseline: false,
                status: d.status.as_str().to_string(),
                browser_support: if d.browser_support.is_empty() {
                    "Limited support".to_string()
                } else {
                    d.browser_support.clone()
                },
                suggestion: Some(d.suggestion.clone()).filter(|s| !s.is_empty()),
                description: d.description.clone(),
            },
            None => ApiInfo {
                api: api.to_string(),
                is_baseline: true,
                status: "stable".to_string(),
                browser_support: "Baseline supported".to_string(),
                suggestion: None,
                description: "This API is part of the Baseline web platform".to_string(),
            },
        }
    }
}
