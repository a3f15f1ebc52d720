//! Knowledge base construction from datasets on disk

use std::sync::Arc;

use baseline_scanner::{
    ApiStatus, DatasetSource, IssueKind, KnowledgeBase, ScriptDialect, SourceScanner,
};

use crate::common::TestRepo;

const CUSTOM_DATASET: &str = r#"{
  "features": {
    "web-share": {
      "name": "Web Share",
      "description": "Share text and links through the platform share sheet.",
      "status": {
        "baseline": false,
        "support": { "chrome": "89", "safari": "12.1" }
      },
      "compat_features": ["navigator.share", "navigator.canShare"]
    },
    "legacy-timer": {
      "name": "Legacy timer",
      "status": { "baseline": "low", "baseline_low_date": "2020-01-01" },
      "discouraged": { "alternatives": ["setTimeout"] },
      "compat_features": ["setImmediate"]
    },
    "fetch": {
      "name": "Fetch",
      "status": { "baseline": "high", "baseline_low_date": "2017-03-27" },
      "compat_features": ["fetch"]
    }
  }
}"#;

#[test]
fn test_dataset_file_registers_problematic_features() {
    let repo = TestRepo::new();
    repo.add_file("features.json", CUSTOM_DATASET);

    let kb = KnowledgeBase::load(&DatasetSource::File(repo.file("features.json")));

    let share = kb.lookup("navigator.share").expect("navigator.share registered");
    assert_eq!(share.status, ApiStatus::NonBaseline);
    assert_eq!(share.browser_support, "Supported in chrome 89, safari 12.1");
    assert_eq!(share.feature_id.as_deref(), Some("web-share"));
    assert!(kb.contains("navigator.canShare"));

    // Reached Baseline, so not registered
    assert!(!kb.contains("fetch"));
    assert!(!kb.contains("setImmediate"));

    // Curated entries are always present
    assert!(kb.contains("document.execCommand"));
}

#[test]
fn test_bare_map_layout() {
    let repo = TestRepo::new();
    repo.add_file(
        "bare.json",
        r#"{ "serial": { "status": { "baseline": false }, "compat_features": ["navigator.serial"] } }"#,
    );

    let kb = KnowledgeBase::load(&DatasetSource::File(repo.file("bare.json")));
    let serial = kb.lookup("navigator.serial").unwrap();
    assert_eq!(serial.browser_support, "Limited browser support");
    assert_eq!(serial.description, "navigator.serial is not Baseline-supported");
}

#[test]
fn test_broken_dataset_keeps_curated_entries() {
    let repo = TestRepo::new();
    repo.add_file("broken.json", "{ not json");

    let kb = KnowledgeBase::load(&DatasetSource::File(repo.file("broken.json")));
    assert_eq!(kb.len(), KnowledgeBase::curated().len());

    let missing = KnowledgeBase::load(&DatasetSource::File(repo.file("missing.json")));
    assert_eq!(missing.len(), KnowledgeBase::curated().len());
}

#[test]
fn test_custom_dataset_drives_scanner() {
    let repo = TestRepo::new();
    repo.add_file("features.json", CUSTOM_DATASET);
    let kb = Arc::new(KnowledgeBase::load(&DatasetSource::File(
        repo.file("features.json"),
    )));

    let scanner = SourceScanner::new(kb);
    let issues = scanner.scan(
        "share.js",
        "async function go() {\n  await navigator.share({ url });\n}\n",
        ScriptDialect::JavaScript,
    );

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].api, "navigator.share");
    assert_eq!(issues[0].kind, IssueKind::NonBaseline);
    assert_eq!(issues[0].line, 2);
    assert_eq!(issues[0].column, 8);
    assert_eq!(issues[0].context, "await navigator.share({ url });");
    assert_eq!(
        issues[0].suggestion,
        "Consider using a Baseline-supported alternative"
    );
}

#[test]
fn test_api_info() {
    let kb = KnowledgeBase::embedded();

    let info = kb.api_info("webkitAudioContext");
    assert!(!info.is_baseline);
    assert_eq!(info.status, "deprecated");
    assert!(info.suggestion.is_some());

    let info = kb.api_info("Array.prototype.map");
    assert!(info.is_baseline);
    assert_eq!(info.suggestion, None);
}
