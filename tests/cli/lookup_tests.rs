//! Tests for the `lookup` command

use crate::common::{assert_valid_json, TestRepo};

#[test]
fn test_lookup_curated_api() {
    let repo = TestRepo::new();
    let stdout = repo.run_cli_success(&["lookup", "document.execCommand"]);
    assert!(stdout.contains("api: document.execCommand"));
    assert!(stdout.contains("baseline: false"));
    assert!(stdout.contains("status: deprecated"));
}

#[test]
fn test_lookup_json() {
    let repo = TestRepo::new();
    let stdout = repo.run_cli_success(&["lookup", "structuredClone", "--format", "json"]);
    let json = assert_valid_json(&stdout, "lookup --format json");
    assert_eq!(json["api"], "structuredClone");
    assert_eq!(json["isBaseline"], true);
    assert_eq!(json["browserSupport"], "Baseline supported");
}
