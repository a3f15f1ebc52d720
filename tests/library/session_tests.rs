//! Scan sessions over files on disk

use std::path::PathBuf;

use baseline_scanner::config::ScanConfig;
use baseline_scanner::session::UnitContent;
use baseline_scanner::walk::collect_units;
use baseline_scanner::{
    CancellationToken, IssueKind, KnowledgeBase, ScanSession, ScriptDialect, SourceKind,
    SourceUnit, SuggestionEnricher,
};

use crate::common::{assert_consistent, assert_issue_at, TestRepo};

#[test]
fn test_project_scan() {
    let repo = TestRepo::new().with_web_project();
    let units = collect_units(&[repo.path().to_path_buf()], &ScanConfig::default()).unwrap();

    // node_modules is excluded
    assert_eq!(units.len(), 4);

    let result = ScanSession::new(KnowledgeBase::embedded()).run(units);
    assert_consistent(&result);
    assert_eq!(result.files_scanned, 4);
    assert_eq!(result.files_with_issues, 3);
    assert_eq!(result.total_issues(), 3);

    // Units are scanned in path order
    let apis: Vec<&str> = result.issues.iter().map(|i| i.api.as_str()).collect();
    assert_eq!(
        apis,
        vec![
            "webkitRequestAnimationFrame",
            "webkitAudioContext",
            "document.execCommand"
        ]
    );
    assert_issue_at(&result.issues, "webkitRequestAnimationFrame", 5);
    assert_issue_at(&result.issues, "document.execCommand", 2);
    assert_eq!(result.issues_by_type().get(&IssueKind::Deprecated), Some(&3));
}

#[test]
fn test_unreadable_file_is_counted() {
    let repo = TestRepo::new();
    repo.add_file("a.js", "webkitURL(x);\n");

    let units = vec![
        SourceUnit::from_path(&repo.file("a.js")).unwrap(),
        SourceUnit {
            identifier: "gone.js".into(),
            kind: SourceKind::Script(ScriptDialect::JavaScript),
            content: UnitContent::File(repo.file("gone.js")),
        },
    ];
    let result = ScanSession::new(KnowledgeBase::embedded()).run(units);

    assert_eq!(result.files_scanned, 2);
    assert_eq!(result.files_with_issues, 1);
    assert_consistent(&result);
}

#[test]
fn test_mixed_file_and_buffer_units() {
    let repo = TestRepo::new();
    repo.add_file("saved.js", "mozRequestAnimationFrame(step);\n");

    let units = vec![
        SourceUnit::from_path(&repo.file("saved.js")).unwrap(),
        SourceUnit::from_text(
            "untitled-1",
            "const s = navigator.mozGetUserMedia;\n",
            SourceKind::Script(ScriptDialect::JavaScript),
        ),
    ];
    let result = ScanSession::new(KnowledgeBase::embedded()).run(units);

    assert_eq!(result.total_issues(), 2);
    assert_eq!(result.issues[1].file, "untitled-1");
    assert_eq!(result.issues[1].api, "navigator.mozGetUserMedia");
    assert_eq!(result.issues[1].column, 10);
}

#[test]
fn test_cancelled_session_is_partial() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    let units = (0..10).map(move |i| {
        if i == 4 {
            trigger.cancel();
        }
        SourceUnit::from_text(
            format!("unit-{}.js", i),
            "webkitAudioContext();",
            SourceKind::Script(ScriptDialect::JavaScript),
        )
    });
    let result = ScanSession::new(KnowledgeBase::embedded()).run_with_cancel(units, &cancel);

    assert_eq!(result.files_scanned, 4);
    assert_eq!(result.total_issues(), 4);
    assert_consistent(&result);
}

#[tokio::test]
async fn test_offline_enrichment_after_scan() {
    let units = vec![SourceUnit::from_text(
        "page.html",
        "<script>\ndocument.execCommand('copy');\n</script>",
        SourceKind::Markup,
    )];
    let mut result = ScanSession::new(KnowledgeBase::embedded()).run(units);

    SuggestionEnricher::offline()
        .enrich_issues(&mut result.issues)
        .await;

    let ai = result.issues[0].ai_suggestion.as_ref().unwrap();
    assert_eq!(ai.alternative, "Clipboard API");
    assert!(ai.code_example.contains("navigator.clipboard.writeText"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["issues"][0]["aiSuggestion"]["alternative"], "Clipboard API");
}

#[test]
fn test_missing_input_path() {
    let err = collect_units(&[PathBuf::from("/nonexistent/dir/app.js")], &ScanConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/dir/app.js"));
}
