//! Scanner behavior on realistic sources

use std::sync::Arc;

use baseline_scanner::{
    update_diagnostics, DiagnosticMap, IssueKind, KnowledgeBase, MarkupScriptExtractor,
    ScriptDialect, SourceKind, SourceScanner,
};

use crate::common::assert_issue_at;

fn scanner() -> SourceScanner {
    SourceScanner::new(KnowledgeBase::embedded())
}

#[test]
fn test_legacy_module() {
    let source = r#"import { draw } from './draw.js';

const raf = window.webkitRequestAnimationFrame || window.mozRequestAnimationFrame;

export function copySelection() {
  return document.execCommand('copy');
}

export function openSettings(url) {
  return window.showModalDialog(url);
}

export function makeUrl(path) {
  return new webkitURL(path, location.href);
}
"#;
    let issues = scanner().scan("legacy.js", source, ScriptDialect::JavaScript);

    // window.webkitRequestAnimationFrame resolves to a path the knowledge base does not hold
    assert_eq!(issues.len(), 3, "{:#?}", issues);
    assert_issue_at(&issues, "document.execCommand", 6);
    assert_issue_at(&issues, "window.showModalDialog", 10);
    let url = assert_issue_at(&issues, "webkitURL", 14);
    assert_eq!(url.column, 9);
    assert_eq!(url.kind, IssueKind::Deprecated);
}

#[test]
fn test_typescript_and_tsx() {
    let ts = "const ctx: AudioContext = new webkitAudioContext();\nexport default ctx;\n";
    let issues = scanner().scan("audio.ts", ts, ScriptDialect::TypeScript);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].api, "webkitAudioContext");

    let tsx = "export const Copy = () => <button onClick={() => document.execCommand('copy')}>Copy</button>;\n";
    let issues = scanner().scan("Copy.tsx", tsx, ScriptDialect::Tsx);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].api, "document.execCommand");
}

#[test]
fn test_syntax_error_uses_text_matching() {
    let source = "function broken( {\n  webkitGetUserMedia(c, ok, fail);\n  // document.execCommand\n";
    let issues = scanner().scan("broken.js", source, ScriptDialect::JavaScript);

    // Text matching also catches the mention in the comment
    assert_eq!(issues.len(), 2);
    assert_issue_at(&issues, "webkitGetUserMedia", 2);
    let comment = assert_issue_at(&issues, "document.execCommand", 3);
    assert_eq!(comment.column, 5);
}

#[test]
fn test_strings_are_not_matched_when_parsed() {
    let source = "const msg = 'document.execCommand is deprecated';\nconsole.log(msg);\n";
    assert!(scanner()
        .scan("msg.js", source, ScriptDialect::JavaScript)
        .is_empty());
}

#[test]
fn test_markup_blocks_report_document_lines() {
    let markup = concat!(
        "<!doctype html>\n",
        "<html>\n",
        "<head>\n",
        "  <script src=\"vendor.js\"></script>\n",
        "  <script>\n",
        "    navigator.webkitGetUserMedia({ video: true }, onStream, onError);\n",
        "  </script>\n",
        "</head>\n",
        "<body>\n",
        "  <p>Copy with document.execCommand</p>\n",
        "  <script type=\"text/javascript\">\n",
        "    const a = new webkitAudioContext();\n",
        "  </script>\n",
        "</body>\n",
        "</html>\n",
    );
    let scanner = scanner();
    let issues = MarkupScriptExtractor::new(&scanner).scan("index.html", markup);

    assert_eq!(issues.len(), 2, "{:#?}", issues);
    assert_eq!(issues[0].api, "navigator.webkitGetUserMedia");
    assert_eq!(issues[0].line, 6);
    assert_eq!(issues[1].api, "webkitAudioContext");
    assert_eq!(issues[1].line, 12);

    // Same as scanning the whole unit as markup
    let via_unit = scanner.scan_unit("index.html", markup, SourceKind::Markup);
    assert_eq!(via_unit, issues);
}

#[test]
fn test_diagnostics_follow_rescans() {
    let scanner = scanner();
    let mut diagnostics = DiagnosticMap::new();

    let first = scanner.scan("buffer-1", "webkitURL(x);\nmozRequestAnimationFrame(f);", ScriptDialect::JavaScript);
    update_diagnostics(&mut diagnostics, "buffer-1", &first);
    assert_eq!(diagnostics["buffer-1"].len(), 2);
    assert_eq!(diagnostics["buffer-1"][1].range.start.line, 1);
    assert_eq!(diagnostics["buffer-1"][1].range.end.character, "mozRequestAnimationFrame".len());

    let fixed = scanner.scan("buffer-1", "URL(x);\nrequestAnimationFrame(f);", ScriptDialect::JavaScript);
    update_diagnostics(&mut diagnostics, "buffer-1", &fixed);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_shared_knowledge_base_across_scanners() {
    let kb = KnowledgeBase::embedded();
    let a = SourceScanner::new(Arc::clone(&kb));
    let b = SourceScanner::new(kb);

    let source = "document.execCommand('paste');";
    assert_eq!(
        a.scan("a.js", source, ScriptDialect::JavaScript),
        b.scan("a.js", source, ScriptDialect::JavaScript)
    );
}
