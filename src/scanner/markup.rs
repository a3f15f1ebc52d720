//! Inline `<script>` extraction for HTML documents

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::ScriptDialect;
use crate::schema::Issue;

use super::SourceScanner;

/// Content between `<script ...>` and `</script>`, case-insensitive, non-greedy
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").unwrap());

/// Scans the inline scripts of a markup document
pub struct MarkupScriptExtractor<'a> {
    scanner: &'a SourceScanner,
}

impl<'a> MarkupScriptExtractor<'a> {
    pub fn new(scanner: &'a SourceScanner) -> Self {
        Self { scanner }
    }

    /// Scan every script block in document order. Each block's issues are
    /// shifted by the number of newlines that precede the block's opening tag.
    pub fn scan(&self, file: &str, markup: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for caps in SCRIPT_BLOCK.captures_iter(markup) {
            let (Some(block), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            let line_offset = markup[..block.start()].matches('\n').count();
            let mut block_issues =
                self.scanner
                    .scan(file, content.as_str(), ScriptDialect::JavaScript);
            for issue in &mut block_issues {
                issue.line += line_offset;
            }
            issues.extend(block_issues);
        }

        issues
    }
}
