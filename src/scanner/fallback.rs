//! Line-oriented text matching for sources that do not parse
//!
//! Every known identifier is matched as a word-bounded literal on each line;
//! a `RegexSet` pass picks which identifiers occur before any is located.
//! This cannot tell real API use apart from the same text inside a comment or
//! string literal, so it over-reports; it is only used when parsing fails.

use crate::knowledge::KnowledgeBase;
use crate::schema::Issue;

use super::{build_issue, utf16_column};

/// Match every known identifier against each line of `source`.
///
/// Issues come out in line order, then column order. Hits at the same column
/// keep identifier order.
pub fn scan_text(kb: &KnowledgeBase, file: &str, source: &str) -> Vec<Issue> {
    let matchers = kb.text_matchers();
    let mut issues = Vec::new();

    for (index, line) in source.split('\n').enumerate() {
        let mut hits: Vec<(usize, &str)> = matchers
            .find_all(line)
            .into_iter()
            .map(|(offset, api)| (utf16_column(line, offset), api))
            .collect();
        if hits.is_empty() {
            continue;
        }
        hits.sort_by_key(|(column, _)| *column);

        let context = line.trim();
        for (column, api) in hits {
            if let Some(descriptor) = kb.lookup(api) {
                issues.push(build_issue(file, index + 1, column, descriptor, context));
            }
        }
    }

    issues
}
