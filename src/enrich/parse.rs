//! Parsing of provider replies into an [`AiSuggestion`]
//!
//! A JSON object reply is read field by field. Anything else is treated as
//! free text: each labelled section is taken from the lines after the first
//! line mentioning its label, up to a blank line, a numbered-list marker or a
//! line containing a colon. Fields that cannot be recovered get a placeholder.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::schema::AiSuggestion;

const ALTERNATIVE_PLACEHOLDER: &str = "Modern alternative available";
const EXPLANATION_PLACEHOLDER: &str = "This API has compatibility issues";
const CODE_EXAMPLE_PLACEHOLDER: &str = "// See documentation for examples";
const BROWSER_SUPPORT_PLACEHOLDER: &str = "Check MDN for browser support";

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredReply {
    #[serde(default)]
    alternative: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    code_example: Option<String>,
    #[serde(default)]
    browser_support: Option<String>,
}

/// Parse a provider reply, structured or free text
pub fn parse_response(response: &str) -> AiSuggestion {
    match serde_json::from_str::<StructuredReply>(strip_code_fence(response)) {
        Ok(reply) => AiSuggestion {
            alternative: or_placeholder(reply.alternative, ALTERNATIVE_PLACEHOLDER),
            explanation: or_placeholder(reply.explanation, EXPLANATION_PLACEHOLDER),
            code_example: or_placeholder(reply.code_example, CODE_EXAMPLE_PLACEHOLDER),
            browser_support: or_placeholder(reply.browser_support, BROWSER_SUPPORT_PLACEHOLDER),
        },
        Err(_) => AiSuggestion {
            alternative: section_or(response, "alternative", ALTERNATIVE_PLACEHOLDER),
            explanation: section_or(response, "explanation", EXPLANATION_PLACEHOLDER),
            code_example: section_or(response, "codeExample", CODE_EXAMPLE_PLACEHOLDER),
            browser_support: section_or(response, "browserSupport", BROWSER_SUPPORT_PLACEHOLDER),
        },
    }
}

/// Lines following the first line that mentions `section`
pub fn extract_section(text: &str, section: &str) -> String {
    let needle = section.to_lowercase();
    let mut capturing = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.to_lowercase().contains(&needle) {
            capturing = true;
            continue;
        }

        if capturing {
            if line.trim().is_empty() || NUMBERED_ITEM.is_match(line) || line.contains(':') {
                break;
            }
            captured.push(line);
        }
    }

    captured.join("\n").trim().to_string()
}

fn section_or(text: &str, section: &str, placeholder: &str) -> String {
    let value = extract_section(text, section);
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Models often wrap JSON in a ```json fence
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_suffix("```").unwrap_or(body);
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}
