//! Remediation suggestions for reported issues
//!
//! With a credential configured, each API is sent to a chat-completion
//! provider and the reply is parsed into an [`AiSuggestion`]. Without one, or
//! when the provider fails in any way, a static suggestion is used instead.
//! Enrichment never fails a scan.

pub mod fallback;
pub mod openai;
pub mod parse;

#[cfg(test)]
mod stub_server;

pub use fallback::fallback_suggestion;
pub use openai::ChatCompletionClient;
pub use parse::parse_response;

use crate::config::SuggestionConfig;
use crate::error::Result;
use crate::schema::{AiSuggestion, Issue};

/// Produces suggestions, remotely when possible
pub struct SuggestionEnricher {
    client: Option<ChatCompletionClient>,
}

impl SuggestionEnricher {
    pub fn new(config: &SuggestionConfig) -> Result<Self> {
        Ok(Self {
            client: ChatCompletionClient::from_config(config)?,
        })
    }

    /// Enricher that never contacts a provider
    pub fn offline() -> Self {
        Self { client: None }
    }

    pub fn has_credential(&self) -> bool {
        self.client.is_some()
    }

    /// Suggestion for one API occurrence
    pub async fn enrich(&self, api: &str, context: &str) -> AiSuggestion {
        let Some(client) = &self.client else {
            return fallback_suggestion(api);
        };

        match client.complete(api, context).await {
            Ok(reply) => parse_response(&reply),
            Err(e) => {
                tracing::warn!("Suggestion provider failed for {}: {}", api, e);
                fallback_suggestion(api)
            }
        }
    }

    /// Attach a suggestion to every issue, one provider call at a time
    pub async fn enrich_issues(&self, issues: &mut [Issue]) {
        for issue in issues.iter_mut() {
            let suggestion = self.enrich(&issue.api, &issue.context).await;
            issue.ai_suggestion = Some(suggestion);
        }
    }
}
