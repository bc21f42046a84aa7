use super::EditAgent;
use super::parse::parse_candidates;
use crate::guardrails::EditGuardrail;
use crate::models::{Article, EditProposal};
use crate::sources::SourceFinder;
use std::fmt::Write as _;
use std::sync::Arc;

const CLAIMS_SEARCHED: usize = 3;
const SOURCES_PER_CLAIM: usize = 2;
const CLAIM_PREVIEW_CHARS: usize = 100;

pub const NO_CLAIMS_CONTEXT: &str = "No clear factual claims found to cite.";

/// Turns an article into a guardrail-filtered [`EditProposal`].
pub struct EditAnalyzer {
    agent: Arc<dyn EditAgent>,
    sources: Arc<SourceFinder>,
    guardrail: EditGuardrail,
    max_edits: usize,
}

impl EditAnalyzer {
    pub fn new(
        agent: Arc<dyn EditAgent>,
        sources: Arc<SourceFinder>,
        guardrail: EditGuardrail,
        max_edits: usize,
    ) -> Self {
        Self {
            agent,
            sources,
            guardrail,
            max_edits,
        }
    }

    /// Markdown listing citations found for the article's first claims.
    pub async fn sources_context(&self, article: &Article) -> String {
        let claims = self.sources.extract_claims(&article.wikitext);
        if claims.is_empty() {
            return NO_CLAIMS_CONTEXT.to_string();
        }

        let mut context = String::from("## Available Sources for Citation\n\n");
        for (i, claim) in claims.iter().take(CLAIMS_SEARCHED).enumerate() {
            let sources = self
                .sources
                .find_sources_for_claim(claim, SOURCES_PER_CLAIM)
                .await;
            if sources.is_empty() {
                continue;
            }
            let preview: String = claim.chars().take(CLAIM_PREVIEW_CHARS).collect();
            let _ = writeln!(context, "### Claim {}: \"{preview}...\"", i + 1);
            for (j, source) in sources.iter().enumerate() {
                let _ = writeln!(context, "{}. {}", j + 1, source.to_citation_template());
            }
            context.push('\n');
        }
        context
    }

    /// Ask the agent for edits and keep the ones the guardrail accepts. An
    /// agent failure produces a closed proposal carrying the error.
    pub async fn analyze(&self, article: Article) -> EditProposal {
        let context = self.sources_context(&article).await;
        let raw = match self.agent.propose(&article, &context).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(title = %article.title, error = %e, "agent call failed");
                return EditProposal::failed(article, format!("Error: {e}"));
            }
        };

        let edits: Vec<_> = parse_candidates(raw, self.max_edits)
            .into_iter()
            .filter(|edit| {
                let verdict =
                    self.guardrail
                        .validate_edit(edit, &article.wikitext, &article.wikitext);
                if let Some(reason) = verdict.reason() {
                    tracing::warn!(edit_type = %edit.edit_type, reason, "rejected edit");
                }
                verdict.is_accepted()
            })
            .collect();

        tracing::info!(title = %article.title, kept = edits.len(), "analysis complete");
        EditProposal::new(article, edits)
    }
}
