use super::conflict::ConflictDetector;
use super::preview;
use super::rate_limit::RateLimiter;
use crate::config::WikipediaConfig;
use crate::error::PushError;
use crate::models::EditProposal;
use crate::wiki::{EditRequest, SubmitFlags, WikiClient};
use std::sync::Arc;

/// Gated submission of reviewed edits.
///
/// Closed proposals are refused outright. The remaining gates run in a fixed
/// order and each one is final: rate limit, then edit conflict, then a
/// non-empty summary, then the submission itself. Quota is
/// consumed and the proposal marked `Pushed` only after the wiki confirms
/// the save.
pub struct PushProtocol {
    wiki: Arc<dyn WikiClient>,
    rate_limiter: Arc<RateLimiter>,
    conflicts: ConflictDetector,
    edit_summary_suffix: String,
}

impl PushProtocol {
    pub fn new(
        wiki: Arc<dyn WikiClient>,
        rate_limiter: Arc<RateLimiter>,
        edit_summary_suffix: impl Into<String>,
    ) -> Self {
        Self {
            conflicts: ConflictDetector::new(Arc::clone(&wiki)),
            wiki,
            rate_limiter,
            edit_summary_suffix: edit_summary_suffix.into(),
        }
    }

    pub fn from_config(wiki: Arc<dyn WikiClient>, config: &WikipediaConfig) -> Self {
        Self::new(
            wiki,
            Arc::new(RateLimiter::new(config.rate_limit_edits_per_hour)),
            config.edit_summary_suffix.clone(),
        )
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn edit_summary_suffix(&self) -> &str {
        &self.edit_summary_suffix
    }

    /// Submit `modified_text` for the proposal's article. Returns the
    /// success message on a confirmed save.
    pub async fn push_edits(
        &self,
        proposal: &mut EditProposal,
        modified_text: &str,
    ) -> Result<String, PushError> {
        if proposal.status.is_terminal() {
            return Err(PushError::ProposalClosed {
                status: proposal.status.to_string(),
            });
        }
        let title = proposal.article.title.clone();

        if !self.rate_limiter.can_edit() {
            tracing::warn!(title = %title, "push refused: rate limit reached");
            return Err(PushError::RateLimited);
        }

        if self
            .conflicts
            .has_conflict(&title, &proposal.article.revision_id)
            .await
        {
            return Err(PushError::Conflict);
        }

        let summary = proposal.edit_summary(&self.edit_summary_suffix);
        if summary.is_empty() {
            return Err(PushError::NoApprovedEdits);
        }

        let request = EditRequest {
            title: &title,
            text: modified_text,
            summary: &summary,
            base_revision: Some(proposal.article.revision_id.as_str()),
            flags: SubmitFlags::MINOR_BOT,
        };
        if let Err(e) = self.wiki.submit(request).await {
            tracing::warn!(title = %title, error = %e, "push failed");
            return Err(PushError::Transport(e.to_string()));
        }

        self.rate_limiter.record_edit();
        // Still open: checked on entry and held by `&mut` since.
        proposal.record_pushed();
        tracing::info!(title = %title, summary = %summary, "edits pushed");
        Ok(format!("Successfully pushed edits. Edit summary: {summary}"))
    }

    pub fn preview_diff(&self, proposal: &EditProposal, modified_text: &str) -> String {
        preview::preview_diff(proposal, modified_text)
    }
}
