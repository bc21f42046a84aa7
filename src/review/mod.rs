//! Reviewer operations over stored proposals.

use crate::error::ReviewError;
use crate::guardrails::{EditGuardrail, GuardrailVerdict};
use crate::models::{EditProposal, ProposedEdit};
use crate::push::{PushProtocol, apply_edits};
use crate::store::ProposalRepository;
use std::sync::Arc;

/// Shown instead of a diff when nothing is approved yet.
pub const NOTHING_APPROVED: &str = "No edits approved";

pub struct ReviewSession {
    store: Arc<dyn ProposalRepository>,
    guardrail: EditGuardrail,
    push: PushProtocol,
}

impl ReviewSession {
    pub fn new(
        store: Arc<dyn ProposalRepository>,
        guardrail: EditGuardrail,
        push: PushProtocol,
    ) -> Self {
        Self {
            store,
            guardrail,
            push,
        }
    }

    /// Queue a freshly analyzed proposal; returns its id.
    pub fn submit(&self, proposal: EditProposal) -> String {
        let id = proposal.id.clone();
        tracing::debug!(id = %id, title = %proposal.article.title, edits = proposal.edits.len(), "proposal queued");
        self.store.put(proposal);
        id
    }

    pub fn list(&self) -> Vec<EditProposal> {
        self.store.list_all()
    }

    pub fn get(&self, id: &str) -> Result<EditProposal, ReviewError> {
        self.store
            .get(id)
            .ok_or_else(|| ReviewError::ProposalNotFound(id.to_string()))
    }

    pub fn approve_edit(&self, id: &str, index: usize) -> Result<(), ReviewError> {
        self.update(id, |p| p.approve(index))
    }

    pub fn reject_edit(&self, id: &str, index: usize) -> Result<(), ReviewError> {
        self.update(id, |p| p.reject(index))
    }

    /// Replace an edit's proposed text and re-run the guardrail on it. The
    /// verdict is advisory; the new text is stored either way.
    pub fn update_edit(
        &self,
        id: &str,
        index: usize,
        proposed_text: &str,
    ) -> Result<GuardrailVerdict, ReviewError> {
        let mut verdict = GuardrailVerdict::Accepted;
        self.update(id, |p| {
            p.update_proposed_text(index, proposed_text)?;
            let edit = &p.edits[index];
            verdict = self
                .guardrail
                .validate_edit(edit, &p.article.wikitext, &p.article.wikitext);
            Ok(())
        })?;
        Ok(verdict)
    }

    pub fn reject_proposal(&self, id: &str, note: Option<String>) -> Result<(), ReviewError> {
        self.update(id, |p| p.mark_rejected(note))
    }

    /// Policy flags for one edit's proposed text.
    pub fn policy_flags(&self, id: &str, index: usize) -> Result<Vec<String>, ReviewError> {
        let proposal = self.get(id)?;
        let edit = edit_at(&proposal, index)?;
        Ok(self.guardrail.check_policy_violations(&edit.proposed_text))
    }

    /// Article text with every approved edit applied.
    pub fn modified_text(&self, id: &str) -> Result<String, ReviewError> {
        let proposal = self.get(id)?;
        Ok(apply_edits(&proposal.article, &proposal.approved_edits()))
    }

    pub fn preview(&self, id: &str) -> Result<String, ReviewError> {
        let proposal = self.get(id)?;
        let approved = proposal.approved_edits();
        if approved.is_empty() {
            return Ok(NOTHING_APPROVED.to_string());
        }
        let modified = apply_edits(&proposal.article, &approved);
        Ok(self.push.preview_diff(&proposal, &modified))
    }

    /// Whole-article guardrail verdict for the approved edits, shown to the
    /// reviewer before pushing.
    pub fn full_article_check(&self, id: &str) -> Result<GuardrailVerdict, ReviewError> {
        let proposal = self.get(id)?;
        let modified = apply_edits(&proposal.article, &proposal.approved_edits());
        Ok(self
            .guardrail
            .validate_full_article_edit(&proposal.article.wikitext, &modified))
    }

    /// Apply the approved edits and push them. The stored proposal only
    /// changes when the push succeeds, and then only in its status: reviewer
    /// actions stored while the push was in flight are kept.
    pub async fn push(&self, id: &str) -> Result<String, ReviewError> {
        let mut proposal = self.get(id)?;
        ensure_open(&proposal)?;
        let modified = apply_edits(&proposal.article, &proposal.approved_edits());
        let message = self.push.push_edits(&mut proposal, &modified).await?;

        let current = match self.store.get(id) {
            Some(mut current) => {
                current.status = proposal.status;
                current.reviewed_at = proposal.reviewed_at;
                current
            }
            None => proposal,
        };
        self.store.put(current);
        Ok(message)
    }

    /// Synchronous read-modify-write of one proposal. Nothing awaits between
    /// the read and the write, but two writers racing on the same proposal
    /// from different threads still resolve last-write-wins.
    fn update(
        &self,
        id: &str,
        change: impl FnOnce(&mut EditProposal) -> Result<(), ReviewError>,
    ) -> Result<(), ReviewError> {
        let mut proposal = self.get(id)?;
        change(&mut proposal)?;
        self.store.put(proposal);
        Ok(())
    }
}

fn ensure_open(proposal: &EditProposal) -> Result<(), ReviewError> {
    if proposal.status.is_terminal() {
        return Err(ReviewError::ProposalClosed {
            id: proposal.id.clone(),
            status: proposal.status.to_string(),
        });
    }
    Ok(())
}

fn edit_at(proposal: &EditProposal, index: usize) -> Result<&ProposedEdit, ReviewError> {
    proposal
        .edits
        .get(index)
        .ok_or(ReviewError::EditIndexOutOfRange {
            index,
            len: proposal.edits.len(),
        })
}

#[cfg(test)]
mod tests;
