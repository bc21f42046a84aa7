use super::{Approval, Article, EditType, ProposedEdit};
use crate::error::ReviewError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Pushed,
}

impl ProposalStatus {
    /// `Pushed` and `Rejected` are terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Pushed | Self::Rejected)
    }
}

/// All edits proposed for one article, plus review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditProposal {
    pub id: String,
    pub article: Article,
    pub edits: Vec<ProposedEdit>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_notes: Option<String>,
}

impl EditProposal {
    pub fn new(article: Article, edits: Vec<ProposedEdit>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            article,
            edits,
            status: ProposalStatus::Pending,
            created_at: Utc::now(),
            reviewed_at: None,
            reviewer_notes: None,
        }
    }

    /// A proposal that could not be produced, closed from the start with
    /// `note` explaining why.
    pub fn failed(article: Article, note: impl Into<String>) -> Self {
        Self {
            status: ProposalStatus::Rejected,
            reviewer_notes: Some(note.into()),
            ..Self::new(article, Vec::new())
        }
    }

    pub fn approved_edits(&self) -> Vec<&ProposedEdit> {
        self.edits.iter().filter(|e| e.is_approved()).collect()
    }

    /// Wiki edit summary for the approved edits; empty when none are approved.
    pub fn edit_summary(&self, suffix: &str) -> String {
        build_edit_summary(self.edits.iter().filter(|e| e.is_approved()), suffix)
    }

    pub fn approve(&mut self, index: usize) -> Result<(), ReviewError> {
        self.edit_mut(index)?.approval = Approval::Approved;
        Ok(())
    }

    pub fn reject(&mut self, index: usize) -> Result<(), ReviewError> {
        self.edit_mut(index)?.approval = Approval::Rejected;
        Ok(())
    }

    /// Replace the proposed text of one edit before push.
    pub fn update_proposed_text(
        &mut self,
        index: usize,
        proposed_text: impl Into<String>,
    ) -> Result<(), ReviewError> {
        self.edit_mut(index)?.proposed_text = proposed_text.into();
        Ok(())
    }

    /// Advance to `Pushed`. Only the push protocol calls this, after a
    /// confirmed submission.
    pub fn mark_pushed(&mut self) -> Result<(), ReviewError> {
        self.ensure_open()?;
        self.record_pushed();
        Ok(())
    }

    /// Unchecked transition for a save the wiki has already confirmed.
    pub(crate) fn record_pushed(&mut self) {
        self.status = ProposalStatus::Pushed;
        self.reviewed_at = Some(Utc::now());
    }

    pub fn mark_rejected(&mut self, note: Option<String>) -> Result<(), ReviewError> {
        self.ensure_open()?;
        self.status = ProposalStatus::Rejected;
        self.reviewed_at = Some(Utc::now());
        if note.is_some() {
            self.reviewer_notes = note;
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), ReviewError> {
        if self.status.is_terminal() {
            return Err(ReviewError::ProposalClosed {
                id: self.id.clone(),
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    fn edit_mut(&mut self, index: usize) -> Result<&mut ProposedEdit, ReviewError> {
        self.ensure_open()?;
        let len = self.edits.len();
        let edit = self
            .edits
            .get_mut(index)
            .ok_or(ReviewError::EditIndexOutOfRange { index, len })?;
        // Any reviewer action moves a fresh proposal into review.
        if self.status == ProposalStatus::Pending {
            self.status = ProposalStatus::Approved;
        }
        Ok(edit)
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count > 1 {
        format!("{count} {noun}s")
    } else {
        format!("{count} {noun}")
    }
}

/// Group edits by type into the fixed clause order
/// citations, wikilinks, grammar, style, policy, formatting.
pub fn build_edit_summary<'a>(
    edits: impl IntoIterator<Item = &'a ProposedEdit>,
    suffix: &str,
) -> String {
    let mut counts: HashMap<EditType, usize> = HashMap::new();
    for edit in edits {
        *counts.entry(edit.edit_type).or_default() += 1;
    }
    if counts.is_empty() {
        return String::new();
    }

    let count = |t: EditType| counts.get(&t).copied().unwrap_or(0);
    let mut clauses = Vec::new();
    if count(EditType::Citation) > 0 {
        clauses.push(format!("added {}", plural(count(EditType::Citation), "citation")));
    }
    if count(EditType::Wikilink) > 0 {
        clauses.push(plural(count(EditType::Wikilink), "wikilink"));
    }
    if count(EditType::Grammar) > 0 {
        clauses.push("fixed grammar".into());
    }
    if count(EditType::Style) > 0 {
        clauses.push("style fixes".into());
    }
    if count(EditType::Policy) > 0 {
        clauses.push("policy compliance".into());
    }
    if count(EditType::Formatting) > 0 {
        clauses.push("formatting".into());
    }

    format!("Copyedit: {} {suffix}", clauses.join(", "))
}
