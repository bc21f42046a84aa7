//! Proposal storage for the lifetime of a review session.

use crate::models::EditProposal;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Keyed storage of proposals. `get` hands out a copy; callers write
/// changes back with `put`.
pub trait ProposalRepository: Send + Sync {
    fn get(&self, id: &str) -> Option<EditProposal>;

    /// Insert or replace by `proposal.id`.
    fn put(&self, proposal: EditProposal);

    /// All proposals, oldest first.
    fn list_all(&self) -> Vec<EditProposal>;
}

#[derive(Debug, Default)]
pub struct InMemoryProposalStore {
    proposals: Mutex<HashMap<String, EditProposal>>,
}

impl InMemoryProposalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProposalRepository for InMemoryProposalStore {
    fn get(&self, id: &str) -> Option<EditProposal> {
        self.proposals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn put(&self, proposal: EditProposal) {
        self.proposals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(proposal.id.clone(), proposal);
    }

    fn list_all(&self) -> Vec<EditProposal> {
        let mut all: Vec<EditProposal> = self
            .proposals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }
}
