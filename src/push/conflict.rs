use crate::wiki::WikiClient;
use std::sync::Arc;

/// Optimistic concurrency check against the live revision id.
#[derive(Clone)]
pub struct ConflictDetector {
    wiki: Arc<dyn WikiClient>,
}

impl ConflictDetector {
    pub fn new(wiki: Arc<dyn WikiClient>) -> Self {
        Self { wiki }
    }

    /// True when the live revision differs from `base_revision_id`, or when
    /// it cannot be determined.
    pub async fn has_conflict(&self, title: &str, base_revision_id: &str) -> bool {
        match self.wiki.live_revision_id(title).await {
            Ok(live) => {
                let conflict = live != base_revision_id;
                if conflict {
                    tracing::info!(
                        title,
                        base = base_revision_id,
                        live = %live,
                        "article changed since analysis"
                    );
                }
                conflict
            }
            Err(e) => {
                tracing::warn!(title, error = %e, "could not check live revision; assuming conflict");
                true
            }
        }
    }
}
