use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(3600);

/// Sliding one-hour cap on submitted edits.
///
/// Timestamps older than the window are pruned lazily on every check.
#[derive(Debug)]
pub struct RateLimiter {
    max_edits_per_hour: usize,
    edits: Mutex<Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(max_edits_per_hour: u32) -> Self {
        Self {
            max_edits_per_hour: usize::try_from(max_edits_per_hour).unwrap_or(usize::MAX),
            edits: Mutex::new(Vec::new()),
        }
    }

    pub fn can_edit(&self) -> bool {
        self.prune_and_count() < self.max_edits_per_hour
    }

    /// Record one confirmed submission.
    pub fn record_edit(&self) {
        self.edits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Instant::now());
    }

    /// Edits still counted against the window.
    pub fn recent_edits(&self) -> usize {
        self.prune_and_count()
    }

    pub fn max_edits_per_hour(&self) -> usize {
        self.max_edits_per_hour
    }

    fn prune_and_count(&self) -> usize {
        let mut edits = self.edits.lock().unwrap_or_else(PoisonError::into_inner);
        // Early in process uptime there may be nothing an hour old yet.
        if let Some(cutoff) = Instant::now().checked_sub(WINDOW) {
            edits.retain(|t| *t > cutoff);
        }
        edits.len()
    }

    /// Shift every recorded timestamp back by `by`.
    #[cfg(test)]
    pub(crate) fn age_all(&self, by: Duration) {
        let mut edits = self.edits.lock().unwrap_or_else(PoisonError::into_inner);
        edits.retain_mut(|t| match t.checked_sub(by) {
            Some(aged) => {
                *t = aged;
                true
            }
            // Older than the clock can express: certainly outside the window.
            None => false,
        });
    }
}
