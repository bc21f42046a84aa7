//! Edit guardrails: markup-aware text metrics, the advisory policy scanner
//! and the validator that accepts or rejects proposed edits.

pub mod markup;
pub mod metrics;
pub mod policy;
pub mod sequence;
mod validation;

pub use metrics::{count_words, is_citation_or_template, removed_content_pct, similarity};
pub use policy::check_policy_violations;
pub use validation::{EditGuardrail, GuardrailVerdict};
