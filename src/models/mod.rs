//! Domain types shared by the agent, guardrails, review session and push
//! protocol.

mod article;
mod edit;
mod proposal;
mod source;

pub(crate) use article::article_url;
pub use article::{Article, CandidateArticle};
pub use edit::{Approval, Confidence, EditType, ProposedEdit};
pub use proposal::{EditProposal, ProposalStatus, build_edit_summary};
pub use source::{ReliabilityRating, Source, SourceType};
