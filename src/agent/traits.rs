use super::RawEditCandidate;
use crate::error::AgentError;
use crate::models::Article;
use std::future::Future;
use std::pin::Pin;

pub type AgentFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AgentError>> + Send + 'a>>;

/// A language model that proposes edits for one article.
pub trait EditAgent: Send + Sync {
    /// Raw candidates in the order the model gave them. Unparsable output
    /// is an empty list, not an error.
    fn propose<'a>(
        &'a self,
        article: &'a Article,
        sources_context: &'a str,
    ) -> AgentFuture<'a, Vec<RawEditCandidate>>;
}
