//! Language-model edit proposals: prompts, response parsing, the model
//! adapter and guardrail filtering.

mod analyzer;
mod anthropic;
mod parse;
pub mod prompt;
mod traits;

pub use analyzer::{EditAnalyzer, NO_CLAIMS_CONTEXT};
pub use anthropic::AnthropicAgent;
pub use parse::{RawEditCandidate, extract_json, parse_candidates};
pub use traits::{AgentFuture, EditAgent};
