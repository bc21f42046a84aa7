mod agent;
mod core;
mod guardrails;
mod selection;
mod sources;
mod wikipedia;

pub use agent::AgentConfig;
pub use core::Config;
pub use guardrails::GuardrailsConfig;
pub use selection::ArticleSelectionConfig;
pub use sources::SourcesConfig;
pub use wikipedia::WikipediaConfig;
