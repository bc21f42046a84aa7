pub mod schema;

pub use schema::{
    AgentConfig, ArticleSelectionConfig, Config, GuardrailsConfig, SourcesConfig, WikipediaConfig,
};
