use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_edits_per_article")]
    pub max_edits_per_article: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".into()
}

fn default_max_edits_per_article() -> usize {
    15
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_api_url() -> String {
    "https://api.anthropic.com".into()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_edits_per_article: default_max_edits_per_article(),
            max_tokens: default_max_tokens(),
            api_url: default_api_url(),
        }
    }
}
