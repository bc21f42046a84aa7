use super::super::{
    AgentConfig, ArticleSelectionConfig, GuardrailsConfig, SourcesConfig, WikipediaConfig,
};
use anyhow::Result;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub wikipedia_username: Option<String>,
    #[serde(default)]
    pub wikipedia_password: Option<String>,
    #[serde(default)]
    pub semantic_scholar_api_key: Option<String>,
    #[serde(default)]
    pub crossref_email: Option<String>,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub guardrails: GuardrailsConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    #[serde(default)]
    pub article_selection: ArticleSelectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".wikicite").join("config.toml"),
            anthropic_api_key: None,
            wikipedia_username: None,
            wikipedia_password: None,
            semantic_scholar_api_key: None,
            crossref_email: None,
            agent: AgentConfig::default(),
            guardrails: GuardrailsConfig::default(),
            sources: SourcesConfig::default(),
            wikipedia: WikipediaConfig::default(),
            article_selection: ArticleSelectionConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.guardrails.validate()?;
        self.wikipedia.validate()?;
        if self.agent.max_edits_per_article == 0 {
            anyhow::bail!("agent.max_edits_per_article must be at least 1");
        }
        Ok(())
    }

    /// Whether both halves of a bot-password login are present.
    pub fn has_wiki_credentials(&self) -> bool {
        matches!(
            (&self.wikipedia_username, &self.wikipedia_password),
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty()
        )
    }
}
