use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_EDIT_SUMMARY_SUFFIX: &str =
    "(AI-assisted citation/cleanup, human-reviewed)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_edit_summary_suffix")]
    pub edit_summary_suffix: String,
    #[serde(default = "default_rate_limit_edits_per_hour")]
    pub rate_limit_edits_per_hour: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Timeout for wiki reads and writes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://en.wikipedia.org/w/api.php".into()
}

fn default_edit_summary_suffix() -> String {
    DEFAULT_EDIT_SUMMARY_SUFFIX.into()
}

fn default_rate_limit_edits_per_hour() -> u32 {
    10
}

fn default_user_agent() -> String {
    "WikiCiteBot/1.0 (https://github.com/wikicite/wikicite; citation-cleanup-assistant)".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            edit_summary_suffix: default_edit_summary_suffix(),
            rate_limit_edits_per_hour: default_rate_limit_edits_per_hour(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WikipediaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit_edits_per_hour == 0 {
            return Err(ConfigError::Validation(
                "wikipedia.rate_limit_edits_per_hour must be at least 1".into(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "wikipedia.api_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Base URL for human-facing article links, derived from the API endpoint.
    pub fn article_base_url(&self) -> String {
        let trimmed = self.api_url.trim_end_matches('/');
        let root = trimmed.strip_suffix("/w/api.php").unwrap_or(trimmed);
        format!("{root}/wiki/")
    }
}
