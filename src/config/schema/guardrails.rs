use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Numeric thresholds bounding how much a single proposed edit (or the whole
/// article diff) may change existing text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailsConfig {
    #[serde(default = "default_max_new_words")]
    pub max_new_words: usize,
    #[serde(default = "default_max_content_removal_pct")]
    pub max_content_removal_pct: u32,
    #[serde(default = "default_min_similarity_ratio")]
    pub min_similarity_ratio: f64,
    #[serde(default = "default_true")]
    pub skip_blp_articles: bool,
}

fn default_max_new_words() -> usize {
    50
}

fn default_max_content_removal_pct() -> u32 {
    20
}

fn default_min_similarity_ratio() -> f64 {
    0.85
}

fn default_true() -> bool {
    true
}

impl Default for GuardrailsConfig {
    fn default() -> Self {
        Self {
            max_new_words: default_max_new_words(),
            max_content_removal_pct: default_max_content_removal_pct(),
            min_similarity_ratio: default_min_similarity_ratio(),
            skip_blp_articles: true,
        }
    }
}

impl GuardrailsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_similarity_ratio.is_nan() {
            return Err(ConfigError::Validation(
                "guardrails.min_similarity_ratio must not be NaN".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_similarity_ratio) {
            return Err(ConfigError::Validation(
                "guardrails.min_similarity_ratio must be in [0.0, 1.0]".into(),
            ));
        }
        if self.max_content_removal_pct > 100 {
            return Err(ConfigError::Validation(
                "guardrails.max_content_removal_pct must be <= 100".into(),
            ));
        }
        Ok(())
    }
}
