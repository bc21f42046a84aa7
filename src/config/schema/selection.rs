use serde::{Deserialize, Serialize};

/// Criteria the article picker applies to category members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSelectionConfig {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_max_body_lines")]
    pub max_body_lines: usize,
    #[serde(default = "default_true")]
    pub exclude_blp: bool,
    #[serde(default = "default_true")]
    pub exclude_protected: bool,
}

fn default_category() -> String {
    "Category:Articles_lacking_sources".into()
}

fn default_max_body_lines() -> usize {
    4
}

fn default_true() -> bool {
    true
}

impl Default for ArticleSelectionConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            max_body_lines: default_max_body_lines(),
            exclude_blp: true,
            exclude_protected: true,
        }
    }
}
