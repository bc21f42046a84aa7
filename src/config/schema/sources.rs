use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_search_apis")]
    pub search_apis: Vec<String>,
    #[serde(default = "default_true")]
    pub reliability_check: bool,
    /// Timeout for bibliographic search and URL verification calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_semantic_scholar_url")]
    pub semantic_scholar_url: String,
    #[serde(default = "default_crossref_url")]
    pub crossref_url: String,
}

fn default_search_apis() -> Vec<String> {
    vec![
        "semantic_scholar".into(),
        "crossref".into(),
        "google_scholar".into(),
    ]
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_semantic_scholar_url() -> String {
    "https://api.semanticscholar.org".into()
}

fn default_crossref_url() -> String {
    "https://api.crossref.org".into()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            search_apis: default_search_apis(),
            reliability_check: true,
            timeout_secs: default_timeout_secs(),
            semantic_scholar_url: default_semantic_scholar_url(),
            crossref_url: default_crossref_url(),
        }
    }
}

impl SourcesConfig {
    pub fn uses(&self, api: &str) -> bool {
        self.search_apis.iter().any(|a| a == api)
    }
}
