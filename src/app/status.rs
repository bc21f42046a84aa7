use crate::config::Config;

fn flag(set: bool) -> &'static str {
    if set { "set" } else { "not set" }
}

/// Human-readable dump of the effective configuration. Secrets are only
/// reported as set or unset.
pub fn render_status(config: &Config) -> String {
    let lines = vec![
        "Current Configuration:".to_string(),
        format!("  Config file: {}", config.config_path.display()),
        String::new(),
        "Agent:".to_string(),
        format!("  Model: {}", config.agent.model),
        format!(
            "  Max edits per article: {}",
            config.agent.max_edits_per_article
        ),
        format!("  Max tokens: {}", config.agent.max_tokens),
        format!(
            "  API key: {}",
            flag(config.anthropic_api_key.as_deref().is_some_and(|k| !k.trim().is_empty()))
        ),
        String::new(),
        "Guardrails:".to_string(),
        format!("  Max new words: {}", config.guardrails.max_new_words),
        format!(
            "  Max content removal: {}%",
            config.guardrails.max_content_removal_pct
        ),
        format!(
            "  Min similarity ratio: {}",
            config.guardrails.min_similarity_ratio
        ),
        format!("  Skip BLP articles: {}", config.guardrails.skip_blp_articles),
        String::new(),
        "Sources:".to_string(),
        format!("  Search APIs: {}", config.sources.search_apis.join(", ")),
        format!("  Reliability check: {}", config.sources.reliability_check),
        format!(
            "  Semantic Scholar key: {}",
            flag(config.semantic_scholar_api_key.is_some())
        ),
        format!("  CrossRef email: {}", flag(config.crossref_email.is_some())),
        String::new(),
        "Wikipedia:".to_string(),
        format!("  API: {}", config.wikipedia.api_url),
        format!(
            "  Rate limit: {} edits/hour",
            config.wikipedia.rate_limit_edits_per_hour
        ),
        format!("  Credentials: {}", flag(config.has_wiki_credentials())),
        String::new(),
        "Article Selection:".to_string(),
        format!("  Category: {}", config.article_selection.category),
        format!(
            "  Max body lines: {}",
            config.article_selection.max_body_lines
        ),
        format!("  Exclude BLP: {}", config.article_selection.exclude_blp),
        format!(
            "  Exclude protected: {}",
            config.article_selection.exclude_protected
        ),
    ];
    lines.join("\n")
}
