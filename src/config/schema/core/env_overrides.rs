use super::Config;

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_env("ANTHROPIC_API_KEY") {
            self.anthropic_api_key = Some(key);
        }

        if let Some(username) = non_empty_env("WIKIPEDIA_USERNAME") {
            self.wikipedia_username = Some(username);
        }

        if let Some(password) = non_empty_env("WIKIPEDIA_PASSWORD") {
            self.wikipedia_password = Some(password);
        }

        if let Some(key) = non_empty_env("SEMANTIC_SCHOLAR_API_KEY") {
            self.semantic_scholar_api_key = Some(key);
        }

        if let Some(email) = non_empty_env("CROSSREF_EMAIL") {
            self.crossref_email = Some(email);
        }

        if let Some(model) = non_empty_env("WIKICITE_MODEL") {
            self.agent.model = model;
        }

        if let Some(limit) = non_empty_env("WIKICITE_RATE_LIMIT")
            && let Ok(limit) = limit.parse::<u32>()
            && limit > 0
        {
            self.wikipedia.rate_limit_edits_per_hour = limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::core::test_env::ScopedEnv;

    #[test]
    fn env_overrides_secrets_and_model() {
        let mut env = ScopedEnv::lock();
        env.set("ANTHROPIC_API_KEY", "sk-ant-test")
            .set("WIKIPEDIA_USERNAME", "Example@wikicite")
            .set("WIKIPEDIA_PASSWORD", "bot-password")
            .set("CROSSREF_EMAIL", "ops@example.org")
            .set("WIKICITE_MODEL", "claude-test");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(
            config.wikipedia_username.as_deref(),
            Some("Example@wikicite")
        );
        assert!(config.has_wiki_credentials());
        assert_eq!(config.crossref_email.as_deref(), Some("ops@example.org"));
        assert_eq!(config.agent.model, "claude-test");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut env = ScopedEnv::lock();
        env.set("ANTHROPIC_API_KEY", "");

        let mut config = Config {
            anthropic_api_key: Some("from-file".into()),
            ..Config::default()
        };
        config.apply_env_overrides();
        assert_eq!(config.anthropic_api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn rate_limit_override_ignores_garbage_and_zero() {
        let mut env = ScopedEnv::lock();

        env.set("WIKICITE_RATE_LIMIT", "abc");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.wikipedia.rate_limit_edits_per_hour, 10);

        env.set("WIKICITE_RATE_LIMIT", "0");
        config.apply_env_overrides();
        assert_eq!(config.wikipedia.rate_limit_edits_per_hour, 10);

        env.set("WIKICITE_RATE_LIMIT", "4");
        config.apply_env_overrides();
        assert_eq!(config.wikipedia.rate_limit_edits_per_hour, 4);
    }
}
