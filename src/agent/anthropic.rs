use super::prompt::{SYSTEM_PROMPT, user_prompt};
use super::traits::{AgentFuture, EditAgent};
use super::{RawEditCandidate, extract_json};
use crate::config::{AgentConfig, Config};
use crate::error::AgentError;
use crate::http::{AGENT_TIMEOUT_SECS, api_error, build_client};
use crate::models::Article;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Unsupported,
}

/// [`EditAgent`] backed by the Anthropic Messages API.
pub struct AnthropicAgent {
    client: Client,
    messages_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl AnthropicAgent {
    pub fn new(api_key: Option<&str>, config: &AgentConfig, user_agent: &str) -> Self {
        let base = config.api_url.trim_end_matches('/');
        Self {
            client: build_client(AGENT_TIMEOUT_SECS, user_agent),
            messages_url: format!("{base}/v1/messages"),
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.anthropic_api_key.as_deref(),
            &config.agent,
            &config.wikipedia.user_agent,
        )
    }

    fn text_of(response: MessagesResponse) -> Option<String> {
        let text = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ResponseBlock::Text { text } => Some(text),
                ResponseBlock::Unsupported => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        if text.is_empty() { None } else { Some(text) }
    }

    /// One system + user exchange; returns the reply text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, AgentError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AgentError::MissingCredentials("set ANTHROPIC_API_KEY".into()))?;

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: user,
            }],
        };

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AgentError::Request(api_error("Anthropic", response).await));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Request(format!("invalid response body: {e}")))?;
        Self::text_of(body).ok_or(AgentError::EmptyResponse)
    }
}

impl EditAgent for AnthropicAgent {
    fn propose<'a>(
        &'a self,
        article: &'a Article,
        sources_context: &'a str,
    ) -> AgentFuture<'a, Vec<RawEditCandidate>> {
        Box::pin(async move {
            tracing::info!(title = %article.title, model = %self.model, "requesting edit proposals");
            let reply = self
                .complete(SYSTEM_PROMPT, &user_prompt(article, sources_context))
                .await?;
            let candidates = extract_json(&reply);
            tracing::debug!(count = candidates.len(), "agent proposed edits");
            Ok(candidates)
        })
    }
}
