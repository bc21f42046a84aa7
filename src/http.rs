//! Shared HTTP plumbing for the wiki, agent and bibliographic clients.

use reqwest::Client;
use std::borrow::Cow;
use std::time::Duration;

const MAX_API_ERROR_CHARS: usize = 200;

/// Timeout for language-model requests.
pub const AGENT_TIMEOUT_SECS: u64 = 120;

pub fn build_client(timeout_secs: u64, user_agent: &str) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(user_agent.to_string())
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Same as [`build_client`] with a cookie store, for login sessions.
pub fn build_session_client(timeout_secs: u64, user_agent: &str) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent.to_string())
        .cookie_store(true)
        .build()
        .unwrap_or_else(|_| Client::new())
}

const SECRET_MARKERS: [&str; 8] = [
    "sk-ant-",
    "x-api-key: ",
    "api_key=",
    "lgpassword=",
    "\"lgpassword\":\"",
    "token=",
    "\"token\":\"",
    "\"csrftoken\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '/' | '=' | '\\')
}

/// Redact the value following each known secret marker.
pub fn scrub_secrets(input: &str) -> Cow<'_, str> {
    if !SECRET_MARKERS.iter().any(|m| input.contains(m)) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in SECRET_MARKERS {
        let mut from = 0;
        while let Some(rel) = scrubbed[from..].find(marker) {
            let value_start = from + rel + marker.len();
            let value_end = scrubbed[value_start..]
                .char_indices()
                .find(|(_, c)| !is_secret_char(*c))
                .map_or(scrubbed.len(), |(i, _)| value_start + i);
            if value_end == value_start {
                from = value_start;
                continue;
            }
            scrubbed.replace_range(value_start..value_end, "[REDACTED]");
            from = value_start + "[REDACTED]".len();
        }
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and cap the length of an upstream error body.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secrets(input);
    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }
    let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
    format!("{truncated}...")
}

/// Describe a non-success response as `<service> API error (<status>): <body>`.
pub async fn api_error(service: &str, response: reqwest::Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());
    format!("{service} API error ({status}): {}", sanitize_api_error(&body))
}
