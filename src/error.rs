use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `wikicite`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; I/O glue (CLI, HTTP adapters) continues
/// to use `anyhow::Result` for ad-hoc context chains.
///
/// Guardrail rejections are verdicts, not errors, and never leave the
/// validation call.
#[derive(Debug, Error)]
pub enum WikiCiteError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Push protocol ────────────────────────────────────────────────────
    #[error("push: {0}")]
    Push(#[from] PushError),

    // ── Review session ───────────────────────────────────────────────────
    #[error("review: {0}")]
    Review(#[from] ReviewError),

    // ── Agent / LLM ──────────────────────────────────────────────────────
    #[error("agent: {0}")]
    Agent(#[from] AgentError),

    // ── Wiki API ─────────────────────────────────────────────────────────
    #[error("wiki: {0}")]
    Wiki(#[from] WikiError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Push protocol errors ───────────────────────────────────────────────────

/// Why a push was refused or failed. Every variant leaves the proposal
/// un-pushed and the rate quota unconsumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PushError {
    #[error("Proposal is already {status}")]
    ProposalClosed { status: String },

    #[error("Rate limit exceeded. Please wait before making more edits.")]
    RateLimited,

    #[error("Edit conflict: article has been modified since analysis. Please re-analyze.")]
    Conflict,

    #[error("No approved edits to push")]
    NoApprovedEdits,

    #[error("Failed to push edits: {0}")]
    Transport(String),
}

impl PushError {
    /// Whether the caller can retry the same push later without re-analysis.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Transport(_))
    }
}

// ─── Review errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("proposal not found: {0}")]
    ProposalNotFound(String),

    #[error("invalid edit index {index} (proposal has {len} edits)")]
    EditIndexOutOfRange { index: usize, len: usize },

    #[error("proposal {id} is already {status} and can no longer change")]
    ProposalClosed { id: String, status: String },

    #[error(transparent)]
    Push(#[from] PushError),
}

// ─── Agent errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent credentials not set: {0}")]
    MissingCredentials(String),

    #[error("agent request failed: {0}")]
    Request(String),

    #[error("agent returned no text content")]
    EmptyResponse,
}

// ─── Wiki API errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("wiki API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("login failed: {0}")]
    Login(String),

    #[error("http: {0}")]
    Http(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WikiCiteError>;
