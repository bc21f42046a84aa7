use super::Source;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of change a proposed edit makes.
///
/// Parsing accepts the short tag (`"citation"`) and the long form
/// (`"citation_added"`, `"citation added"`), case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum EditType {
    #[strum(to_string = "citation", serialize = "citation_added")]
    Citation,
    #[strum(to_string = "grammar", serialize = "grammar_fix")]
    Grammar,
    #[strum(to_string = "style", serialize = "style_fix")]
    Style,
    #[strum(to_string = "wikilink", serialize = "wikilink_added")]
    Wikilink,
    #[strum(to_string = "policy", serialize = "policy_fix")]
    Policy,
    #[strum(to_string = "formatting", serialize = "format_fix")]
    Formatting,
}

impl EditType {
    /// Citations are structurally additive, so they bypass the similarity,
    /// word-count and removal guardrails.
    pub fn is_exempt_from_minimality_checks(self) -> bool {
        matches!(self, Self::Citation)
    }

    /// Parse a tag coming from the agent boundary. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace(' ', "_");
        Self::from_str(&normalized).ok()
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    High,
    #[default]
    Medium,
    Low,
}

impl Confidence {
    /// Lenient parse used on agent output; anything unrecognized is `Medium`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// Reviewer decision on a single edit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Approval {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A single proposed change to an article's wikitext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedEdit {
    pub edit_type: EditType,
    pub original_text: String,
    pub proposed_text: String,
    pub rationale: String,
    pub policy_reference: Option<String>,
    pub confidence: Confidence,
    pub source: Option<Source>,
    pub approval: Approval,
    pub reviewer_notes: Option<String>,
}

impl ProposedEdit {
    pub fn new(
        edit_type: EditType,
        original_text: impl Into<String>,
        proposed_text: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            edit_type,
            original_text: original_text.into(),
            proposed_text: proposed_text.into(),
            rationale: rationale.into(),
            policy_reference: None,
            confidence: Confidence::Medium,
            source: None,
            approval: Approval::Pending,
            reviewer_notes: None,
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_policy_reference(mut self, reference: impl Into<String>) -> Self {
        self.policy_reference = Some(reference.into());
        self
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.approval = approval;
        self
    }

    pub fn is_approved(&self) -> bool {
        self.approval == Approval::Approved
    }
}
