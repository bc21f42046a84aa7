//! Turning free-form model output into typed edit candidates.

use crate::models::{Confidence, EditType, ProposedEdit};
use crate::utils::truncate_with_ellipsis;
use serde_json::Value;

const LOGGED_RESPONSE_CHARS: usize = 500;

/// One edit as the model described it, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEditCandidate {
    pub edit_type: Option<String>,
    pub original_text: Option<String>,
    pub proposed_text: Option<String>,
    pub rationale: Option<String>,
    pub policy_reference: Option<String>,
    pub confidence: Option<String>,
}

impl RawEditCandidate {
    /// Non-string fields are treated as absent.
    fn from_json(item: &Value) -> Self {
        let field = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            edit_type: field("edit_type"),
            original_text: field("original_text"),
            proposed_text: field("proposed_text"),
            rationale: field("rationale"),
            policy_reference: field("policy_reference"),
            confidence: field("confidence"),
        }
    }
}

/// Body of the first ```json fenced block, trimmed.
fn fenced_json(text: &str) -> Option<&str> {
    const FENCE: &str = "```json";
    let start = text.find(FENCE)? + FENCE.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    i
}

/// Shortest span opening with `[` + `{` and closing with `}` + `]`,
/// whitespace allowed between the brackets.
fn first_object_array(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    for (open, _) in text.match_indices('[') {
        let brace = skip_whitespace(bytes, open + 1);
        if bytes.get(brace) != Some(&b'{') {
            continue;
        }
        let mut from = brace + 1;
        while let Some(rel) = text[from..].find('}') {
            let close = from + rel;
            let end = skip_whitespace(bytes, close + 1);
            if bytes.get(end) == Some(&b']') {
                return Some(&text[open..=end]);
            }
            from = close + 1;
        }
        // No closing `}]` anywhere after this point.
        return None;
    }
    None
}

/// Pull the edit array out of a model response: a ```json block, else the
/// first object array, else the whole text. Anything that is not a JSON
/// array yields no candidates.
pub fn extract_json(text: &str) -> Vec<RawEditCandidate> {
    let payload = fenced_json(text)
        .or_else(|| first_object_array(text))
        .unwrap_or(text);

    match serde_json::from_str::<Vec<Value>>(payload) {
        Ok(items) => items.iter().map(RawEditCandidate::from_json).collect(),
        Err(e) => {
            tracing::warn!(
                error = %e,
                response = %truncate_with_ellipsis(text, LOGGED_RESPONSE_CHARS),
                "failed to parse agent response"
            );
            Vec::new()
        }
    }
}

/// Keep at most `max_edits` candidates, then type them. Candidates with an
/// unknown or missing edit type are dropped.
pub fn parse_candidates(raw: Vec<RawEditCandidate>, max_edits: usize) -> Vec<ProposedEdit> {
    raw.into_iter()
        .take(max_edits)
        .filter_map(|candidate| {
            let tag = candidate.edit_type.as_deref().unwrap_or_default();
            let Some(edit_type) = EditType::from_tag(tag) else {
                tracing::debug!(tag, "skipping edit with unknown type");
                return None;
            };
            let mut edit = ProposedEdit::new(
                edit_type,
                candidate.original_text.unwrap_or_default(),
                candidate.proposed_text.unwrap_or_default(),
                candidate.rationale.unwrap_or_default(),
            )
            .with_confidence(
                candidate
                    .confidence
                    .as_deref()
                    .map_or(Confidence::Medium, Confidence::from_tag),
            );
            edit.policy_reference = candidate.policy_reference;
            Some(edit)
        })
        .collect()
}
