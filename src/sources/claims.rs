use crate::guardrails::markup::{
    strip_categories, strip_headings, strip_refs, strip_simple_templates, unlink_wikilinks,
};

const MIN_CLAIM_CHARS: usize = 20;

/// Letters present and none of them lowercase.
fn is_all_caps(sentence: &str) -> bool {
    sentence.chars().any(char::is_uppercase) && !sentence.chars().any(char::is_lowercase)
}

/// Candidate factual claims: the article's prose split into sentences,
/// keeping those longer than 20 chars that are not all caps.
pub fn extract_claims(wikitext: &str) -> Vec<String> {
    let text = strip_simple_templates(wikitext);
    let text = strip_categories(&text);
    let text = strip_refs(&text);
    let text = unlink_wikilinks(&text);
    let text = strip_headings(&text);

    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_CLAIM_CHARS && !is_all_caps(s))
        .map(str::to_string)
        .collect()
}
