use super::markup::{parse_templates, visible_text};
use super::sequence::SequenceMatcher;

/// Templates must exceed this share of the text for it to count as
/// template content.
const TEMPLATE_SHARE_THRESHOLD: f64 = 0.7;

/// Words of visible prose: templates and references do not count, wikilinks
/// count by their label.
pub fn count_words(text: &str) -> usize {
    visible_text(text).split_whitespace().count()
}

/// Character-level Ratcliff-Obershelp ratio in `[0, 1]`; `1.0` iff equal.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Share of the original's words that are gone in `modified`, as a whole
/// percentage rounded down. Zero when the original has no words.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn removed_content_pct(original: &str, modified: &str) -> u32 {
    let original_words = count_words(original);
    if original_words == 0 {
        return 0;
    }
    let removed = original_words.saturating_sub(count_words(modified));
    ((removed as f64 / original_words as f64) * 100.0) as u32
}

/// Words gained going from `original` to `modified`, never negative.
pub fn added_words(original: &str, modified: &str) -> usize {
    count_words(modified).saturating_sub(count_words(original))
}

/// Whether `text` is citation markup or mostly template invocations.
#[allow(clippy::cast_precision_loss)]
pub fn is_citation_or_template(text: &str) -> bool {
    let lower = text.to_lowercase();
    if let Some(open) = lower.find("<ref")
        && lower[open + 4..].contains('>')
    {
        return true;
    }
    if lower.contains("{{cite") {
        return true;
    }

    let templates = parse_templates(text);
    if templates.is_empty() || text.trim().is_empty() {
        return false;
    }
    let template_chars: usize = templates.iter().map(|t| t.char_len(text)).sum();
    let total_chars = text.chars().count();
    template_chars as f64 / total_chars as f64 > TEMPLATE_SHARE_THRESHOLD
}
