use crate::models::{Article, ProposedEdit};

/// Apply `edits` to the article's wikitext by literal substitution.
///
/// Each edit's `original_text` is located once in the unmodified text; edits
/// then run rightmost first so a replacement never shifts a location still to
/// be used. Each edit replaces only the first occurrence still present at its
/// turn, and edits whose text is gone are skipped. Edits whose spans overlap
/// interact in input order and are not reconciled.
pub fn apply_edits(article: &Article, edits: &[&ProposedEdit]) -> String {
    let mut text = article.wikitext.clone();

    let mut ordered: Vec<(Option<usize>, &ProposedEdit)> = edits
        .iter()
        .map(|edit| (text.find(edit.original_text.as_str()), *edit))
        .collect();
    // Descending by position; not-found edits last. The sort is stable.
    ordered.sort_by(|(a, _), (b, _)| b.cmp(a));

    for (_, edit) in ordered {
        if let Some(pos) = text.find(edit.original_text.as_str()) {
            text.replace_range(pos..pos + edit.original_text.len(), &edit.proposed_text);
        }
    }
    text
}
