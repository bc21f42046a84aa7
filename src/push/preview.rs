use crate::guardrails::sequence::{OpTag, SequenceMatcher};
use crate::models::EditProposal;

const CONTEXT_LINES: usize = 3;

/// `start+1` for a one-line range, `start+1,len` otherwise; an empty range
/// names the line before it.
fn format_range(start: usize, stop: usize) -> String {
    let length = stop - start;
    let beginning = start + 1;
    match length {
        1 => beginning.to_string(),
        0 => format!("{},0", beginning - 1),
        _ => format!("{beginning},{length}"),
    }
}

/// Unified diff lines (no terminators). Empty when the inputs are equal.
pub fn unified_diff(
    original: &[&str],
    modified: &[&str],
    from_label: &str,
    to_label: &str,
    context: usize,
) -> Vec<String> {
    let matcher = SequenceMatcher::new(original, modified);
    let mut out = Vec::new();
    for group in matcher.grouped_opcodes(context) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        if out.is_empty() {
            out.push(format!("--- {from_label}"));
            out.push(format!("+++ {to_label}"));
        }
        out.push(format!(
            "@@ -{} +{} @@",
            format_range(first.a_start, last.a_end),
            format_range(first.b_start, last.b_end)
        ));
        for op in &group {
            let removed = &original[op.a_start..op.a_end];
            let added = &modified[op.b_start..op.b_end];
            match op.tag {
                OpTag::Equal => out.extend(removed.iter().map(|line| format!(" {line}"))),
                OpTag::Delete => out.extend(removed.iter().map(|line| format!("-{line}"))),
                OpTag::Insert => out.extend(added.iter().map(|line| format!("+{line}"))),
                OpTag::Replace => {
                    out.extend(removed.iter().map(|line| format!("-{line}")));
                    out.extend(added.iter().map(|line| format!("+{line}")));
                }
            }
        }
    }
    out
}

/// Reviewer-facing diff of the proposal's article against `modified_text`.
pub fn preview_diff(proposal: &EditProposal, modified_text: &str) -> String {
    let original: Vec<&str> = proposal.article.wikitext.lines().collect();
    let modified: Vec<&str> = modified_text.lines().collect();
    let title = &proposal.article.title;
    unified_diff(
        &original,
        &modified,
        &format!("{title} (original)"),
        &format!("{title} (modified)"),
        CONTEXT_LINES,
    )
    .join("\n")
}
