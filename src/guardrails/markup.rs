//! Minimal wikitext scanners.
//!
//! These recognize just enough markup for the guardrails: simple template
//! invocations, `<ref>` tags and wikilinks. Every pass is a left-to-right,
//! non-overlapping scan; text that does not match is copied through.

/// Rewrite `text`, replacing each span recognized by `matcher` with the
/// replacement it returns. `matcher` gets the byte offset of a char boundary
/// and returns `(end, replacement)` on a match.
fn scan_replace<'a>(
    text: &'a str,
    matcher: impl Fn(&'a str, usize) -> Option<(usize, &'a str)>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if let Some((end, replacement)) = matcher(text, i) {
            out.push_str(replacement);
            i = end;
            continue;
        }
        // `i` is always on a char boundary here.
        let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&text[i..i + ch_len]);
        i += ch_len;
    }
    out
}

/// Index of the first byte at or after `from` that is one of `stops`.
fn scan_until(bytes: &[u8], from: usize, stops: &[u8]) -> usize {
    bytes[from..]
        .iter()
        .position(|b| stops.contains(b))
        .map_or(bytes.len(), |p| from + p)
}

/// `{{` + one or more non-`}` chars + `}}`. Nested templates are not
/// balanced: the innermost `}}` closes the match.
fn simple_template_at(text: &str, i: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    if !bytes[i..].starts_with(b"{{") {
        return None;
    }
    let body_start = i + 2;
    let close = scan_until(bytes, body_start, b"}");
    if close == body_start || !bytes[close..].starts_with(b"}}") {
        return None;
    }
    Some((close + 2, ""))
}

/// `<ref ...>` ... first following `</ref>`.
fn paired_ref_at(text: &str, i: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    if !bytes[i..].starts_with(b"<ref") {
        return None;
    }
    let gt = scan_until(bytes, i + 4, b">");
    if gt >= bytes.len() {
        return None;
    }
    let body_start = gt + 1;
    let close = text[body_start..].find("</ref>")?;
    Some((body_start + close + "</ref>".len(), ""))
}

/// `<ref .../>`.
fn self_closing_ref_at(text: &str, i: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    if !bytes[i..].starts_with(b"<ref") {
        return None;
    }
    let gt = scan_until(bytes, i + 4, b">");
    if gt >= bytes.len() || gt < i + 5 || bytes[gt - 1] != b'/' {
        return None;
    }
    Some((gt + 1, ""))
}

/// `label]]` starting at `start`: one or more non-`]` chars, then `]]`.
fn link_label_at(text: &str, start: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    let close = scan_until(bytes, start, b"]");
    if close == start || !bytes[close..].starts_with(b"]]") {
        return None;
    }
    Some((close + 2, &text[start..close]))
}

/// `[[target|label]]` or `[[label]]`, replaced by the label.
fn wikilink_at(text: &str, i: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    if !bytes[i..].starts_with(b"[[") {
        return None;
    }
    let start = i + 2;
    let pipe = scan_until(bytes, start, b"|]");
    if pipe > start
        && bytes.get(pipe) == Some(&b'|')
        && let Some(found) = link_label_at(text, pipe + 1)
    {
        return Some(found);
    }
    link_label_at(text, start)
}

/// `[[Category:name]]`; the namespace prefix matches case-insensitively.
fn category_link_at(text: &str, i: usize) -> Option<(usize, &str)> {
    const OPEN: &[u8] = b"[[category:";
    let bytes = text.as_bytes();
    let head = bytes.get(i..i + OPEN.len())?;
    if !head.eq_ignore_ascii_case(OPEN) {
        return None;
    }
    link_label_at(text, i + OPEN.len()).map(|(end, _)| (end, ""))
}

/// `==` (or more), a title without `=`, then one or more `=`.
fn heading_at(text: &str, i: usize) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();
    if !bytes[i..].starts_with(b"==") {
        return None;
    }
    let title_start = i + bytes[i..].iter().take_while(|&&b| b == b'=').count();
    let title_end = scan_until(bytes, title_start, b"=");
    if title_end == title_start || title_end >= bytes.len() {
        return None;
    }
    let end = title_end + bytes[title_end..].iter().take_while(|&&b| b == b'=').count();
    Some((end, ""))
}

pub fn strip_simple_templates(text: &str) -> String {
    scan_replace(text, simple_template_at)
}

pub fn strip_refs(text: &str) -> String {
    let without_pairs = scan_replace(text, paired_ref_at);
    scan_replace(&without_pairs, self_closing_ref_at)
}

pub fn unlink_wikilinks(text: &str) -> String {
    scan_replace(text, wikilink_at)
}

pub fn strip_categories(text: &str) -> String {
    scan_replace(text, category_link_at)
}

pub fn strip_headings(text: &str) -> String {
    scan_replace(text, heading_at)
}

/// Visible prose: templates and references removed, wikilinks reduced to
/// their labels.
pub fn visible_text(text: &str) -> String {
    let text = strip_simple_templates(text);
    let text = strip_refs(&text);
    unlink_wikilinks(&text)
}

/// A `{{...}}` invocation found by the balanced parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpan {
    pub start: usize,
    pub end: usize,
    pub name: String,
}

impl TemplateSpan {
    pub fn char_len(&self, text: &str) -> usize {
        text[self.start..self.end].chars().count()
    }
}

/// All templates in `text`, nested ones included, in order of their closing
/// braces. Braces are balanced; unmatched `{{` or `}}` are ignored, as are
/// invocations whose name is blank.
pub fn parse_templates(text: &str) -> Vec<TemplateSpan> {
    let bytes = text.as_bytes();
    let mut open: Vec<usize> = Vec::new();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i..].starts_with(b"{{") {
            open.push(i);
            i += 2;
        } else if bytes[i..].starts_with(b"}}") {
            if let Some(start) = open.pop() {
                let inner = &text[start + 2..i];
                let name_end = inner.find('|').unwrap_or(inner.len());
                let name = inner[..name_end].trim();
                if !name.is_empty() {
                    found.push(TemplateSpan {
                        start,
                        end: i + 2,
                        name: name.to_string(),
                    });
                }
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    found
}

/// Remove every template found by [`parse_templates`], nested ones with
/// their parent.
pub fn strip_all_templates(text: &str) -> String {
    let mut spans = parse_templates(text);
    spans.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    for span in spans {
        if span.start < copied_to {
            continue;
        }
        out.push_str(&text[copied_to..span.start]);
        copied_to = span.end;
    }
    out.push_str(&text[copied_to..]);
    out
}
