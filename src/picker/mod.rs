//! Selection of short, unprotected, non-biographical articles from a
//! maintenance category.

use crate::config::ArticleSelectionConfig;
use crate::error::WikiError;
use crate::guardrails::markup::{parse_templates, strip_all_templates, strip_categories, strip_refs};
use crate::models::CandidateArticle;
use crate::wiki::{PageInfo, WikiClient};
use chrono::Utc;
use std::sync::Arc;

const BLP_CATEGORIES: [&str; 3] = [
    "living people",
    "year of birth missing (living people)",
    "possibly living people",
];

const BLP_TEMPLATE_MARKERS: [&str; 3] = ["blp", "living", "bio-living"];

/// Sections that end the body; everything from their heading on is ignored.
const TRAILING_SECTIONS: [&str; 3] = ["references", "external links", "see also"];

/// Category members inspected per requested candidate.
const MEMBER_SCAN_FACTOR: usize = 10;
const MAX_MEMBERS: usize = 500;

/// Biography of a living person, judged by category or maintenance template.
pub fn is_blp(wikitext: &str, categories: &[String]) -> bool {
    let by_category = categories.iter().any(|category| {
        let lower = category.to_lowercase();
        BLP_CATEGORIES.iter().any(|blp| lower.contains(blp))
    });
    by_category
        || parse_templates(wikitext).iter().any(|template| {
            let name = template.name.to_lowercase();
            BLP_TEMPLATE_MARKERS.iter().any(|marker| name.contains(marker))
        })
}

pub fn has_infobox(wikitext: &str) -> bool {
    parse_templates(wikitext)
        .iter()
        .any(|t| t.name.to_lowercase().contains("infobox"))
}

/// Byte offset of `== name ==` (case-insensitive, any inner spacing).
fn section_heading(text: &str, name: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len().saturating_sub(1)).find(|&i| {
        if !bytes[i..].starts_with(b"==") {
            return false;
        }
        let rest = text[i + 2..].trim_start();
        rest.get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name))
            && rest[name.len()..].trim_start().starts_with("==")
    })
}

/// Lines of prose: templates, trailing sections, categories, references,
/// headings and blank lines are not counted.
pub fn count_body_lines(wikitext: &str) -> usize {
    let text = strip_all_templates(wikitext);
    let body_end = TRAILING_SECTIONS
        .iter()
        .filter_map(|name| section_heading(&text, name))
        .min()
        .unwrap_or(text.len());
    let text = strip_categories(&text[..body_end]);
    let text = strip_refs(&text);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("=="))
        .count()
}

pub fn is_protected(info: &PageInfo) -> bool {
    info.is_edit_or_move_protected()
}

/// Outcome of vetting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidacy {
    Accepted(CandidateArticle),
    Skipped { reason: String },
}

impl Candidacy {
    fn skip(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

pub struct ArticlePicker {
    wiki: Arc<dyn WikiClient>,
    config: ArticleSelectionConfig,
}

impl ArticlePicker {
    pub fn new(wiki: Arc<dyn WikiClient>, config: ArticleSelectionConfig) -> Self {
        Self { wiki, config }
    }

    /// Run the selection filters on `title`: redirects, protection, empty
    /// pages, BLPs and pages outside `1..=max_body_lines` are skipped.
    pub async fn is_candidate(&self, title: &str) -> Candidacy {
        let info = match self.wiki.page_info(title).await {
            Ok(info) => info,
            Err(e) => return Candidacy::skip(format!("error reading page: {e}")),
        };
        if info.is_redirect {
            return Candidacy::skip("redirect");
        }
        if self.config.exclude_protected && is_protected(&info) {
            return Candidacy::skip("protected");
        }

        let article = match self.wiki.fetch_article(title).await {
            Ok(article) => article,
            Err(e) => return Candidacy::skip(format!("error reading page: {e}")),
        };
        if article.wikitext.is_empty() {
            return Candidacy::skip("empty page");
        }

        let blp = is_blp(&article.wikitext, &info.categories);
        if self.config.exclude_blp && blp {
            return Candidacy::skip("BLP article");
        }

        let body_lines = count_body_lines(&article.wikitext);
        if body_lines > self.config.max_body_lines {
            return Candidacy::skip(format!("too long ({body_lines} lines)"));
        }
        if body_lines == 0 {
            return Candidacy::skip("no body text");
        }

        Candidacy::Accepted(CandidateArticle {
            has_infobox: has_infobox(&article.wikitext),
            title: article.title,
            url: article.url,
            wikitext: article.wikitext,
            body_line_count: body_lines,
            revision_id: article.revision_id,
            is_blp: blp,
            categories: info.categories,
            fetched_at: Utc::now(),
        })
    }

    /// Up to `limit` candidates from the configured category, in category
    /// order.
    pub async fn fetch_candidates(&self, limit: usize) -> Result<Vec<CandidateArticle>, WikiError> {
        let scan = limit.saturating_mul(MEMBER_SCAN_FACTOR).clamp(1, MAX_MEMBERS);
        let titles = self
            .wiki
            .category_members(&self.config.category, scan)
            .await?;

        let mut candidates = Vec::new();
        for title in titles {
            if candidates.len() >= limit {
                break;
            }
            match self.is_candidate(&title).await {
                Candidacy::Accepted(candidate) => {
                    tracing::debug!(title = %candidate.title, lines = candidate.body_line_count, "candidate found");
                    candidates.push(candidate);
                }
                Candidacy::Skipped { reason } => {
                    tracing::debug!(title = %title, reason = %reason, "skipped");
                }
            }
        }
        tracing::info!(
            category = %self.config.category,
            found = candidates.len(),
            "candidate scan complete"
        );
        Ok(candidates)
    }
}
