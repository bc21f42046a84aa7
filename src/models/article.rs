use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of an article at the revision it was fetched.
///
/// `revision_id` is the optimistic-concurrency token checked before a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub wikitext: String,
    pub revision_id: String,
    pub fetched_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        wikitext: impl Into<String>,
        revision_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            wikitext: wikitext.into(),
            revision_id: revision_id.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Build the human-facing URL for `title` under `base` (e.g.
/// `https://en.wikipedia.org/wiki/`).
pub(crate) fn article_url(base: &str, title: &str) -> String {
    format!("{base}{}", title.replace(' ', "_"))
}

/// An article that passed the picker's selection filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateArticle {
    pub title: String,
    pub url: String,
    pub wikitext: String,
    pub body_line_count: usize,
    pub revision_id: String,
    pub is_blp: bool,
    pub categories: Vec<String>,
    pub has_infobox: bool,
    pub fetched_at: DateTime<Utc>,
}

impl From<CandidateArticle> for Article {
    fn from(candidate: CandidateArticle) -> Self {
        Self {
            title: candidate.title,
            url: candidate.url,
            wikitext: candidate.wikitext,
            revision_id: candidate.revision_id,
            fetched_at: candidate.fetched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_url_underscores_spaces() {
        assert_eq!(
            article_url("https://en.wikipedia.org/wiki/", "Groveland Four"),
            "https://en.wikipedia.org/wiki/Groveland_Four"
        );
    }

    #[test]
    fn candidate_converts_to_article_preserving_revision() {
        let candidate = CandidateArticle {
            title: "Stub".into(),
            url: "https://en.wikipedia.org/wiki/Stub".into(),
            wikitext: "'''Stub''' is short.".into(),
            body_line_count: 1,
            revision_id: "42".into(),
            is_blp: false,
            categories: vec!["Articles lacking sources".into()],
            has_infobox: false,
            fetched_at: Utc::now(),
        };
        let fetched_at = candidate.fetched_at;
        let article = Article::from(candidate);
        assert_eq!(article.revision_id, "42");
        assert_eq!(article.fetched_at, fetched_at);
    }
}
