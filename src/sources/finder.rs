use super::{check_reliability, extract_claims};
use crate::config::{Config, SourcesConfig};
use crate::http::{build_client, sanitize_api_error};
use crate::models::{ReliabilityRating, Source, SourceType};
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const SEMANTIC_SCHOLAR_FIELDS: &str = "title,authors,year,doi,url,venue";

#[derive(Debug, Deserialize)]
struct PaperSearch {
    #[serde(default)]
    data: Vec<Paper>,
}

#[derive(Debug, Deserialize)]
struct Paper {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Vec<PaperAuthor>,
    #[serde(default)]
    year: Option<i64>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    venue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PaperAuthor {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorksResponse {
    message: WorksMessage,
}

#[derive(Debug, Default, Deserialize)]
struct WorksMessage {
    #[serde(default)]
    items: Vec<Work>,
}

#[derive(Debug, Deserialize)]
struct Work {
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    author: Vec<WorkAuthor>,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    published: Option<WorkDate>,
    #[serde(default, rename = "DOI")]
    doi: Option<String>,
    #[serde(default, rename = "URL")]
    url: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkAuthor {
    #[serde(default)]
    given: Option<String>,
    #[serde(default)]
    family: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkDate {
    #[serde(default, rename = "date-parts")]
    date_parts: Vec<Vec<i64>>,
}

impl From<Paper> for Source {
    fn from(paper: Paper) -> Self {
        Self {
            title: paper.title.unwrap_or_default(),
            url: paper.url,
            authors: paper
                .authors
                .into_iter()
                .map(|a| a.name.unwrap_or_default())
                .collect(),
            publication_date: paper.year.map(|y| y.to_string()),
            doi: paper.doi,
            publisher: paper.venue,
            source_type: SourceType::Journal,
            reliability: Some(ReliabilityRating::GenerallyReliable),
            ..Self::default()
        }
    }
}

impl From<Work> for Source {
    fn from(work: Work) -> Self {
        let authors = work
            .author
            .into_iter()
            .filter_map(|a| {
                let given = a.given.filter(|g| !g.is_empty());
                match (given, a.family.filter(|f| !f.is_empty())) {
                    (Some(given), Some(family)) => Some(format!("{given} {family}")),
                    (None, Some(family)) => Some(family),
                    _ => None,
                }
            })
            .collect();

        let kind = work.kind.to_lowercase();
        let source_type = if kind.contains("journal") {
            SourceType::Journal
        } else if kind.contains("book") {
            SourceType::Book
        } else {
            SourceType::Web
        };

        let year = work
            .published
            .and_then(|p| p.date_parts.into_iter().next())
            .and_then(|parts| parts.first().copied())
            .map(|y| y.to_string());

        let doi = work.doi.filter(|d| !d.is_empty());
        let url = match &doi {
            Some(doi) => Some(format!("https://doi.org/{doi}")),
            None => work.url,
        };

        Self {
            title: work.title.into_iter().next().unwrap_or_default(),
            url,
            authors,
            publication_date: year,
            doi,
            publisher: work.publisher,
            source_type,
            reliability: Some(ReliabilityRating::GenerallyReliable),
            ..Self::default()
        }
    }
}

/// Sort key: generally reliable first, unrated last.
fn reliability_rank(source: &Source) -> u8 {
    match source.reliability {
        Some(ReliabilityRating::GenerallyReliable) => 0,
        Some(ReliabilityRating::SituationallyReliable) => 1,
        Some(ReliabilityRating::PotentiallyUnreliable) => 2,
        Some(ReliabilityRating::Deprecated) | None => 3,
    }
}

/// Bibliographic search over Semantic Scholar and CrossRef, for claims
/// already present in an article.
pub struct SourceFinder {
    client: Client,
    config: SourcesConfig,
    semantic_scholar_api_key: Option<String>,
    crossref_email: Option<String>,
}

impl SourceFinder {
    pub fn new(
        config: SourcesConfig,
        user_agent: &str,
        semantic_scholar_api_key: Option<String>,
        crossref_email: Option<String>,
    ) -> Self {
        Self {
            client: build_client(config.timeout_secs, user_agent),
            config,
            semantic_scholar_api_key: semantic_scholar_api_key.filter(|k| !k.trim().is_empty()),
            crossref_email: crossref_email.filter(|e| !e.trim().is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.sources.clone(),
            &config.wikipedia.user_agent,
            config.semantic_scholar_api_key.clone(),
            config.crossref_email.clone(),
        )
    }

    pub fn check_reliability(&self, url: &str) -> ReliabilityRating {
        check_reliability(url)
    }

    pub fn extract_claims(&self, wikitext: &str) -> Vec<String> {
        extract_claims(wikitext)
    }

    /// True only for a final 200. HEAD first; GET when HEAD fails to
    /// complete at all.
    pub async fn verify_url_exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(head_err) => {
                tracing::debug!(url, error = %head_err, "HEAD failed; retrying with GET");
                self.client
                    .get(url)
                    .send()
                    .await
                    .is_ok_and(|r| r.status() == StatusCode::OK)
            }
        }
    }

    /// Empty without an API key or on any failure.
    pub async fn search_semantic_scholar(&self, query: &str, max_results: usize) -> Vec<Source> {
        let Some(api_key) = self.semantic_scholar_api_key.as_deref() else {
            return Vec::new();
        };
        match self.semantic_scholar(api_key, query, max_results).await {
            Ok(sources) => sources,
            Err(e) => {
                tracing::warn!(error = %e, "Semantic Scholar search failed");
                Vec::new()
            }
        }
    }

    /// Empty without a contact email or on any failure.
    pub async fn search_crossref(&self, query: &str, max_results: usize) -> Vec<Source> {
        let Some(email) = self.crossref_email.as_deref() else {
            return Vec::new();
        };
        match self.crossref(email, query, max_results).await {
            Ok(sources) => sources,
            Err(e) => {
                tracing::warn!(error = %e, "CrossRef search failed");
                Vec::new()
            }
        }
    }

    /// Search every configured backend, drop deprecated sources when
    /// reliability checking is on, and return the best `max_results`.
    pub async fn find_sources_for_claim(&self, claim: &str, max_results: usize) -> Vec<Source> {
        let mut sources = Vec::new();
        if self.config.uses("semantic_scholar") {
            sources.extend(self.search_semantic_scholar(claim, max_results).await);
        }
        if self.config.uses("crossref") {
            sources.extend(self.search_crossref(claim, max_results).await);
        }
        if self.config.uses("google_scholar") {
            tracing::debug!("google_scholar has no public API; skipped");
        }

        if self.config.reliability_check {
            sources.retain(|s| s.reliability != Some(ReliabilityRating::Deprecated));
        }
        sources.sort_by_key(reliability_rank);
        sources.truncate(max_results);
        sources
    }

    async fn semantic_scholar(
        &self,
        api_key: &str,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Source>> {
        let url = format!(
            "{}/graph/v1/paper/search",
            self.config.semantic_scholar_url.trim_end_matches('/')
        );
        let limit = max_results.to_string();
        let response = self
            .client
            .get(&url)
            .header("x-api-key", api_key)
            .query(&[
                ("query", query),
                ("limit", limit.as_str()),
                ("fields", SEMANTIC_SCHOLAR_FIELDS),
            ])
            .send()
            .await
            .context("Semantic Scholar request failed")?;
        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("HTTP {status}: {}", sanitize_api_error(&body));
        }
        let search: PaperSearch = response
            .json()
            .await
            .context("invalid Semantic Scholar response")?;
        Ok(search.data.into_iter().map(Source::from).collect())
    }

    async fn crossref(&self, email: &str, query: &str, max_results: usize) -> Result<Vec<Source>> {
        let url = format!("{}/works", self.config.crossref_url.trim_end_matches('/'));
        let rows = max_results.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("rows", rows.as_str()), ("mailto", email)])
            .send()
            .await
            .context("CrossRef request failed")?;
        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("HTTP {status}: {}", sanitize_api_error(&body));
        }
        let works: WorksResponse = response.json().await.context("invalid CrossRef response")?;
        Ok(works.message.items.into_iter().map(Source::from).collect())
    }
}
