use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceType {
    Journal,
    News,
    Book,
    #[default]
    Web,
    Government,
}

/// Source reliability per the perennial-sources classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReliabilityRating {
    GenerallyReliable,
    SituationallyReliable,
    PotentiallyUnreliable,
    Deprecated,
}

/// A citable source found for an existing claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: Option<String>,
    pub authors: Vec<String>,
    pub publication_date: Option<String>,
    pub doi: Option<String>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub source_type: SourceType,
    /// Pre-rendered template; when non-empty it wins over generation.
    pub citation_template: String,
    pub reliability: Option<ReliabilityRating>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl Source {
    /// Render a `{{cite ...}}` template for this source.
    pub fn to_citation_template(&self) -> String {
        if !self.citation_template.is_empty() {
            return self.citation_template.clone();
        }

        let mut parts: Vec<String> = Vec::new();
        match self.source_type {
            SourceType::Book => {
                parts.push("{{cite book".into());
                if self.authors.len() > 1 {
                    for (i, author) in self.authors.iter().enumerate() {
                        parts.push(format!("|author{}={author}", i + 1));
                    }
                } else {
                    self.push_single_author(&mut parts);
                }
                parts.push(format!("|title={}", self.title));
                if let Some(date) = non_empty(self.publication_date.as_ref()) {
                    parts.push(format!("|year={date}"));
                }
                if let Some(publisher) = non_empty(self.publisher.as_ref()) {
                    parts.push(format!("|publisher={publisher}"));
                }
                if let Some(isbn) = non_empty(self.isbn.as_ref()) {
                    parts.push(format!("|isbn={isbn}"));
                }
            }
            SourceType::News => {
                parts.push("{{cite news".into());
                self.push_single_author(&mut parts);
                parts.push(format!("|title={}", self.title));
                if let Some(publisher) = non_empty(self.publisher.as_ref()) {
                    parts.push(format!("|work={publisher}"));
                }
                if let Some(date) = non_empty(self.publication_date.as_ref()) {
                    parts.push(format!("|date={date}"));
                }
                if let Some(url) = non_empty(self.url.as_ref()) {
                    parts.push(format!("|url={url}"));
                }
            }
            SourceType::Journal => {
                parts.push("{{cite journal".into());
                self.push_single_author(&mut parts);
                parts.push(format!("|title={}", self.title));
                if let Some(publisher) = non_empty(self.publisher.as_ref()) {
                    parts.push(format!("|journal={publisher}"));
                }
                if let Some(date) = non_empty(self.publication_date.as_ref()) {
                    parts.push(format!("|date={date}"));
                }
                if let Some(doi) = non_empty(self.doi.as_ref()) {
                    parts.push(format!("|doi={doi}"));
                }
                if let Some(url) = non_empty(self.url.as_ref()) {
                    parts.push(format!("|url={url}"));
                }
            }
            SourceType::Web | SourceType::Government => {
                parts.push("{{cite web".into());
                self.push_single_author(&mut parts);
                parts.push(format!("|title={}", self.title));
                if let Some(url) = non_empty(self.url.as_ref()) {
                    parts.push(format!("|url={url}"));
                }
                if let Some(publisher) = non_empty(self.publisher.as_ref()) {
                    parts.push(format!("|website={publisher}"));
                }
                if let Some(date) = non_empty(self.publication_date.as_ref()) {
                    parts.push(format!("|date={date}"));
                }
            }
        }
        parts.push("}}".into());
        parts.join(" ")
    }

    /// `|last=` / `|first=` for a sole author; nothing for zero or many.
    fn push_single_author(&self, parts: &mut Vec<String>) {
        let [author] = self.authors.as_slice() else {
            return;
        };
        let names: Vec<&str> = author.split_whitespace().collect();
        let Some((last, given)) = names.split_last() else {
            return;
        };
        parts.push(format!("|last={last}"));
        if !given.is_empty() {
            parts.push(format!("|first={}", given.join(" ")));
        }
    }
}
