//! Domain-based source reliability, after the perennial-sources list.

use crate::models::ReliabilityRating;
use url::Url;

/// Known domains and their rating. `gov` and `edu` entries catch bare
/// top-level lookups; subdomains are handled by suffix checks.
const KNOWN_DOMAINS: &[(&str, ReliabilityRating)] = &[
    ("nytimes.com", ReliabilityRating::GenerallyReliable),
    ("theguardian.com", ReliabilityRating::GenerallyReliable),
    ("bbc.com", ReliabilityRating::GenerallyReliable),
    ("bbc.co.uk", ReliabilityRating::GenerallyReliable),
    ("washingtonpost.com", ReliabilityRating::GenerallyReliable),
    ("reuters.com", ReliabilityRating::GenerallyReliable),
    ("apnews.com", ReliabilityRating::GenerallyReliable),
    ("nature.com", ReliabilityRating::GenerallyReliable),
    ("science.org", ReliabilityRating::GenerallyReliable),
    ("doi.org", ReliabilityRating::GenerallyReliable),
    ("gov", ReliabilityRating::GenerallyReliable),
    ("edu", ReliabilityRating::GenerallyReliable),
    ("dailymail.co.uk", ReliabilityRating::PotentiallyUnreliable),
    ("forbes.com", ReliabilityRating::SituationallyReliable),
    ("medium.com", ReliabilityRating::PotentiallyUnreliable),
    ("wordpress.com", ReliabilityRating::PotentiallyUnreliable),
    ("blogspot.com", ReliabilityRating::PotentiallyUnreliable),
];

fn lookup(domain: &str) -> Option<ReliabilityRating> {
    KNOWN_DOMAINS
        .iter()
        .find(|(known, _)| *known == domain)
        .map(|(_, rating)| *rating)
}

/// Rate `url` by its host. Empty or unparsable URLs are potentially
/// unreliable; unknown hosts are situationally reliable.
pub fn check_reliability(url: &str) -> ReliabilityRating {
    if url.trim().is_empty() {
        return ReliabilityRating::PotentiallyUnreliable;
    }
    let Ok(parsed) = Url::parse(url) else {
        return ReliabilityRating::PotentiallyUnreliable;
    };
    let domain = parsed
        .host_str()
        .unwrap_or_default()
        .to_lowercase()
        .replace("www.", "");

    if let Some(rating) = lookup(&domain) {
        return rating;
    }
    if domain.ends_with(".gov") || domain.ends_with(".edu") {
        return ReliabilityRating::GenerallyReliable;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if let [.., second_level, top_level] = labels.as_slice()
        && let Some(rating) = lookup(&format!("{second_level}.{top_level}"))
    {
        return rating;
    }

    ReliabilityRating::SituationallyReliable
}
