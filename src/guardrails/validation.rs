use super::metrics::{added_words, is_citation_or_template, removed_content_pct, similarity};
use super::policy;
use crate::config::GuardrailsConfig;
use crate::models::ProposedEdit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardrailVerdict {
    Accepted,
    Rejected { reason: String },
}

impl GuardrailVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

impl From<CheckResult> for GuardrailVerdict {
    fn from(result: CheckResult) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(reason) => Self::Rejected { reason },
        }
    }
}

type CheckResult = std::result::Result<(), String>;

/// Numeric acceptance gates bounding how much an edit may change the text.
#[derive(Debug, Clone)]
pub struct EditGuardrail {
    config: GuardrailsConfig,
}

impl EditGuardrail {
    pub fn new(config: GuardrailsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardrailsConfig {
        &self.config
    }

    /// Validate one edit. Citations pass unconditionally; otherwise
    /// similarity, added words and removal are checked in that order and the
    /// first failure is reported.
    ///
    /// The full texts are accepted for interface stability and are not
    /// consulted; use [`Self::validate_full_article_edit`] for whole-article
    /// drift.
    pub fn validate_edit(
        &self,
        edit: &ProposedEdit,
        _full_original: &str,
        _full_modified: &str,
    ) -> GuardrailVerdict {
        if edit.edit_type.is_exempt_from_minimality_checks() {
            return GuardrailVerdict::Accepted;
        }

        let verdict: GuardrailVerdict = self
            .check_edit(&edit.original_text, &edit.proposed_text)
            .into();
        if let Some(reason) = verdict.reason() {
            tracing::debug!(edit_type = %edit.edit_type, reason, "edit rejected by guardrail");
        }
        verdict
    }

    /// Whole-document sanity check before push. No citation exemption; the
    /// checks run similarity, removal, then added words.
    pub fn validate_full_article_edit(&self, original: &str, modified: &str) -> GuardrailVerdict {
        let result = self
            .check_similarity(original, modified, "Overall edit changes too much")
            .and_then(|()| self.check_removal(original, modified))
            .and_then(|()| self.check_added_words(original, modified, false));
        if let Err(reason) = &result {
            tracing::warn!(reason = %reason, "article edit rejected by guardrail");
        }
        result.into()
    }

    /// Advisory policy flags for reviewer display.
    pub fn check_policy_violations(&self, text: &str) -> Vec<String> {
        policy::check_policy_violations(text)
    }

    fn check_edit(&self, original: &str, proposed: &str) -> CheckResult {
        self.check_similarity(original, proposed, "Edit changes too much")?;
        self.check_added_words(original, proposed, true)?;
        self.check_removal(original, proposed)
    }

    fn check_similarity(&self, original: &str, modified: &str, label: &str) -> CheckResult {
        let ratio = similarity(original, modified);
        if ratio < self.config.min_similarity_ratio {
            return Err(format!("{label} (similarity: {ratio:.2})"));
        }
        Ok(())
    }

    fn check_added_words(
        &self,
        original: &str,
        modified: &str,
        exempt_template_content: bool,
    ) -> CheckResult {
        let added = added_words(original, modified);
        if added > self.config.max_new_words
            && !(exempt_template_content && is_citation_or_template(modified))
        {
            return Err(format!("Adds too many new words ({added} words)"));
        }
        Ok(())
    }

    fn check_removal(&self, original: &str, modified: &str) -> CheckResult {
        let pct = removed_content_pct(original, modified);
        if pct > self.config.max_content_removal_pct {
            return Err(format!("Removes too much content ({pct}%)"));
        }
        Ok(())
    }
}

impl Default for EditGuardrail {
    fn default() -> Self {
        Self::new(GuardrailsConfig::default())
    }
}
