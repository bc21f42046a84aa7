#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wikicite::agent::{AgentFuture, EditAgent, EditAnalyzer, RawEditCandidate};
use wikicite::config::SourcesConfig;
use wikicite::error::{AgentError, WikiError};
use wikicite::guardrails::EditGuardrail;
use wikicite::models::Article;
use wikicite::push::{PushProtocol, RateLimiter};
use wikicite::review::ReviewSession;
use wikicite::sources::SourceFinder;
use wikicite::store::InMemoryProposalStore;
use wikicite::wiki::{EditRequest, PageInfo, SubmitOutcome, WikiClient, WikiFuture};

pub const SUFFIX: &str = "(AI-assisted citation/cleanup, human-reviewed)";

#[derive(Debug, Clone)]
struct Page {
    text: String,
    revision: u64,
    info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pushed {
    pub title: String,
    pub text: String,
    pub summary: String,
    pub base_revision: Option<String>,
}

/// In-memory wiki: pages keyed by title, one category listing every page
/// in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryWiki {
    pages: Mutex<HashMap<String, Page>>,
    order: Mutex<Vec<String>>,
    pushed: Mutex<Vec<Pushed>>,
}

impl InMemoryWiki {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_page(&self, title: &str, text: &str, revision: u64) {
        self.add_page_with(
            title,
            text,
            revision,
            PageInfo {
                title: title.to_string(),
                exists: true,
                ..PageInfo::default()
            },
        );
    }

    pub fn add_page_with(&self, title: &str, text: &str, revision: u64, info: PageInfo) {
        self.pages.lock().unwrap().insert(
            title.to_string(),
            Page {
                text: text.to_string(),
                revision,
                info,
            },
        );
        self.order.lock().unwrap().push(title.to_string());
    }

    /// Someone else edits the page.
    pub fn edit_externally(&self, title: &str, text: &str) {
        let mut pages = self.pages.lock().unwrap();
        let page = pages.get_mut(title).expect("page exists");
        page.text = text.to_string();
        page.revision += 1;
    }

    pub fn text(&self, title: &str) -> String {
        self.pages.lock().unwrap()[title].text.clone()
    }

    pub fn pushed(&self) -> Vec<Pushed> {
        self.pushed.lock().unwrap().clone()
    }

    fn page(&self, title: &str) -> Result<Page, WikiError> {
        self.pages
            .lock()
            .unwrap()
            .get(title)
            .cloned()
            .ok_or_else(|| WikiError::PageNotFound(title.to_string()))
    }
}

impl WikiClient for InMemoryWiki {
    fn live_revision_id<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String> {
        let result = self.page(title).map(|p| p.revision.to_string());
        Box::pin(async move { result })
    }

    fn page_text<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String> {
        let result = self.page(title).map(|p| p.text);
        Box::pin(async move { result })
    }

    fn fetch_article<'a>(&'a self, title: &'a str) -> WikiFuture<'a, Article> {
        let result = self.page(title).map(|p| {
            Article::new(
                title,
                format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
                p.text,
                p.revision.to_string(),
            )
        });
        Box::pin(async move { result })
    }

    fn submit<'a>(&'a self, request: EditRequest<'a>) -> WikiFuture<'a, SubmitOutcome> {
        Box::pin(async move {
            let mut pages = self.pages.lock().unwrap();
            let page = pages
                .get_mut(request.title)
                .ok_or_else(|| WikiError::PageNotFound(request.title.to_string()))?;
            if request
                .base_revision
                .is_some_and(|base| base != page.revision.to_string())
            {
                return Err(WikiError::Api {
                    code: "editconflict".into(),
                    info: "Edit conflict.".into(),
                });
            }
            page.text = request.text.to_string();
            page.revision += 1;
            self.pushed.lock().unwrap().push(Pushed {
                title: request.title.to_string(),
                text: request.text.to_string(),
                summary: request.summary.to_string(),
                base_revision: request.base_revision.map(str::to_string),
            });
            Ok(SubmitOutcome {
                new_revision_id: Some(page.revision.to_string()),
            })
        })
    }

    fn page_info<'a>(&'a self, title: &'a str) -> WikiFuture<'a, PageInfo> {
        let result = self.page(title).map(|p| p.info);
        Box::pin(async move { result })
    }

    fn category_members<'a>(
        &'a self,
        _category: &'a str,
        limit: usize,
    ) -> WikiFuture<'a, Vec<String>> {
        let titles: Vec<String> = self.order.lock().unwrap().iter().take(limit).cloned().collect();
        Box::pin(async move { Ok(titles) })
    }
}

/// Agent that replays a fixed reply and records the context it was given.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    reply: Vec<RawEditCandidate>,
    error: Option<String>,
    contexts: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn replying(reply: Vec<RawEditCandidate>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            ..Self::default()
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            error: Some(message.to_string()),
            ..Self::default()
        })
    }

    pub fn contexts(&self) -> Vec<String> {
        self.contexts.lock().unwrap().clone()
    }
}

impl EditAgent for ScriptedAgent {
    fn propose<'a>(
        &'a self,
        _article: &'a Article,
        sources_context: &'a str,
    ) -> AgentFuture<'a, Vec<RawEditCandidate>> {
        self.contexts
            .lock()
            .unwrap()
            .push(sources_context.to_string());
        let result = match &self.error {
            Some(message) => Err(AgentError::Request(message.clone())),
            None => Ok(self.reply.clone()),
        };
        Box::pin(async move { result })
    }
}

pub fn candidate(edit_type: &str, original: &str, proposed: &str) -> RawEditCandidate {
    RawEditCandidate {
        edit_type: Some(edit_type.to_string()),
        original_text: Some(original.to_string()),
        proposed_text: Some(proposed.to_string()),
        rationale: Some(format!("{edit_type} fix")),
        policy_reference: None,
        confidence: Some("high".to_string()),
    }
}

/// Analyzer whose source search is switched off.
pub fn offline_analyzer(agent: Arc<ScriptedAgent>) -> EditAnalyzer {
    let sources = SourcesConfig {
        search_apis: Vec::new(),
        ..SourcesConfig::default()
    };
    EditAnalyzer::new(
        agent,
        Arc::new(SourceFinder::new(sources, "wikicite-tests", None, None)),
        EditGuardrail::default(),
        15,
    )
}

pub fn session(wiki: Arc<InMemoryWiki>, edits_per_hour: u32) -> ReviewSession {
    ReviewSession::new(
        Arc::new(InMemoryProposalStore::new()),
        EditGuardrail::default(),
        PushProtocol::new(wiki, Arc::new(RateLimiter::new(edits_per_hour)), SUFFIX),
    )
}
