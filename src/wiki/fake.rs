//! Scriptable in-memory wiki for unit tests.

use super::traits::{
    EditRequest, PageInfo, SubmitFlags, SubmitOutcome, WikiClient, WikiFuture,
};
use crate::error::WikiError;
use crate::models::Article;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub(crate) struct FakePage {
    pub(crate) text: String,
    pub(crate) revision: u64,
    pub(crate) info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Submission {
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) summary: String,
    pub(crate) base_revision: Option<String>,
    pub(crate) flags: SubmitFlags,
}

type SubmitHook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
pub(crate) struct FakeWiki {
    pub(crate) pages: Mutex<HashMap<String, FakePage>>,
    pub(crate) members: Mutex<Vec<String>>,
    pub(crate) fail_lookups: bool,
    pub(crate) fail_submit: bool,
    pub(crate) submissions: Mutex<Vec<Submission>>,
    /// Runs once inside the next `submit`, before the save lands.
    pub(crate) before_submit: Mutex<Option<SubmitHook>>,
}

impl FakeWiki {
    pub(crate) fn with_page(self, title: &str, text: &str, revision: u64) -> Self {
        let info = PageInfo {
            title: title.to_string(),
            exists: true,
            ..PageInfo::default()
        };
        self.with_page_info(title, text, revision, info)
    }

    pub(crate) fn with_page_info(
        self,
        title: &str,
        text: &str,
        revision: u64,
        info: PageInfo,
    ) -> Self {
        self.pages.lock().unwrap().insert(
            title.to_string(),
            FakePage {
                text: text.to_string(),
                revision,
                info,
            },
        );
        self.members.lock().unwrap().push(title.to_string());
        self
    }

    /// Simulate a concurrent edit by someone else.
    pub(crate) fn bump_revision(&self, title: &str) {
        if let Some(page) = self.pages.lock().unwrap().get_mut(title) {
            page.revision += 1;
        }
    }

    pub(crate) fn on_next_submit(&self, hook: impl FnOnce() + Send + 'static) {
        *self.before_submit.lock().unwrap() = Some(Box::new(hook));
    }

    pub(crate) fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    fn page(&self, title: &str) -> Result<FakePage, WikiError> {
        if self.fail_lookups {
            return Err(WikiError::Http("connection reset".into()));
        }
        self.pages
            .lock()
            .unwrap()
            .get(title)
            .cloned()
            .ok_or_else(|| WikiError::PageNotFound(title.to_string()))
    }
}

impl WikiClient for FakeWiki {
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
            if self.fail_submit {
                return Err(WikiError::Http("HTTP 503".into()));
            }
            let hook = self.before_submit.lock().unwrap().take();
            if let Some(hook) = hook {
                hook();
            }
            let mut pages = self.pages.lock().unwrap();
            let page = pages
                .get_mut(request.title)
                .ok_or_else(|| WikiError::PageNotFound(request.title.to_string()))?;
            page.text = request.text.to_string();
            page.revision += 1;
            self.submissions.lock().unwrap().push(Submission {
                title: request.title.to_string(),
                text: request.text.to_string(),
                summary: request.summary.to_string(),
                base_revision: request.base_revision.map(str::to_string),
                flags: request.flags,
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
        let members: Vec<String> = self
            .members
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect();
        Box::pin(async move { Ok(members) })
    }
}
