use crate::error::WikiError;
use crate::models::Article;
use std::future::Future;
use std::pin::Pin;

pub type WikiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, WikiError>> + Send + 'a>>;

/// Edit flags sent with a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitFlags {
    pub minor: bool,
    pub bot: bool,
}

impl SubmitFlags {
    /// Minor bot edit; what the push protocol always sends.
    pub const MINOR_BOT: Self = Self {
        minor: true,
        bot: true,
    };
}

/// A full-page replacement.
#[derive(Debug, Clone, Copy)]
pub struct EditRequest<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub summary: &'a str,
    /// Revision the text was derived from; lets the wiki reject mid-air
    /// collisions on its side too.
    pub base_revision: Option<&'a str>,
    pub flags: SubmitFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub new_revision_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protection {
    /// `edit`, `move`, ...
    pub kind: String,
    /// `autoconfirmed`, `sysop`, ...
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub title: String,
    pub exists: bool,
    pub is_redirect: bool,
    pub protection: Vec<Protection>,
    /// Category names without the `Category:` prefix.
    pub categories: Vec<String>,
}

impl PageInfo {
    pub fn is_edit_or_move_protected(&self) -> bool {
        self.protection
            .iter()
            .any(|p| p.kind == "edit" || p.kind == "move")
    }
}

/// Read/write access to a MediaWiki installation.
pub trait WikiClient: Send + Sync {
    /// Current revision id of `title`.
    fn live_revision_id<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String>;

    /// Current wikitext of `title`.
    fn page_text<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String>;

    /// Snapshot of text and revision id taken together.
    fn fetch_article<'a>(&'a self, title: &'a str) -> WikiFuture<'a, Article>;

    fn submit<'a>(&'a self, request: EditRequest<'a>) -> WikiFuture<'a, SubmitOutcome>;

    fn page_info<'a>(&'a self, title: &'a str) -> WikiFuture<'a, PageInfo>;

    /// Main-namespace pages in `category` (with or without the
    /// `Category:` prefix), at most `limit`.
    fn category_members<'a>(
        &'a self,
        category: &'a str,
        limit: usize,
    ) -> WikiFuture<'a, Vec<String>>;
}
