use super::traits::{
    EditRequest, PageInfo, Protection, SubmitOutcome, WikiClient, WikiFuture,
};
use crate::config::{Config, WikipediaConfig};
use crate::error::WikiError;
use crate::http::{api_error, build_session_client, sanitize_api_error};
use crate::models::{Article, article_url};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

mod types;
use types::{
    CategoryMembersQuery, EditBody, ErrorEnvelope, LoginBody, Page, PagesQuery, QueryBody,
    TokensQuery,
};

const CATEGORY_PREFIX: &str = "Category:";

/// Client for the MediaWiki Action API.
///
/// Reads are anonymous. Writes log in first with a bot password when
/// credentials are configured; the session lives in the client's cookie
/// store.
pub struct MediaWikiClient {
    api_url: String,
    article_base_url: String,
    client: Client,
    credentials: Option<(String, String)>,
    session: OnceCell<()>,
}

impl MediaWikiClient {
    pub fn new(config: &WikipediaConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            article_base_url: config.article_base_url(),
            client: build_session_client(config.timeout_secs, &config.user_agent),
            credentials: None,
            session: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = Self::new(&config.wikipedia);
        match (&config.wikipedia_username, &config.wikipedia_password) {
            (Some(user), Some(pass)) if config.has_wiki_credentials() => {
                client.with_credentials(user, pass)
            }
            _ => client,
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some((username.to_string(), password.to_string()));
        self
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, WikiError> {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return Err(WikiError::Api {
                code: envelope.error.code,
                info: sanitize_api_error(&envelope.error.info),
            });
        }
        serde_json::from_str(body)
            .map_err(|e| WikiError::Http(format!("unexpected API response: {e}")))
    }

    async fn read_body(response: reqwest::Response) -> Result<String, WikiError> {
        if !response.status().is_success() {
            return Err(WikiError::Http(api_error("MediaWiki", response).await));
        }
        response
            .text()
            .await
            .map_err(|e| WikiError::Http(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, WikiError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| WikiError::Http(e.to_string()))?;
        Self::decode(&Self::read_body(response).await?)
    }

    async fn post<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, WikiError> {
        let mut form: Vec<(&str, &str)> = vec![("format", "json"), ("formatversion", "2")];
        form.extend_from_slice(params);
        let response = self
            .client
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| WikiError::Http(e.to_string()))?;
        Self::decode(&Self::read_body(response).await?)
    }

    /// The single page a `titles=` query returns; missing pages are errors.
    async fn query_page(&self, title: &str, params: &[(&str, &str)]) -> Result<Page, WikiError> {
        let mut all = vec![("action", "query"), ("titles", title)];
        all.extend_from_slice(params);
        let body: QueryBody<PagesQuery> = self.get(&all).await?;
        let page = body
            .query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| WikiError::PageNotFound(title.to_string()))?;
        if page.missing || page.invalid {
            return Err(WikiError::PageNotFound(title.to_string()));
        }
        Ok(page)
    }

    async fn latest_revision(&self, title: &str) -> Result<(u64, String), WikiError> {
        let page = self
            .query_page(
                title,
                &[
                    ("prop", "revisions"),
                    ("rvprop", "ids|content"),
                    ("rvslots", "main"),
                ],
            )
            .await?;
        let revision = page
            .revisions
            .into_iter()
            .next()
            .ok_or_else(|| WikiError::PageNotFound(title.to_string()))?;
        let text = revision.slots.map(|s| s.main.content).unwrap_or_default();
        Ok((revision.revid, text))
    }

    async fn token(&self, kind: &str) -> Result<String, WikiError> {
        let body: QueryBody<TokensQuery> = self
            .get(&[("action", "query"), ("meta", "tokens"), ("type", kind)])
            .await?;
        let tokens = body.query.tokens;
        let token = match kind {
            "login" => tokens.logintoken,
            _ => tokens.csrftoken,
        };
        token.ok_or_else(|| WikiError::Http(format!("API returned no {kind} token")))
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), WikiError> {
        let login_token = self.token("login").await?;
        let body: LoginBody = self
            .post(&[
                ("action", "login"),
                ("lgname", username),
                ("lgpassword", password),
                ("lgtoken", login_token.as_str()),
            ])
            .await?;
        if body.login.result != "Success" {
            let reason = body.login.reason.unwrap_or(body.login.result);
            return Err(WikiError::Login(sanitize_api_error(&reason)));
        }
        tracing::info!(user = username, "logged in to wiki");
        Ok(())
    }

    async fn ensure_session(&self) -> Result<(), WikiError> {
        let Some((username, password)) = &self.credentials else {
            return Ok(());
        };
        self.session
            .get_or_try_init(|| self.login(username, password))
            .await
            .map(|_| ())
    }

    async fn submit_edit(&self, request: EditRequest<'_>) -> Result<SubmitOutcome, WikiError> {
        self.ensure_session().await?;
        let csrf = self.token("csrf").await?;

        let mut params: Vec<(&str, &str)> = vec![
            ("action", "edit"),
            ("title", request.title),
            ("text", request.text),
            ("summary", request.summary),
            ("nocreate", "1"),
        ];
        if request.flags.minor {
            params.push(("minor", "1"));
        }
        if request.flags.bot {
            params.push(("bot", "1"));
        }
        if let Some(base) = request.base_revision {
            params.push(("baserevid", base));
        }
        params.push(("token", csrf.as_str()));

        let body: EditBody = self.post(&params).await?;
        if body.edit.result != "Success" {
            return Err(WikiError::Api {
                code: "edit".into(),
                info: body.edit.result,
            });
        }
        tracing::info!(title = request.title, newrevid = ?body.edit.newrevid, "edit saved");
        Ok(SubmitOutcome {
            new_revision_id: body.edit.newrevid.map(|id| id.to_string()),
        })
    }

    async fn info(&self, title: &str) -> Result<PageInfo, WikiError> {
        let page = self
            .query_page(
                title,
                &[
                    ("prop", "info|categories"),
                    ("inprop", "protection"),
                    ("cllimit", "max"),
                ],
            )
            .await?;
        Ok(PageInfo {
            title: page.title,
            exists: true,
            is_redirect: page.redirect,
            protection: page
                .protection
                .into_iter()
                .map(|p| Protection {
                    kind: p.kind,
                    level: p.level,
                })
                .collect(),
            categories: page
                .categories
                .into_iter()
                .map(|c| {
                    c.title
                        .strip_prefix(CATEGORY_PREFIX)
                        .map_or(c.title.clone(), str::to_string)
                })
                .collect(),
        })
    }

    async fn members(&self, category: &str, limit: usize) -> Result<Vec<String>, WikiError> {
        let name = category.strip_prefix(CATEGORY_PREFIX).unwrap_or(category);
        let cmtitle = format!("{CATEGORY_PREFIX}{name}");
        let cmlimit = limit.clamp(1, 500).to_string();
        let body: QueryBody<CategoryMembersQuery> = self
            .get(&[
                ("action", "query"),
                ("list", "categorymembers"),
                ("cmtitle", cmtitle.as_str()),
                ("cmnamespace", "0"),
                ("cmtype", "page"),
                ("cmlimit", cmlimit.as_str()),
            ])
            .await?;
        Ok(body
            .query
            .categorymembers
            .into_iter()
            .take(limit)
            .map(|m| m.title)
            .collect())
    }
}

impl WikiClient for MediaWikiClient {
    fn live_revision_id<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String> {
        Box::pin(async move {
            let (revid, _) = self.latest_revision(title).await?;
            Ok(revid.to_string())
        })
    }

    fn page_text<'a>(&'a self, title: &'a str) -> WikiFuture<'a, String> {
        Box::pin(async move {
            let (_, text) = self.latest_revision(title).await?;
            Ok(text)
        })
    }

    fn fetch_article<'a>(&'a self, title: &'a str) -> WikiFuture<'a, Article> {
        Box::pin(async move {
            let (revid, text) = self.latest_revision(title).await?;
            Ok(Article::new(
                title,
                article_url(&self.article_base_url, title),
                text,
                revid.to_string(),
            ))
        })
    }

    fn submit<'a>(&'a self, request: EditRequest<'a>) -> WikiFuture<'a, SubmitOutcome> {
        Box::pin(self.submit_edit(request))
    }

    fn page_info<'a>(&'a self, title: &'a str) -> WikiFuture<'a, PageInfo> {
        Box::pin(self.info(title))
    }

    fn category_members<'a>(
        &'a self,
        category: &'a str,
        limit: usize,
    ) -> WikiFuture<'a, Vec<String>> {
        Box::pin(self.members(category, limit))
    }
}
