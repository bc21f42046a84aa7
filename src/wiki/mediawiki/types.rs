use serde::Deserialize;

/// `{"error": {"code": ..., "info": ...}}`, returned with HTTP 200.
#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct ErrorEnvelope {
    pub(in crate::wiki) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct ApiErrorBody {
    pub(in crate::wiki) code: String,
    #[serde(default)]
    pub(in crate::wiki) info: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct QueryBody<Q> {
    pub(in crate::wiki) query: Q,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct PagesQuery {
    #[serde(default)]
    pub(in crate::wiki) pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct Page {
    pub(in crate::wiki) title: String,
    #[serde(default)]
    pub(in crate::wiki) missing: bool,
    #[serde(default)]
    pub(in crate::wiki) invalid: bool,
    #[serde(default)]
    pub(in crate::wiki) redirect: bool,
    #[serde(default)]
    pub(in crate::wiki) revisions: Vec<Revision>,
    #[serde(default)]
    pub(in crate::wiki) protection: Vec<ProtectionEntry>,
    #[serde(default)]
    pub(in crate::wiki) categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct Revision {
    pub(in crate::wiki) revid: u64,
    #[serde(default)]
    pub(in crate::wiki) slots: Option<Slots>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct Slots {
    pub(in crate::wiki) main: MainSlot,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct MainSlot {
    #[serde(default)]
    pub(in crate::wiki) content: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct ProtectionEntry {
    #[serde(rename = "type")]
    pub(in crate::wiki) kind: String,
    pub(in crate::wiki) level: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct CategoryEntry {
    pub(in crate::wiki) title: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct CategoryMembersQuery {
    #[serde(default)]
    pub(in crate::wiki) categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct CategoryMember {
    pub(in crate::wiki) title: String,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct TokensQuery {
    pub(in crate::wiki) tokens: Tokens,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct Tokens {
    #[serde(default)]
    pub(in crate::wiki) csrftoken: Option<String>,
    #[serde(default)]
    pub(in crate::wiki) logintoken: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct LoginBody {
    pub(in crate::wiki) login: LoginResult,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct LoginResult {
    pub(in crate::wiki) result: String,
    #[serde(default)]
    pub(in crate::wiki) reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct EditBody {
    pub(in crate::wiki) edit: EditResult,
}

#[derive(Debug, Deserialize)]
pub(in crate::wiki) struct EditResult {
    pub(in crate::wiki) result: String,
    #[serde(default)]
    pub(in crate::wiki) newrevid: Option<u64>,
}
