use super::*;
use crate::error::PushError;
use crate::models::{Approval, Article, EditType, ProposalStatus};
use crate::push::RateLimiter;
use crate::store::InMemoryProposalStore;
use crate::wiki::WikiClient;
use crate::wiki::fake::FakeWiki;

const SUFFIX: &str = "(AI-assisted citation/cleanup, human-reviewed)";
const TEXT: &str = "This is a test article.\nIt has two lines.";

fn session_with(wiki: Arc<FakeWiki>) -> ReviewSession {
    ReviewSession::new(
        Arc::new(InMemoryProposalStore::new()),
        EditGuardrail::default(),
        PushProtocol::new(wiki, Arc::new(RateLimiter::new(10)), SUFFIX),
    )
}

fn wiki() -> Arc<FakeWiki> {
    Arc::new(FakeWiki::default().with_page("Test", TEXT, 123))
}

fn proposal() -> EditProposal {
    EditProposal::new(
        Article::new("Test", "https://en.wikipedia.org/wiki/Test", TEXT, "123"),
        vec![
            ProposedEdit::new(
                EditType::Grammar,
                "This is a test article",
                "This is a great test article",
                "clarity",
            ),
            ProposedEdit::new(EditType::Style, "two lines", "2 lines", "numerals"),
        ],
    )
}

#[test]
fn approve_and_reject_are_persisted() {
    let session = session_with(wiki());
    let id = session.submit(proposal());

    session.approve_edit(&id, 0).unwrap();
    session.reject_edit(&id, 1).unwrap();

    let stored = session.get(&id).unwrap();
    assert_eq!(stored.edits[0].approval, Approval::Approved);
    assert_eq!(stored.edits[1].approval, Approval::Rejected);
    assert_eq!(stored.status, ProposalStatus::Approved);
}

#[test]
fn unknown_proposal_is_reported() {
    let session = session_with(wiki());
    assert!(matches!(
        session.approve_edit("nope", 0),
        Err(ReviewError::ProposalNotFound(id)) if id == "nope"
    ));
}

#[test]
fn out_of_range_index_leaves_proposal_untouched() {
    let session = session_with(wiki());
    let id = session.submit(proposal());

    assert!(matches!(
        session.approve_edit(&id, 5),
        Err(ReviewError::EditIndexOutOfRange { index: 5, len: 2 })
    ));
    assert!(matches!(
        session.policy_flags(&id, 2),
        Err(ReviewError::EditIndexOutOfRange { .. })
    ));
    assert_eq!(session.get(&id).unwrap().status, ProposalStatus::Pending);
}

#[test]
fn update_stores_text_and_returns_verdict() {
    let session = session_with(wiki());
    let id = session.submit(proposal());

    let verdict = session.update_edit(&id, 0, "This is a good test article").unwrap();
    assert!(verdict.is_accepted());
    assert_eq!(
        session.get(&id).unwrap().edits[0].proposed_text,
        "This is a good test article"
    );

    let rewrite = "was once considered by many historians to be a profoundly unusual example";
    let verdict = session.update_edit(&id, 0, rewrite).unwrap();
    assert!(!verdict.is_accepted());
    assert!(verdict.reason().unwrap_or_default().contains("similarity"));
    // Advisory only: the reviewer's text is kept.
    assert_eq!(session.get(&id).unwrap().edits[0].proposed_text, rewrite);
}

#[test]
fn policy_flags_scan_proposed_text() {
    let session = session_with(wiki());
    let id = session.submit(proposal());
    session
        .update_edit(&id, 0, "This is a world-class test article")
        .unwrap();

    let flags = session.policy_flags(&id, 0).unwrap();
    assert_eq!(flags.len(), 1);
    assert!(flags[0].contains("world-class"));
    assert!(session.policy_flags(&id, 1).unwrap().is_empty());
}

#[test]
fn preview_without_approvals() {
    let session = session_with(wiki());
    let id = session.submit(proposal());
    assert_eq!(session.preview(&id).unwrap(), NOTHING_APPROVED);
}

#[test]
fn preview_shows_approved_changes_only() {
    let session = session_with(wiki());
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();

    let diff = session.preview(&id).unwrap();
    assert!(diff.contains("--- Test (original)"));
    assert!(diff.contains("-This is a test article."));
    assert!(diff.contains("+This is a great test article."));
    assert!(!diff.contains("2 lines"));
    assert_eq!(
        session.modified_text(&id).unwrap(),
        "This is a great test article.\nIt has two lines."
    );
}

#[test]
fn full_article_check_passes_small_change() {
    let session = session_with(wiki());
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();
    assert!(session.full_article_check(&id).unwrap().is_accepted());
}

#[tokio::test]
async fn push_stores_pushed_proposal() {
    let wiki = wiki();
    let session = session_with(Arc::clone(&wiki));
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();

    let message = session.push(&id).await.unwrap();
    assert!(message.starts_with("Successfully pushed edits."));
    assert_eq!(session.get(&id).unwrap().status, ProposalStatus::Pushed);

    let submissions = wiki.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].text, "This is a great test article.\nIt has two lines.");

    assert!(matches!(
        session.push(&id).await,
        Err(ReviewError::ProposalClosed { .. })
    ));
    assert!(matches!(
        session.approve_edit(&id, 1),
        Err(ReviewError::ProposalClosed { .. })
    ));
    assert_eq!(wiki.submissions().len(), 1);
}

#[tokio::test]
async fn approval_made_during_push_is_kept() {
    let wiki = wiki();
    let store = Arc::new(InMemoryProposalStore::new());
    let session = ReviewSession::new(
        Arc::clone(&store) as Arc<dyn ProposalRepository>,
        EditGuardrail::default(),
        PushProtocol::new(
            Arc::clone(&wiki) as Arc<dyn WikiClient>,
            Arc::new(RateLimiter::new(10)),
            SUFFIX,
        ),
    );
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();

    let hook_store = Arc::clone(&store);
    let hook_id = id.clone();
    wiki.on_next_submit(move || {
        let mut stored = hook_store.get(&hook_id).unwrap();
        stored.approve(1).unwrap();
        hook_store.put(stored);
    });

    session.push(&id).await.unwrap();

    let stored = session.get(&id).unwrap();
    assert_eq!(stored.status, ProposalStatus::Pushed);
    assert!(stored.reviewed_at.is_some());
    assert_eq!(stored.edits[0].approval, Approval::Approved);
    assert_eq!(stored.edits[1].approval, Approval::Approved);
    assert_eq!(
        wiki.submissions()[0].text,
        "This is a great test article.\nIt has two lines."
    );
}

#[tokio::test]
async fn conflict_leaves_stored_proposal_unchanged() {
    let wiki = wiki();
    let session = session_with(Arc::clone(&wiki));
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();
    wiki.bump_revision("Test");

    let err = session.push(&id).await.unwrap_err();
    assert!(matches!(err, ReviewError::Push(PushError::Conflict)));
    assert_eq!(session.get(&id).unwrap().status, ProposalStatus::Approved);
    assert!(wiki.submissions().is_empty());
}

#[tokio::test]
async fn push_without_approvals_is_refused() {
    let wiki = wiki();
    let session = session_with(Arc::clone(&wiki));
    let id = session.submit(proposal());

    assert!(matches!(
        session.push(&id).await,
        Err(ReviewError::Push(PushError::NoApprovedEdits))
    ));
    assert!(wiki.submissions().is_empty());
}

#[tokio::test]
async fn rejected_proposal_cannot_be_pushed() {
    let session = session_with(wiki());
    let id = session.submit(proposal());
    session.approve_edit(&id, 0).unwrap();
    session
        .reject_proposal(&id, Some("not needed".into()))
        .unwrap();

    let stored = session.get(&id).unwrap();
    assert_eq!(stored.status, ProposalStatus::Rejected);
    assert_eq!(stored.reviewer_notes.as_deref(), Some("not needed"));
    assert!(matches!(
        session.push(&id).await,
        Err(ReviewError::ProposalClosed { .. })
    ));
}

#[test]
fn list_returns_submitted_proposals() {
    let session = session_with(wiki());
    session.submit(proposal());
    session.submit(proposal());
    assert_eq!(session.list().len(), 2);
}
