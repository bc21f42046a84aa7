use wikicite::error::{PushError, ReviewError};
use wikicite::models::{Article, EditProposal, EditType, ProposalStatus, ProposedEdit};
use wikicite::wiki::WikiClient;

use super::wiki_harness::{InMemoryWiki, session};

const TEXT: &str = "Lakeside is a town on the shore of a lake.\nIt was incorporated in 1901.";

async fn proposal_for(wiki: &InMemoryWiki, title: &str) -> EditProposal {
    let article: Article = wiki.fetch_article(title).await.unwrap();
    EditProposal::new(
        article,
        vec![ProposedEdit::new(
            EditType::Grammar,
            "It was incorporated in 1901.",
            "It was incorporated as a town in 1901.",
            "clarity",
        )],
    )
}

#[tokio::test]
async fn rate_limit_wins_over_conflict_and_empty_approvals() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Lakeside", TEXT, 1);
    let review = session(wiki.clone(), 0);
    let id = review.submit(proposal_for(&wiki, "Lakeside").await);
    wiki.edit_externally("Lakeside", "Rewritten.");

    assert!(matches!(
        review.push(&id).await,
        Err(ReviewError::Push(PushError::RateLimited))
    ));
    assert!(wiki.pushed().is_empty());
}

#[tokio::test]
async fn conflict_wins_over_empty_approvals() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Lakeside", TEXT, 1);
    let review = session(wiki.clone(), 10);
    let id = review.submit(proposal_for(&wiki, "Lakeside").await);
    wiki.edit_externally("Lakeside", "Rewritten.");

    assert!(matches!(
        review.push(&id).await,
        Err(ReviewError::Push(PushError::Conflict))
    ));
    assert_eq!(wiki.text("Lakeside"), "Rewritten.");
}

#[tokio::test]
async fn reanalysis_after_conflict_pushes_cleanly() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Lakeside", TEXT, 1);
    let review = session(wiki.clone(), 10);

    let stale = review.submit(proposal_for(&wiki, "Lakeside").await);
    review.approve_edit(&stale, 0).unwrap();
    wiki.edit_externally("Lakeside", &format!("{TEXT}\n\n[[Category:Towns]]"));
    assert!(review.push(&stale).await.is_err());
    assert_eq!(review.get(&stale).unwrap().status, ProposalStatus::Approved);

    let fresh = review.submit(proposal_for(&wiki, "Lakeside").await);
    review.approve_edit(&fresh, 0).unwrap();
    review.push(&fresh).await.unwrap();

    let text = wiki.text("Lakeside");
    assert!(text.contains("incorporated as a town in 1901"));
    assert!(text.ends_with("[[Category:Towns]]"));
    assert_eq!(wiki.pushed()[0].base_revision.as_deref(), Some("2"));
}

#[tokio::test]
async fn hourly_quota_is_shared_across_articles() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Lakeside", TEXT, 1);
    wiki.add_page("Hillside", &TEXT.replace("Lakeside", "Hillside"), 1);
    let review = session(wiki.clone(), 1);

    let first = review.submit(proposal_for(&wiki, "Lakeside").await);
    let second = review.submit(proposal_for(&wiki, "Hillside").await);
    review.approve_edit(&first, 0).unwrap();
    review.approve_edit(&second, 0).unwrap();

    review.push(&first).await.unwrap();
    assert!(matches!(
        review.push(&second).await,
        Err(ReviewError::Push(PushError::RateLimited))
    ));
    assert_eq!(wiki.pushed().len(), 1);
    assert_eq!(review.get(&second).unwrap().status, ProposalStatus::Approved);
}
