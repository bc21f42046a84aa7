use wikicite::models::{EditType, ProposalStatus};
use wikicite::wiki::WikiClient;

use super::wiki_harness::{InMemoryWiki, ScriptedAgent, SUFFIX, candidate, offline_analyzer, session};

const STUB: &str = "'''Millbrook''' is a village in Example County.\n\
The village was founded in 1850 by settlers.\n\
It has a population of 400 people.\n\
\n\
[[Category:Villages in Example County]]";

const CITED: &str =
    "population of 400 people.<ref>{{cite web|url=https://example.gov/census|title=Census 2020}}</ref>";

fn agent() -> std::sync::Arc<ScriptedAgent> {
    ScriptedAgent::replying(vec![
        candidate(
            "grammar",
            "founded in 1850 by settlers",
            "founded in 1850 by early settlers",
        ),
        candidate("citation", "population of 400 people.", CITED),
        candidate(
            "style",
            "is a village in Example County",
            "is a picturesque and historically significant rural village located within Example County",
        ),
        candidate("vandalism", "Millbrook", "Nowhere"),
    ])
}

#[tokio::test]
async fn analysis_keeps_only_guarded_edits() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Millbrook", STUB, 7);
    let agent = agent();

    let article = wiki.fetch_article("Millbrook").await.unwrap();
    let proposal = offline_analyzer(agent.clone()).analyze(article).await;

    assert_eq!(proposal.status, ProposalStatus::Pending);
    let types: Vec<EditType> = proposal.edits.iter().map(|e| e.edit_type).collect();
    assert_eq!(types, vec![EditType::Grammar, EditType::Citation]);
    assert_eq!(proposal.article.revision_id, "7");

    let contexts = agent.contexts();
    assert_eq!(contexts.len(), 1);
    assert!(contexts[0].starts_with("## Available Sources for Citation"));
}

#[tokio::test]
async fn approved_edits_reach_the_wiki() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Millbrook", STUB, 7);

    let article = wiki.fetch_article("Millbrook").await.unwrap();
    let proposal = offline_analyzer(agent()).analyze(article).await;

    let review = session(wiki.clone(), 10);
    let id = review.submit(proposal);
    review.approve_edit(&id, 0).unwrap();
    review.approve_edit(&id, 1).unwrap();
    // A citation on a stub is a large relative change; the whole-article
    // check only warns.
    let overall = review.full_article_check(&id).unwrap();
    assert!(overall.reason().unwrap().starts_with("Overall edit changes too much"));

    let message = review.push(&id).await.unwrap();
    let summary = format!("Copyedit: added 1 citation, fixed grammar {SUFFIX}");
    assert_eq!(message, format!("Successfully pushed edits. Edit summary: {summary}"));

    let text = wiki.text("Millbrook");
    assert!(text.contains("founded in 1850 by early settlers"));
    assert!(text.contains("<ref>{{cite web|url=https://example.gov/census"));
    assert!(text.ends_with("[[Category:Villages in Example County]]"));

    let pushed = wiki.pushed();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].summary, summary);
    assert_eq!(pushed[0].base_revision.as_deref(), Some("7"));
    assert_eq!(review.get(&id).unwrap().status, ProposalStatus::Pushed);
}

#[tokio::test]
async fn rejected_edit_is_left_out_of_the_push() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Millbrook", STUB, 7);

    let article = wiki.fetch_article("Millbrook").await.unwrap();
    let proposal = offline_analyzer(agent()).analyze(article).await;

    let review = session(wiki.clone(), 10);
    let id = review.submit(proposal);
    review.reject_edit(&id, 0).unwrap();
    review.approve_edit(&id, 1).unwrap();
    review.push(&id).await.unwrap();

    let text = wiki.text("Millbrook");
    assert!(text.contains("founded in 1850 by settlers"));
    assert!(text.contains("<ref>"));
    assert!(wiki.pushed()[0].summary.starts_with("Copyedit: added 1 citation ("));
}

#[tokio::test]
async fn agent_failure_yields_closed_proposal() {
    let wiki = InMemoryWiki::new();
    wiki.add_page("Millbrook", STUB, 7);

    let article = wiki.fetch_article("Millbrook").await.unwrap();
    let proposal = offline_analyzer(ScriptedAgent::failing("overloaded"))
        .analyze(article)
        .await;

    assert_eq!(proposal.status, ProposalStatus::Rejected);
    assert!(proposal.edits.is_empty());
    assert_eq!(
        proposal.reviewer_notes.as_deref(),
        Some("Error: agent request failed: overloaded")
    );
}
