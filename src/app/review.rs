//! Interactive `review` command: approve, reject or rewrite each proposed
//! edit, preview the result, and push after confirmation.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use std::sync::Arc;

use crate::Config;
use crate::app::dispatch::{analyze_title, wiki_client};
use crate::guardrails::EditGuardrail;
use crate::models::ProposedEdit;
use crate::push::PushProtocol;
use crate::review::{NOTHING_APPROVED, ReviewSession};
use crate::store::InMemoryProposalStore;
use crate::ui::style as ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
    Edit,
    Skip,
}

impl Decision {
    const ALL: [Self; 4] = [Self::Approve, Self::Reject, Self::Edit, Self::Skip];

    fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::Edit => "Edit proposed text",
            Self::Skip => "Skip (leave pending)",
        }
    }
}

pub async fn run_review(config: Arc<Config>, title: &str) -> Result<()> {
    let wiki = wiki_client(&config);
    let proposal = analyze_title(&config, wiki.as_ref(), title).await?;
    if proposal.edits.is_empty() {
        println!("No edits proposed.");
        return Ok(());
    }

    let session = Arc::new(ReviewSession::new(
        Arc::new(InMemoryProposalStore::new()),
        EditGuardrail::new(config.guardrails.clone()),
        PushProtocol::from_config(wiki, &config.wikipedia),
    ));
    let id = session.submit(proposal);

    // Terminal prompts block, so they run off the async workers.
    let reviewing = Arc::clone(&session);
    let review_id = id.clone();
    tokio::task::spawn_blocking(move || review_edits(&reviewing, &review_id)).await??;
    finish(&session, &id, &config).await
}

fn review_edits(session: &ReviewSession, id: &str) -> Result<()> {
    let labels: Vec<&str> = Decision::ALL.iter().map(|d| d.label()).collect();
    let total = session.get(id)?.edits.len();
    let mut index = 0;

    while index < total {
        let proposal = session.get(id)?;
        let edit = &proposal.edits[index];
        println!();
        for line in edit_card(index, total, edit) {
            println!("{line}");
        }
        for flag in session.policy_flags(id, index)? {
            println!("  {} {flag}", ui::warn("policy:"));
        }

        let choice = Select::new()
            .with_prompt("  Decision")
            .items(&labels)
            .default(0)
            .interact()?;
        match Decision::ALL.get(choice).copied().unwrap_or(Decision::Skip) {
            Decision::Approve => {
                session.approve_edit(id, index)?;
                index += 1;
            }
            Decision::Reject => {
                session.reject_edit(id, index)?;
                index += 1;
            }
            Decision::Edit => {
                let text: String = Input::new()
                    .with_prompt("  Proposed text")
                    .with_initial_text(edit.proposed_text.clone())
                    .interact_text()?;
                let verdict = session.update_edit(id, index, &text)?;
                if let Some(reason) = verdict.reason() {
                    println!("  {} {reason}", ui::warn("guardrail:"));
                }
                // Shown again so the reviewer decides on the new text.
            }
            Decision::Skip => index += 1,
        }
    }
    Ok(())
}

async fn finish(session: &ReviewSession, id: &str, config: &Config) -> Result<()> {
    let proposal = session.get(id)?;
    let approved = proposal.approved_edits().len();
    if approved == 0 {
        println!("\n{NOTHING_APPROVED}.");
        return Ok(());
    }

    println!("\n{}", ui::header("Preview"));
    for line in session.preview(id)?.lines() {
        println!("{}", ui::diff_line(line));
    }
    println!(
        "\nEdit summary: {}",
        proposal.edit_summary(&config.wikipedia.edit_summary_suffix)
    );
    if let Some(reason) = session.full_article_check(id)?.reason() {
        println!("{} {reason}", ui::warn("Warning:"));
    }

    if !config.has_wiki_credentials() {
        println!(
            "{}",
            ui::dim(
                "Wikipedia credentials are not configured; set WIKIPEDIA_USERNAME and WIKIPEDIA_PASSWORD to push."
            )
        );
        return Ok(());
    }

    let prompt = format!("Push {approved} approved edit(s) to Wikipedia?");
    let confirmed = tokio::task::spawn_blocking(move || {
        Confirm::new().with_prompt(prompt).default(false).interact()
    })
    .await??;
    if !confirmed {
        println!("Nothing pushed.");
        return Ok(());
    }

    match session.push(id).await {
        Ok(message) => {
            println!("{}", ui::success(message));
            Ok(())
        }
        Err(e) => {
            println!("{}", ui::failure(&e));
            Err(e.into())
        }
    }
}

/// Header, rationale and a two-line diff for one edit.
fn edit_card(index: usize, total: usize, edit: &ProposedEdit) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} ({} confidence)",
        ui::accent(format!("Edit {}/{total}", index + 1)),
        ui::accent(format!("[{}]", edit.edit_type.to_string().to_uppercase())),
        edit.confidence
    )];
    lines.extend(
        edit.original_text
            .lines()
            .map(|l| format!("  {}", ui::diff_line(&format!("-{l}")))),
    );
    lines.extend(
        edit.proposed_text
            .lines()
            .map(|l| format!("  {}", ui::diff_line(&format!("+{l}")))),
    );
    lines.push(format!("  Rationale: {}", edit.rationale));
    if let Some(policy) = &edit.policy_reference {
        lines.push(format!("  Policy: {policy}"));
    }
    if let Some(source) = &edit.source {
        lines.push(format!("  Source: {}", source.to_citation_template()));
    }
    lines
}
