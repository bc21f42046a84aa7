use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::Config;
use crate::agent::{AnthropicAgent, EditAnalyzer};
use crate::app::review::run_review;
use crate::app::status::render_status;
use crate::cli::{Cli, Commands};
use crate::guardrails::EditGuardrail;
use crate::models::{EditProposal, ProposalStatus};
use crate::picker::{ArticlePicker, is_blp};
use crate::push::unified_diff;
use crate::sources::SourceFinder;
use crate::ui::style as ui;
use crate::utils::{single_line, truncate_with_ellipsis};
use crate::wiki::{MediaWikiClient, WikiClient};

const SNIPPET_CHARS: usize = 80;

pub(crate) fn wiki_client(config: &Config) -> Arc<dyn WikiClient> {
    Arc::new(MediaWikiClient::from_config(config))
}

pub(crate) fn analyzer(config: &Config) -> EditAnalyzer {
    EditAnalyzer::new(
        Arc::new(AnthropicAgent::from_config(config)),
        Arc::new(SourceFinder::from_config(config)),
        EditGuardrail::new(config.guardrails.clone()),
        config.agent.max_edits_per_article,
    )
}

/// Fetch `title` and run the analyzer on it. An agent failure surfaces as
/// an error rather than an empty proposal.
pub(crate) async fn analyze_title(
    config: &Config,
    wiki: &dyn WikiClient,
    title: &str,
) -> Result<EditProposal> {
    let article = wiki
        .fetch_article(title)
        .await
        .with_context(|| format!("could not fetch \"{title}\""))?;
    if config.guardrails.skip_blp_articles {
        let info = wiki
            .page_info(title)
            .await
            .with_context(|| format!("could not read page info for \"{title}\""))?;
        if is_blp(&article.wikitext, &info.categories) {
            bail!(
                "\"{title}\" is a biography of a living person; set guardrails.skip_blp_articles = false to analyze it"
            );
        }
    }
    println!("Analyzing article: {}", ui::header(&article.title));
    println!("This may take a moment...\n");

    let proposal = analyzer(config).analyze(article).await;
    if proposal.status == ProposalStatus::Rejected {
        bail!(
            "{}",
            proposal
                .reviewer_notes
                .as_deref()
                .unwrap_or("analysis failed")
        );
    }
    Ok(proposal)
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Fetch { limit } => fetch(&config, limit).await,
        Commands::Analyze { title } => analyze(&config, &title).await,
        Commands::Review { title } => run_review(Arc::clone(&config), &title).await,
        Commands::Check { original, modified } => check(&config, &original, &modified),
        Commands::Config => {
            println!("{}", render_status(&config));
            Ok(())
        }
    }
}

async fn fetch(config: &Config, limit: usize) -> Result<()> {
    info!(limit, category = %config.article_selection.category, "fetching candidates");
    println!("Fetching up to {limit} candidate articles...");

    let picker = ArticlePicker::new(wiki_client(config), config.article_selection.clone());
    let candidates = picker.fetch_candidates(limit).await?;
    for (i, candidate) in candidates.iter().enumerate() {
        println!("\n{}. {}", i + 1, ui::header(&candidate.title));
        println!("   URL: {}", ui::url(&candidate.url));
        println!("   Body lines: {}", candidate.body_line_count);
        let categories: Vec<&str> = candidate
            .categories
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        println!("   Categories: {}", categories.join(", "));
    }
    println!("\nFound {} candidate articles.", candidates.len());
    Ok(())
}

async fn analyze(config: &Config, title: &str) -> Result<()> {
    let wiki = wiki_client(config);
    let proposal = analyze_title(config, wiki.as_ref(), title).await?;
    println!(
        "Analysis complete! Found {} proposed edits:\n",
        proposal.edits.len()
    );
    for (i, edit) in proposal.edits.iter().enumerate() {
        println!(
            "{}. {} ({} confidence)",
            i + 1,
            ui::accent(format!("[{}]", edit.edit_type.to_string().to_uppercase())),
            edit.confidence
        );
        println!("   Original: {}", snippet(&edit.original_text));
        println!("   Proposed: {}", snippet(&edit.proposed_text));
        println!("   Rationale: {}", edit.rationale);
        if let Some(policy) = &edit.policy_reference {
            println!("   Policy: {policy}");
        }
        println!();
    }
    Ok(())
}

/// Guardrail and policy scan of a locally edited copy of an article.
fn check(config: &Config, original_path: &Path, modified_path: &Path) -> Result<()> {
    let original = std::fs::read_to_string(original_path)
        .with_context(|| format!("reading {}", original_path.display()))?;
    let modified = std::fs::read_to_string(modified_path)
        .with_context(|| format!("reading {}", modified_path.display()))?;

    let from: Vec<&str> = original.lines().collect();
    let to: Vec<&str> = modified.lines().collect();
    let diff = unified_diff(
        &from,
        &to,
        &original_path.display().to_string(),
        &modified_path.display().to_string(),
        3,
    );
    if diff.is_empty() {
        println!("No changes.");
        return Ok(());
    }
    for line in &diff {
        println!("{}", ui::diff_line(line));
    }
    println!();

    let guardrail = EditGuardrail::new(config.guardrails.clone());
    let flags: Vec<String> = added_lines(&original, &modified)
        .into_iter()
        .flat_map(|line| guardrail.check_policy_violations(line))
        .collect();
    for flag in &flags {
        println!("{} {flag}", ui::warn("policy:"));
    }

    let verdict = guardrail.validate_full_article_edit(&original, &modified);
    match verdict.reason() {
        None => {
            println!("{}", ui::success("Edit passes guardrails."));
            Ok(())
        }
        Some(reason) => bail!("Edit rejected: {reason}"),
    }
}

/// Lines of `modified` that do not occur anywhere in `original`.
fn added_lines<'a>(original: &str, modified: &'a str) -> Vec<&'a str> {
    let existing: HashSet<&str> = original.lines().collect();
    modified
        .lines()
        .filter(|line| !line.trim().is_empty() && !existing.contains(line))
        .collect()
}

fn snippet(text: &str) -> String {
    truncate_with_ellipsis(&single_line(text), SNIPPET_CHARS)
}
