use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// `wikicite` - guarded, human-reviewed citation and cleanup edits for stub
/// Wikipedia articles.
#[derive(Parser, Debug)]
#[command(name = "wikicite")]
#[command(version)]
#[command(about = "Wikipedia citation & cleanup assistant.", long_about = None)]
pub struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List candidate articles from the configured maintenance category
    Fetch {
        /// Maximum number of candidates to list
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Propose edits for one article and print them
    Analyze {
        /// Article title, e.g. "Groveland Four"
        title: String,
    },

    /// Propose edits, review them one by one, and optionally push
    Review {
        /// Article title
        title: String,
    },

    /// Run the guardrails and policy scan over a local edit
    Check {
        /// Original wikitext
        original: PathBuf,

        /// Edited wikitext
        modified: PathBuf,
    },

    /// Show the current configuration
    Config,
}
