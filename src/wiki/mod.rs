pub mod mediawiki;
pub mod traits;

pub use mediawiki::MediaWikiClient;
pub use traits::{
    EditRequest, PageInfo, Protection, SubmitFlags, SubmitOutcome, WikiClient, WikiFuture,
};

#[cfg(test)]
pub(crate) mod fake;
