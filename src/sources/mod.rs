//! Finding citable sources for claims an article already makes.

mod claims;
mod finder;
mod reliability;

pub use claims::extract_claims;
pub use finder::SourceFinder;
pub use reliability::check_reliability;
