//! Rate-limited, conflict-aware submission of reviewed edits.

mod apply;
mod conflict;
mod preview;
mod protocol;
mod rate_limit;

pub use apply::apply_edits;
pub use conflict::ConflictDetector;
pub use preview::{preview_diff, unified_diff};
pub use protocol::PushProtocol;
pub use rate_limit::RateLimiter;
