//! Collaborators that sit outside the resolution core.
//!
//! The cache short-circuits requests upstream of the pipeline; search and
//! mail are separate subsystems. All three are constructed explicitly and
//! passed in — no module-level singletons.

pub mod bookmarks;
pub mod cache;
pub mod mailer;
pub mod search;

pub use bookmarks::BookmarkService;
pub use cache::ResponseCache;
pub use mailer::Mailer;
pub use search::{SearchClient, SearchHit};
