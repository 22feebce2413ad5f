//! Entity-store implementations.
//!
//! `SqliteEntityStore` is the durable store; `MemoryEntityStore` backs tests
//! and fixtures. Both implement the `EntityStore` and `BookmarkStore` traits
//! from `verseforge-core`.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryEntityStore;
pub use sqlite::SqliteEntityStore;
