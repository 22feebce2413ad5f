use async_trait::async_trait;

use crate::entities::{
    BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Commentary, Quote,
    StrongsLexiconEntry,
};
use crate::error::StoreError;
use crate::types::Bookmark;

/// Batch access to the seven entity tables backing bookmark resolution.
///
/// Every getter has "id in set" semantics: rows whose id appears in `ids`,
/// in no particular order, absent ids silently skipped. The pipeline never
/// calls a getter with an empty id list.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn commentaries_by_ids(&self, ids: &[String]) -> Result<Vec<Commentary>, StoreError>;

    async fn quotes_by_ids(&self, ids: &[String]) -> Result<Vec<Quote>, StoreError>;

    async fn verses_by_ids(&self, ids: &[String]) -> Result<Vec<BibleVerse>, StoreError>;

    async fn verse_versions_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleVerseVersion>, StoreError>;

    async fn book_overviews_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleBookOverview>, StoreError>;

    async fn takeaways_by_ids(&self, ids: &[String])
        -> Result<Vec<BibleVerseTakeaway>, StoreError>;

    async fn strongs_entries_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<StrongsLexiconEntry>, StoreError>;
}

/// Access to a user's saved bookmarks.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks for a user, newest first. The resolver preserves this
    /// ordering end to end.
    async fn bookmarks_for_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError>;
}
