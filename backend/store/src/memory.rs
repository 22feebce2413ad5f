//! In-memory store for tests and fixtures.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use verseforge_core::{
    BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Bookmark, BookmarkStore,
    Commentary, EntityStore, Quote, StoreError, StrongsLexiconEntry,
};

/// Hash-map backed entity store. An injectable failure flag lets tests
/// exercise the pipeline's hard-failure path.
#[derive(Default)]
pub struct MemoryEntityStore {
    commentaries: RwLock<HashMap<String, Commentary>>,
    quotes: RwLock<HashMap<String, Quote>>,
    verses: RwLock<HashMap<String, BibleVerse>>,
    verse_versions: RwLock<HashMap<String, BibleVerseVersion>>,
    book_overviews: RwLock<HashMap<String, BibleBookOverview>>,
    takeaways: RwLock<HashMap<String, BibleVerseTakeaway>>,
    strongs_entries: RwLock<HashMap<String, StrongsLexiconEntry>>,
    bookmarks: RwLock<Vec<Bookmark>>,
    failing: RwLock<bool>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every getter returns `StoreError::Query`.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write().unwrap() = failing;
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if *self.failing.read().unwrap() {
            Err(StoreError::Query("injected store failure".into()))
        } else {
            Ok(())
        }
    }

    pub fn insert_commentary(&self, entity: Commentary) {
        self.commentaries.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_quote(&self, entity: Quote) {
        self.quotes.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_verse(&self, entity: BibleVerse) {
        self.verses.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_verse_version(&self, entity: BibleVerseVersion) {
        self.verse_versions.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_book_overview(&self, entity: BibleBookOverview) {
        self.book_overviews.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_takeaway(&self, entity: BibleVerseTakeaway) {
        self.takeaways.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_strongs_entry(&self, entity: StrongsLexiconEntry) {
        self.strongs_entries.write().unwrap().insert(entity.id.clone(), entity);
    }

    pub fn insert_bookmark(&self, bookmark: Bookmark) {
        self.bookmarks.write().unwrap().push(bookmark);
    }

    fn select<T: Clone>(
        &self,
        map: &RwLock<HashMap<String, T>>,
        ids: &[String],
    ) -> Result<Vec<T>, StoreError> {
        self.check_failing()?;
        let map = map.read().unwrap();
        Ok(ids.iter().filter_map(|id| map.get(id).cloned()).collect())
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn commentaries_by_ids(&self, ids: &[String]) -> Result<Vec<Commentary>, StoreError> {
        self.select(&self.commentaries, ids)
    }

    async fn quotes_by_ids(&self, ids: &[String]) -> Result<Vec<Quote>, StoreError> {
        self.select(&self.quotes, ids)
    }

    async fn verses_by_ids(&self, ids: &[String]) -> Result<Vec<BibleVerse>, StoreError> {
        self.select(&self.verses, ids)
    }

    async fn verse_versions_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleVerseVersion>, StoreError> {
        self.select(&self.verse_versions, ids)
    }

    async fn book_overviews_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleBookOverview>, StoreError> {
        self.select(&self.book_overviews, ids)
    }

    async fn takeaways_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<BibleVerseTakeaway>, StoreError> {
        self.select(&self.takeaways, ids)
    }

    async fn strongs_entries_by_ids(
        &self,
        ids: &[String],
    ) -> Result<Vec<StrongsLexiconEntry>, StoreError> {
        self.select(&self.strongs_entries, ids)
    }
}

#[async_trait]
impl BookmarkStore for MemoryEntityStore {
    async fn bookmarks_for_user(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        self.check_failing()?;
        let mut bookmarks: Vec<Bookmark> = self
            .bookmarks
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookmarks)
    }
}
