//! JSON fixture loading for `verseforge seed`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use verseforge_core::{
    BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Bookmark, Commentary,
    Quote, StrongsLexiconEntry,
};
use verseforge_store::SqliteEntityStore;

/// A seed file: any subset of entity families plus bookmarks.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixture {
    pub commentaries: Vec<Commentary>,
    pub quotes: Vec<Quote>,
    pub verses: Vec<BibleVerse>,
    pub verse_versions: Vec<BibleVerseVersion>,
    pub book_overviews: Vec<BibleBookOverview>,
    pub takeaways: Vec<BibleVerseTakeaway>,
    pub strongs_entries: Vec<StrongsLexiconEntry>,
    pub bookmarks: Vec<Bookmark>,
}

impl Fixture {
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read fixture at {}", path.display()))?;
        serde_json::from_str(&raw).context("fixture is not valid JSON")
    }

    pub async fn apply(&self, store: &SqliteEntityStore) -> Result<()> {
        for entity in &self.commentaries {
            store.seed_commentary(entity).await?;
        }
        for entity in &self.quotes {
            store.seed_quote(entity).await?;
        }
        for entity in &self.verses {
            store.seed_verse(entity).await?;
        }
        for entity in &self.verse_versions {
            store.seed_verse_version(entity).await?;
        }
        for entity in &self.book_overviews {
            store.seed_book_overview(entity).await?;
        }
        for entity in &self.takeaways {
            store.seed_takeaway(entity).await?;
        }
        for entity in &self.strongs_entries {
            store.seed_strongs_entry(entity).await?;
        }
        for bookmark in &self.bookmarks {
            store.seed_bookmark(bookmark).await?;
        }
        info!(
            bookmarks = self.bookmarks.len(),
            entities = self.commentaries.len()
                + self.quotes.len()
                + self.verses.len()
                + self.verse_versions.len()
                + self.book_overviews.len()
                + self.takeaways.len()
                + self.strongs_entries.len(),
            "fixture applied"
        );
        Ok(())
    }
}
