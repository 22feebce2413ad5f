//! Batch resolution: one fetch per non-empty id set, indexed into lookup maps.

use std::collections::HashMap;

use tracing::debug;

use verseforge_core::{
    BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Commentary, EntityStore,
    Quote, ResolveError, StoreError, StrongsLexiconEntry,
};

use crate::collect::ReferenceSets;

/// Per-type id→entity lookup maps, built once per invocation and read-only
/// afterwards.
#[derive(Debug, Default)]
pub struct EntityMaps {
    pub commentaries: HashMap<String, Commentary>,
    pub quotes: HashMap<String, Quote>,
    pub verses: HashMap<String, BibleVerse>,
    pub verse_versions: HashMap<String, BibleVerseVersion>,
    pub book_overviews: HashMap<String, BibleBookOverview>,
    pub takeaways: HashMap<String, BibleVerseTakeaway>,
    pub strongs_entries: HashMap<String, StrongsLexiconEntry>,
}

/// Skip the round trip entirely for an empty id set.
async fn batch<T, F>(ids: &[String], fetch: F) -> Result<Vec<T>, StoreError>
where
    F: std::future::Future<Output = Result<Vec<T>, StoreError>>,
{
    if ids.is_empty() {
        Ok(Vec::new())
    } else {
        fetch.await
    }
}

fn index_by<T>(rows: Vec<T>, id: impl Fn(&T) -> &str) -> HashMap<String, T> {
    rows.into_iter().map(|row| (id(&row).to_string(), row)).collect()
}

impl EntityMaps {
    /// Issue the seven independent batch fetches concurrently.
    ///
    /// Any store failure aborts the whole invocation: infrastructure errors
    /// need a visible retry signal, unlike missing rows, which simply leave
    /// gaps in the maps.
    pub async fn fetch(
        store: &dyn EntityStore,
        sets: &ReferenceSets,
    ) -> Result<Self, ResolveError> {
        let (commentaries, quotes, verses, verse_versions, book_overviews, takeaways, strongs) =
            tokio::try_join!(
                batch(&sets.commentaries, store.commentaries_by_ids(&sets.commentaries)),
                batch(&sets.quotes, store.quotes_by_ids(&sets.quotes)),
                batch(&sets.verses, store.verses_by_ids(&sets.verses)),
                batch(
                    &sets.verse_versions,
                    store.verse_versions_by_ids(&sets.verse_versions),
                ),
                batch(
                    &sets.book_overviews,
                    store.book_overviews_by_ids(&sets.book_overviews),
                ),
                batch(&sets.takeaways, store.takeaways_by_ids(&sets.takeaways)),
                batch(
                    &sets.strongs_entries,
                    store.strongs_entries_by_ids(&sets.strongs_entries),
                ),
            )?;

        let maps = Self {
            commentaries: index_by(commentaries, |c| &c.id),
            quotes: index_by(quotes, |q| &q.id),
            verses: index_by(verses, |v| &v.id),
            verse_versions: index_by(verse_versions, |v| &v.id),
            book_overviews: index_by(book_overviews, |o| &o.id),
            takeaways: index_by(takeaways, |t| &t.id),
            strongs_entries: index_by(strongs, |s| &s.id),
        };
        debug!(
            commentaries = maps.commentaries.len(),
            quotes = maps.quotes.len(),
            verses = maps.verses.len(),
            verse_versions = maps.verse_versions.len(),
            book_overviews = maps.book_overviews.len(),
            takeaways = maps.takeaways.len(),
            strongs_entries = maps.strongs_entries.len(),
            "entity maps built"
        );
        Ok(maps)
    }
}
