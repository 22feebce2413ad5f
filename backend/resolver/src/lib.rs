//! Bookmark resolution pipeline.
//!
//! Raw bookmarks → per-type id sets → concurrent batch fetches → per-type
//! lookup maps → one dispatch pass → formatted output, in the input order.
//! A bookmark is never dropped: unresolvable references degrade to the basic
//! shape, and only store failures abort an invocation.

pub mod collect;
pub mod dispatch;
pub mod fetch;

use std::sync::Arc;

use tracing::debug;

use verseforge_core::{
    Bookmark, DetailedBookmark, EntityStore, FormattedBookmark, ResolveError,
};

pub use collect::ReferenceSets;
pub use fetch::EntityMaps;

use dispatch::{format_fields, lookup};

/// The pipeline entry point. Holds the injected entity store and nothing
/// else; each call is a pure function of its input plus store state.
pub struct Resolver {
    store: Arc<dyn EntityStore>,
}

impl Resolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    async fn maps(&self, bookmarks: &[Bookmark]) -> Result<EntityMaps, ResolveError> {
        let sets = ReferenceSets::collect(bookmarks);
        EntityMaps::fetch(self.store.as_ref(), &sets).await
    }

    /// Resolve to the full shape, embedding each resolved sub-entity.
    pub async fn resolve(
        &self,
        bookmarks: &[Bookmark],
    ) -> Result<Vec<FormattedBookmark>, ResolveError> {
        let maps = self.maps(bookmarks).await?;
        debug!(count = bookmarks.len(), "resolving bookmarks (full)");
        Ok(bookmarks
            .iter()
            .map(|bookmark| match lookup(bookmark, &maps) {
                None => FormattedBookmark::basic(bookmark),
                Some(entity) => {
                    let fields = format_fields(&entity);
                    FormattedBookmark {
                        title: fields.title,
                        description: fields.description,
                        reference: fields.reference,
                        author: fields.author,
                        slug: fields.slug,
                        entity: Some(entity.to_resolved()),
                        ..FormattedBookmark::basic(bookmark)
                    }
                }
            })
            .collect())
    }

    /// Resolve to the detailed shape: flattened scalars, no embeddings.
    pub async fn resolve_detailed(
        &self,
        bookmarks: &[Bookmark],
    ) -> Result<Vec<DetailedBookmark>, ResolveError> {
        let maps = self.maps(bookmarks).await?;
        debug!(count = bookmarks.len(), "resolving bookmarks (detailed)");
        Ok(bookmarks
            .iter()
            .map(|bookmark| match lookup(bookmark, &maps) {
                None => DetailedBookmark::basic(bookmark),
                Some(entity) => {
                    let fields = format_fields(&entity);
                    DetailedBookmark {
                        title: fields.title,
                        description: fields.description,
                        reference: fields.reference,
                        author: fields.author,
                        slug: fields.slug,
                        ..DetailedBookmark::basic(bookmark)
                    }
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use verseforge_core::{
        BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Book, Chapter,
        Commentary, ContentType, Quote, ResolvedEntity, StoreError, StrongsLexiconEntry,
    };
    use verseforge_store::MemoryEntityStore;

    fn bookmark(id: &str, content_type: ContentType, reference_id: Option<&str>) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            user_id: "u1".into(),
            content_type,
            reference_id: reference_id.map(String::from),
            created_at: Utc::now(),
        }
    }

    fn verse(id: &str, number: u32) -> BibleVerse {
        BibleVerse {
            id: id.to_string(),
            verse_number: Some(number),
            chapter: Some(Chapter {
                number: Some(3),
                book: Some(Book {
                    name: Some("John".into()),
                    slug: Some("john".into()),
                }),
            }),
            versions: Vec::new(),
        }
    }

    fn seeded_store() -> Arc<MemoryEntityStore> {
        let store = MemoryEntityStore::new();
        store.insert_verse(verse("v1", 16));
        store.insert_quote(Quote {
            id: "q1".into(),
            content: Some("A quote".into()),
            ..Default::default()
        });
        store.insert_strongs_entry(StrongsLexiconEntry {
            id: "s1".into(),
            strongs_key: Some("G26".into()),
            ..Default::default()
        });
        Arc::new(store)
    }

    /// Wraps the in-memory store and counts how many batch calls (and ids)
    /// each getter sees, so fetch behavior is observable.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryEntityStore,
        verse_calls: AtomicUsize,
        verse_ids: AtomicUsize,
        strongs_calls: AtomicUsize,
    }

    #[async_trait]
    impl EntityStore for CountingStore {
        async fn commentaries_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<Commentary>, StoreError> {
            self.inner.commentaries_by_ids(ids).await
        }

        async fn quotes_by_ids(&self, ids: &[String]) -> Result<Vec<Quote>, StoreError> {
            self.inner.quotes_by_ids(ids).await
        }

        async fn verses_by_ids(&self, ids: &[String]) -> Result<Vec<BibleVerse>, StoreError> {
            self.verse_calls.fetch_add(1, Ordering::SeqCst);
            self.verse_ids.fetch_add(ids.len(), Ordering::SeqCst);
            self.inner.verses_by_ids(ids).await
        }

        async fn verse_versions_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<BibleVerseVersion>, StoreError> {
            self.inner.verse_versions_by_ids(ids).await
        }

        async fn book_overviews_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<BibleBookOverview>, StoreError> {
            self.inner.book_overviews_by_ids(ids).await
        }

        async fn takeaways_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<BibleVerseTakeaway>, StoreError> {
            self.inner.takeaways_by_ids(ids).await
        }

        async fn strongs_entries_by_ids(
            &self,
            ids: &[String],
        ) -> Result<Vec<StrongsLexiconEntry>, StoreError> {
            self.strongs_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.strongs_entries_by_ids(ids).await
        }
    }

    #[tokio::test]
    async fn test_output_length_matches_input_both_variants() {
        let resolver = Resolver::new(seeded_store());
        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("v1")),
            bookmark("b2", ContentType::Verse, None),
            bookmark("b3", ContentType::Commentary, Some("missing")),
            bookmark("b4", ContentType::BookHighlight, Some("q1")),
        ];

        let full = resolver.resolve(&bookmarks).await.unwrap();
        let detailed = resolver.resolve_detailed(&bookmarks).await.unwrap();
        assert_eq!(full.len(), bookmarks.len());
        assert_eq!(detailed.len(), bookmarks.len());
        // Input order preserved.
        assert_eq!(
            full.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["b1", "b2", "b3", "b4"]
        );
    }

    #[tokio::test]
    async fn test_idempotent_over_same_snapshot() {
        let resolver = Resolver::new(seeded_store());
        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("v1")),
            bookmark("b2", ContentType::StrongsConcordance, Some("s1")),
        ];
        let first = resolver.resolve(&bookmarks).await.unwrap();
        let second = resolver.resolve(&bookmarks).await.unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_duplicate_references_fetch_once_and_both_resolve() {
        let store = CountingStore::default();
        store.inner.insert_verse(verse("v1", 16));
        let store = Arc::new(store);
        let resolver = Resolver::new(store.clone());

        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("v1")),
            bookmark("b2", ContentType::Verse, Some("v1")),
        ];
        let full = resolver.resolve(&bookmarks).await.unwrap();

        assert_eq!(store.verse_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.verse_ids.load(Ordering::SeqCst), 1);
        assert!(full.iter().all(|b| b.title.as_deref() == Some("John 3:16")));
    }

    #[tokio::test]
    async fn test_empty_id_set_issues_no_fetch() {
        let store = Arc::new(CountingStore::default());
        let resolver = Resolver::new(store.clone());
        let bookmarks = vec![bookmark("b1", ContentType::BookHighlight, Some("q1"))];

        resolver.resolve(&bookmarks).await.unwrap();
        assert_eq!(store.strongs_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.verse_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_reference_id_yields_basic_shape() {
        let resolver = Resolver::new(seeded_store());
        for content_type in ContentType::ALL {
            let out = resolver
                .resolve(&[bookmark("b1", content_type, None)])
                .await
                .unwrap();
            assert!(out[0].title.is_none());
            assert!(out[0].entity.is_none());
            assert!(out[0].tags.is_empty());
        }
    }

    #[tokio::test]
    async fn test_lookup_miss_yields_basic_shape_not_error() {
        let resolver = Resolver::new(seeded_store());
        let out = resolver
            .resolve(&[bookmark("b1", ContentType::Takeaway, Some("nope"))])
            .await
            .unwrap();
        assert!(out[0].title.is_none());
        assert_eq!(out[0].reference_id.as_deref(), Some("nope"));
    }

    #[tokio::test]
    async fn test_store_failure_aborts_invocation() {
        let store = MemoryEntityStore::new();
        store.set_failing(true);
        let resolver = Resolver::new(Arc::new(store));
        let err = resolver
            .resolve(&[bookmark("b1", ContentType::Verse, Some("v1"))])
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Store(StoreError::Query(_))));
    }

    #[tokio::test]
    async fn test_full_variant_embeds_matching_entity() {
        let resolver = Resolver::new(seeded_store());
        let out = resolver
            .resolve(&[bookmark("b1", ContentType::StrongsConcordance, Some("s1"))])
            .await
            .unwrap();
        match &out[0].entity {
            Some(entity @ ResolvedEntity::StrongsEntry(s)) => {
                assert_eq!(entity.content_type(), out[0].content_type);
                assert_eq!(s.strongs_key.as_deref(), Some("G26"));
            }
            other => panic!("expected strongs embedding, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_detailed_variant_has_same_scalars_as_full() {
        let resolver = Resolver::new(seeded_store());
        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("v1")),
            bookmark("b2", ContentType::BookHighlight, Some("q1")),
        ];
        let full = resolver.resolve(&bookmarks).await.unwrap();
        let detailed = resolver.resolve_detailed(&bookmarks).await.unwrap();
        for (f, d) in full.iter().zip(detailed.iter()) {
            assert_eq!(f.title, d.title);
            assert_eq!(f.description, d.description);
            assert_eq!(f.reference, d.reference);
            assert_eq!(f.slug, d.slug);
        }
    }

    #[tokio::test]
    async fn test_ordering_is_caller_supplied_not_resorted() {
        let resolver = Resolver::new(seeded_store());
        let base = Utc::now();
        let mut bookmarks = vec![
            bookmark("newer", ContentType::Verse, Some("v1")),
            bookmark("older", ContentType::Verse, Some("v1")),
        ];
        bookmarks[0].created_at = base;
        bookmarks[1].created_at = base - Duration::hours(1);

        // Deliberately pass oldest-first: the pipeline must not re-sort.
        bookmarks.reverse();
        let out = resolver.resolve(&bookmarks).await.unwrap();
        assert_eq!(
            out.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec!["older", "newer"]
        );
    }
}
