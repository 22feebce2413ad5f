//! Reference collection: partition a bookmark batch into per-type id lists.

use std::collections::HashSet;

use verseforge_core::{Bookmark, ContentType};

/// Deduplicated reference ids per content type, first-seen order preserved.
/// Later duplicates are dropped, never the earlier occurrence.
#[derive(Debug, Default)]
pub struct ReferenceSets {
    pub commentaries: Vec<String>,
    pub quotes: Vec<String>,
    pub verses: Vec<String>,
    pub verse_versions: Vec<String>,
    pub book_overviews: Vec<String>,
    pub takeaways: Vec<String>,
    pub strongs_entries: Vec<String>,
}

impl ReferenceSets {
    /// One pass over the batch. Bookmarks without a reference id contribute
    /// nothing; they still render later as the basic shape.
    pub fn collect(bookmarks: &[Bookmark]) -> Self {
        let mut sets = Self::default();
        let mut seen: HashSet<(ContentType, &str)> = HashSet::new();
        for bookmark in bookmarks {
            let Some(id) = bookmark.reference_id.as_deref() else {
                continue;
            };
            if !seen.insert((bookmark.content_type, id)) {
                continue;
            }
            let list = match bookmark.content_type {
                ContentType::Commentary => &mut sets.commentaries,
                ContentType::BookHighlight => &mut sets.quotes,
                ContentType::Verse => &mut sets.verses,
                ContentType::VerseVersion => &mut sets.verse_versions,
                ContentType::BookOverview => &mut sets.book_overviews,
                ContentType::Takeaway => &mut sets.takeaways,
                ContentType::StrongsConcordance => &mut sets.strongs_entries,
            };
            list.push(id.to_string());
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bookmark(id: &str, content_type: ContentType, reference_id: Option<&str>) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            user_id: "u1".into(),
            content_type,
            reference_id: reference_id.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_partitions_by_type() {
        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("v1")),
            bookmark("b2", ContentType::Commentary, Some("c1")),
            bookmark("b3", ContentType::Verse, Some("v2")),
        ];
        let sets = ReferenceSets::collect(&bookmarks);
        assert_eq!(sets.verses, vec!["v1", "v2"]);
        assert_eq!(sets.commentaries, vec!["c1"]);
        assert!(sets.quotes.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let bookmarks = vec![
            bookmark("b1", ContentType::Takeaway, Some("t2")),
            bookmark("b2", ContentType::Takeaway, Some("t1")),
            bookmark("b3", ContentType::Takeaway, Some("t2")),
        ];
        let sets = ReferenceSets::collect(&bookmarks);
        assert_eq!(sets.takeaways, vec!["t2", "t1"]);
    }

    #[test]
    fn test_same_id_across_types_is_not_deduped() {
        let bookmarks = vec![
            bookmark("b1", ContentType::Verse, Some("shared")),
            bookmark("b2", ContentType::Takeaway, Some("shared")),
        ];
        let sets = ReferenceSets::collect(&bookmarks);
        assert_eq!(sets.verses, vec!["shared"]);
        assert_eq!(sets.takeaways, vec!["shared"]);
    }

    #[test]
    fn test_missing_reference_ids_are_skipped() {
        let bookmarks = vec![bookmark("b1", ContentType::Verse, None)];
        let sets = ReferenceSets::collect(&bookmarks);
        assert!(sets.verses.is_empty());
    }
}
