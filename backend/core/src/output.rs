//! Output records produced by the resolution pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    Author, BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Commentary,
    Quote, StrongsLexiconEntry,
};
use crate::types::{Bookmark, ContentType};

/// The resolved sub-entity embedded in a full formatted bookmark.
///
/// Externally tagged, so serialization yields a single type-named slot
/// (`{"commentary": {...}}`) flattened into the output record. Exactly one
/// slot per record, matching `content_type`, holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolvedEntity {
    Commentary(Commentary),
    Quote(Quote),
    Verse(BibleVerse),
    VerseVersion(BibleVerseVersion),
    BookOverview(BibleBookOverview),
    Takeaway(BibleVerseTakeaway),
    StrongsEntry(StrongsLexiconEntry),
}

impl ResolvedEntity {
    /// The content type this entity satisfies.
    pub fn content_type(&self) -> ContentType {
        match self {
            ResolvedEntity::Commentary(_) => ContentType::Commentary,
            ResolvedEntity::Quote(_) => ContentType::BookHighlight,
            ResolvedEntity::Verse(_) => ContentType::Verse,
            ResolvedEntity::VerseVersion(_) => ContentType::VerseVersion,
            ResolvedEntity::BookOverview(_) => ContentType::BookOverview,
            ResolvedEntity::Takeaway(_) => ContentType::Takeaway,
            ResolvedEntity::StrongsEntry(_) => ContentType::StrongsConcordance,
        }
    }
}

/// A display-ready bookmark with the resolved entity embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBookmark {
    pub id: String,
    pub user_id: String,
    pub content_type: ContentType,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub author: Option<Author>,
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    // Flattened Option serializes nothing when None, so the basic shape
    // carries no empty slot.
    #[serde(flatten)]
    pub entity: Option<ResolvedEntity>,
}

impl FormattedBookmark {
    /// The degraded shape used when a reference is absent or unresolvable.
    /// The bookmark still appears in the output, with null derived fields.
    pub fn basic(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            user_id: bookmark.user_id.clone(),
            content_type: bookmark.content_type,
            reference_id: bookmark.reference_id.clone(),
            created_at: bookmark.created_at,
            title: None,
            description: None,
            reference: None,
            author: None,
            slug: None,
            tags: Vec::new(),
            entity: None,
        }
    }
}

/// A display-ready bookmark with flattened scalar fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBookmark {
    pub id: String,
    pub user_id: String,
    pub content_type: ContentType,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub author: Option<Author>,
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DetailedBookmark {
    pub fn basic(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            user_id: bookmark.user_id.clone(),
            content_type: bookmark.content_type,
            reference_id: bookmark.reference_id.clone(),
            created_at: bookmark.created_at,
            title: None,
            description: None,
            reference: None,
            author: None,
            slug: None,
            tags: Vec::new(),
        }
    }
}
