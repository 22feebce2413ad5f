use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The seven content categories a bookmark can point at.
///
/// Each variant resolves against its own entity table; a bookmark carries
/// exactly one of these plus an opaque reference id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Commentary,
    BookHighlight,
    Verse,
    VerseVersion,
    BookOverview,
    Takeaway,
    StrongsConcordance,
}

impl ContentType {
    /// All variants, in stable order. Useful for iterating fetch plans.
    pub const ALL: [ContentType; 7] = [
        ContentType::Commentary,
        ContentType::BookHighlight,
        ContentType::Verse,
        ContentType::VerseVersion,
        ContentType::BookOverview,
        ContentType::Takeaway,
        ContentType::StrongsConcordance,
    ];

    /// The wire tag used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Commentary => "commentary",
            ContentType::BookHighlight => "bookHighlight",
            ContentType::Verse => "verse",
            ContentType::VerseVersion => "verseVersion",
            ContentType::BookOverview => "bookOverview",
            ContentType::Takeaway => "takeaway",
            ContentType::StrongsConcordance => "strongsConcordance",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's saved pointer to content. Carries no display text of its own;
/// titles and descriptions are derived at read time by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub content_type: ContentType,
    /// Id of the referenced entity. `None` means the bookmark is unresolved
    /// by construction and renders as the basic shape.
    #[serde(default)]
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_wire_tags_round_trip() {
        for ct in ContentType::ALL {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
            let back: ContentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ct);
        }
    }

    #[test]
    fn test_bookmark_deserializes_without_reference_id() {
        let json = r#"{
            "id": "b1",
            "userId": "u1",
            "contentType": "verse",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.content_type, ContentType::Verse);
        assert!(bookmark.reference_id.is_none());
    }
}
