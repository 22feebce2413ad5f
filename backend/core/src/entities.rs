//! Entity shapes returned by the entity store.
//!
//! Every display field is optional: upstream rows are sparse and the
//! formatting layer treats any missing field as "absent", never as an error.
//! Collections default to empty so a missing JSON array deserializes cleanly.

use serde::{Deserialize, Serialize};

/// A content author (commentary writers, quoted figures).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A book of the Bible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A chapter within a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub book: Option<Book>,
}

/// A translation's name and abbreviation (e.g. "ESV").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVersion {
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A verse, positioned by chapter/book, with zero or more translations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerse {
    pub id: String,
    #[serde(default)]
    pub verse_number: Option<u32>,
    #[serde(default)]
    pub chapter: Option<Chapter>,
    #[serde(default)]
    pub versions: Vec<BibleVerseVersion>,
}

/// One translation's text for a single verse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerseVersion {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub bible_version: Option<BibleVersion>,
    #[serde(default)]
    pub bible_verse: Option<Box<BibleVerse>>,
}

/// An excerpt of longer-form content (commentary or takeaway body).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Excerpt {
    #[serde(default)]
    pub content: Option<String>,
}

/// A start/end verse pair. `end` equal to (or missing relative to) `start`
/// renders as a single reference; otherwise as a range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRange {
    #[serde(default)]
    pub start: Option<BibleVerse>,
    #[serde(default)]
    pub end: Option<BibleVerse>,
}

/// A commentary entry with its source publication and excerpts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commentary {
    pub id: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<Excerpt>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub verse_reference: Option<VerseRange>,
}

/// A highlighted quotation from a book, optionally anchored to a verse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub bible_verse: Option<BibleVerse>,
}

/// The study overview of an entire book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleBookOverview {
    pub id: String,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub key_themes: Option<String>,
    #[serde(default)]
    pub teaching_highlights: Option<String>,
    #[serde(default)]
    pub unique_elements: Option<String>,
    #[serde(default)]
    pub historical_context: Option<String>,
    #[serde(default)]
    pub cultural_background: Option<String>,
    #[serde(default)]
    pub political_landscape: Option<String>,
    #[serde(default)]
    pub book: Option<Book>,
}

/// A short quotation attached to a takeaway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeawayQuote {
    #[serde(default)]
    pub content: Option<String>,
}

/// A teaching takeaway for a verse range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibleVerseTakeaway {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<Excerpt>,
    #[serde(default)]
    pub quotes: Vec<TakeawayQuote>,
    #[serde(default)]
    pub verse_reference: Option<VerseRange>,
}

/// A Strong's concordance lexicon entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongsLexiconEntry {
    pub id: String,
    #[serde(default)]
    pub strongs_key: Option<String>,
    #[serde(default)]
    pub original_word: Option<String>,
    #[serde(default)]
    pub transliteration: Option<String>,
    #[serde(default)]
    pub strongs_def: Option<String>,
    #[serde(default)]
    pub short_definition: Option<String>,
}
