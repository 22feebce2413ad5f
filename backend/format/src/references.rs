//! Verse reference and description formatters.

use verseforge_core::BibleVerse;

use crate::text::normalize_text;

/// `"{Book} {Chapter}:{Verse}"`, or `None` when book name, chapter number,
/// or verse number is missing.
pub fn single_verse_reference(verse: &BibleVerse) -> Option<String> {
    let chapter = verse.chapter.as_ref()?;
    let book = chapter.book.as_ref()?.name.as_deref()?;
    let chapter_number = chapter.number?;
    let verse_number = verse.verse_number?;
    Some(format!("{book} {chapter_number}:{verse_number}"))
}

/// Range form `"{Book} {Chapter}:{Start}–{End}"` when an end verse exists
/// with a different verse number; otherwise the single-verse form. `None`
/// when the start verse lacks any required field.
pub fn range_reference(start: Option<&BibleVerse>, end: Option<&BibleVerse>) -> Option<String> {
    let start = start?;
    let base = single_verse_reference(start)?;
    if let (Some(end), Some(start_number)) = (end, start.verse_number) {
        if let Some(end_number) = end.verse_number {
            if end_number != start_number {
                return Some(format!("{base}\u{2013}{end_number}"));
            }
        }
    }
    Some(base)
}

/// Join all non-blank translations of a verse into one description.
///
/// Each surviving translation becomes `"{LABEL}: {content}"`, where the label
/// is the version's abbreviation, else its name, else omitted entirely.
/// Segments are normalized and joined with newlines; `None` if none survive.
pub fn verse_description(verse: &BibleVerse) -> Option<String> {
    let mut segments = Vec::new();
    for version in &verse.versions {
        let content = match version.content.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => continue,
        };
        let label = version.bible_version.as_ref().and_then(|v| {
            v.abbreviation
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .or_else(|| v.name.as_deref().filter(|n| !n.trim().is_empty()))
        });
        let segment = match label {
            Some(label) => format!("{}: {}", normalize_text(label), normalize_text(content)),
            None => normalize_text(content),
        };
        segments.push(segment);
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verseforge_core::{BibleVerseVersion, BibleVersion, Book, Chapter};

    fn verse(book: &str, chapter: u32, number: u32) -> BibleVerse {
        BibleVerse {
            id: format!("{book}-{chapter}-{number}"),
            verse_number: Some(number),
            chapter: Some(Chapter {
                number: Some(chapter),
                book: Some(Book {
                    name: Some(book.to_string()),
                    slug: Some(book.to_lowercase()),
                }),
            }),
            versions: Vec::new(),
        }
    }

    #[test]
    fn test_single_reference() {
        assert_eq!(
            single_verse_reference(&verse("John", 3, 16)).as_deref(),
            Some("John 3:16")
        );
    }

    #[test]
    fn test_single_reference_missing_book_name() {
        let mut v = verse("John", 3, 16);
        v.chapter.as_mut().unwrap().book.as_mut().unwrap().name = None;
        assert_eq!(single_verse_reference(&v), None);
    }

    #[test]
    fn test_single_reference_missing_chapter() {
        let mut v = verse("John", 3, 16);
        v.chapter = None;
        assert_eq!(single_verse_reference(&v), None);
    }

    #[test]
    fn test_range_same_verse_collapses_to_single() {
        let start = verse("John", 3, 5);
        let end = verse("John", 3, 5);
        assert_eq!(
            range_reference(Some(&start), Some(&end)).as_deref(),
            Some("John 3:5")
        );
    }

    #[test]
    fn test_range_distinct_verses_uses_en_dash() {
        let start = verse("John", 3, 5);
        let end = verse("John", 3, 7);
        assert_eq!(
            range_reference(Some(&start), Some(&end)).as_deref(),
            Some("John 3:5\u{2013}7")
        );
    }

    #[test]
    fn test_range_without_end_is_single() {
        let start = verse("John", 3, 5);
        assert_eq!(
            range_reference(Some(&start), None).as_deref(),
            Some("John 3:5")
        );
    }

    #[test]
    fn test_range_missing_start_is_none() {
        assert_eq!(range_reference(None, Some(&verse("John", 3, 7))), None);
    }

    fn translation(abbr: Option<&str>, name: Option<&str>, content: &str) -> BibleVerseVersion {
        BibleVerseVersion {
            id: "vv".into(),
            content: Some(content.to_string()),
            bible_version: Some(BibleVersion {
                abbreviation: abbr.map(String::from),
                name: name.map(String::from),
            }),
            bible_verse: None,
        }
    }

    #[test]
    fn test_description_labels_and_joins() {
        let mut v = verse("John", 3, 16);
        v.versions = vec![
            translation(Some("ESV"), Some("English Standard Version"), "For God so loved"),
            translation(None, Some("King James Version"), "For God so loved the world"),
        ];
        assert_eq!(
            verse_description(&v).as_deref(),
            Some("ESV: For God so loved\nKing James Version: For God so loved the world")
        );
    }

    #[test]
    fn test_description_skips_blank_content() {
        let mut v = verse("John", 3, 16);
        v.versions = vec![
            translation(Some("ESV"), None, "   "),
            translation(Some("NIV"), None, "For God so loved"),
        ];
        assert_eq!(verse_description(&v).as_deref(), Some("NIV: For God so loved"));
    }

    #[test]
    fn test_description_unlabeled_translation_keeps_content_only() {
        let mut v = verse("John", 3, 16);
        v.versions = vec![BibleVerseVersion {
            id: "vv".into(),
            content: Some("For God so loved".into()),
            bible_version: None,
            bible_verse: None,
        }];
        assert_eq!(verse_description(&v).as_deref(), Some("For God so loved"));
    }

    #[test]
    fn test_description_empty_when_no_translations_survive() {
        let v = verse("John", 3, 16);
        assert_eq!(verse_description(&v), None);
    }

    #[test]
    fn test_description_normalizes_replacement_chars() {
        let mut v = verse("John", 3, 16);
        v.versions = vec![translation(Some("ESV"), None, "loved\u{FFFD} the world")];
        assert_eq!(verse_description(&v).as_deref(), Some("ESV: loved the world"));
    }
}
