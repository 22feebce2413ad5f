//! Type dispatch: apply each content type's formatting contract.

use verseforge_core::{
    Author, BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, Bookmark,
    Commentary, ContentType, Quote, ResolvedEntity, StrongsLexiconEntry,
};
use verseforge_format::{first_non_empty, range_reference, single_verse_reference, strip_html,
    verse_description};

use crate::fetch::EntityMaps;

/// The derived scalar fields shared by both output variants.
#[derive(Debug, Default)]
pub struct ResolvedFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub author: Option<Author>,
    pub slug: Option<String>,
}

/// Borrowed view of a resolved entity, one variant per content type.
pub enum EntityRef<'a> {
    Commentary(&'a Commentary),
    Quote(&'a Quote),
    Verse(&'a BibleVerse),
    VerseVersion(&'a BibleVerseVersion),
    BookOverview(&'a BibleBookOverview),
    Takeaway(&'a BibleVerseTakeaway),
    StrongsEntry(&'a StrongsLexiconEntry),
}

impl EntityRef<'_> {
    /// Clone into the owned embedding used by the full output variant.
    pub fn to_resolved(&self) -> ResolvedEntity {
        match self {
            EntityRef::Commentary(e) => ResolvedEntity::Commentary((*e).clone()),
            EntityRef::Quote(e) => ResolvedEntity::Quote((*e).clone()),
            EntityRef::Verse(e) => ResolvedEntity::Verse((*e).clone()),
            EntityRef::VerseVersion(e) => ResolvedEntity::VerseVersion((*e).clone()),
            EntityRef::BookOverview(e) => ResolvedEntity::BookOverview((*e).clone()),
            EntityRef::Takeaway(e) => ResolvedEntity::Takeaway((*e).clone()),
            EntityRef::StrongsEntry(e) => ResolvedEntity::StrongsEntry((*e).clone()),
        }
    }
}

/// Look up a bookmark's entity in the matching map.
///
/// `None` on a missing reference id or a lookup miss; both degrade to the
/// basic shape, neither is an error.
pub fn lookup<'a>(bookmark: &Bookmark, maps: &'a EntityMaps) -> Option<EntityRef<'a>> {
    let id = bookmark.reference_id.as_deref()?;
    match bookmark.content_type {
        ContentType::Commentary => maps.commentaries.get(id).map(EntityRef::Commentary),
        ContentType::BookHighlight => maps.quotes.get(id).map(EntityRef::Quote),
        ContentType::Verse => maps.verses.get(id).map(EntityRef::Verse),
        ContentType::VerseVersion => maps.verse_versions.get(id).map(EntityRef::VerseVersion),
        ContentType::BookOverview => maps.book_overviews.get(id).map(EntityRef::BookOverview),
        ContentType::Takeaway => maps.takeaways.get(id).map(EntityRef::Takeaway),
        ContentType::StrongsConcordance => {
            maps.strongs_entries.get(id).map(EntityRef::StrongsEntry)
        }
    }
}

/// Apply the per-type formatting contract. Exactly one branch runs.
pub fn format_fields(entity: &EntityRef<'_>) -> ResolvedFields {
    match entity {
        EntityRef::Commentary(c) => format_commentary(c),
        EntityRef::Quote(q) => format_quote(q),
        EntityRef::Verse(v) => format_verse(v),
        EntityRef::VerseVersion(vv) => format_verse_version(vv),
        EntityRef::BookOverview(o) => format_book_overview(o),
        EntityRef::Takeaway(t) => format_takeaway(t),
        EntityRef::StrongsEntry(s) => format_strongs_entry(s),
    }
}

fn format_commentary(c: &Commentary) -> ResolvedFields {
    let range = c.verse_reference.as_ref();
    ResolvedFields {
        title: c.source.clone(),
        description: c
            .excerpts
            .first()
            .and_then(|e| e.content.as_deref())
            .map(strip_html),
        reference: range_reference(
            range.and_then(|r| r.start.as_ref()),
            range.and_then(|r| r.end.as_ref()),
        ),
        author: c.author.clone(),
        slug: c.slug.clone(),
    }
}

fn format_quote(q: &Quote) -> ResolvedFields {
    ResolvedFields {
        title: Some(
            q.author
                .as_ref()
                .and_then(|a| a.name.clone())
                .unwrap_or_else(|| "Book Highlight".to_string()),
        ),
        // Quote bodies are stored as plain text; no stripping.
        description: q.content.clone(),
        reference: q.bible_verse.as_ref().and_then(single_verse_reference),
        author: q.author.clone(),
        slug: q.slug.clone(),
    }
}

fn format_verse(v: &BibleVerse) -> ResolvedFields {
    let reference = single_verse_reference(v);
    ResolvedFields {
        title: reference.clone(),
        description: verse_description(v),
        reference,
        author: None,
        slug: v
            .chapter
            .as_ref()
            .and_then(|ch| ch.book.as_ref())
            .and_then(|b| b.slug.clone()),
    }
}

fn format_verse_version(vv: &BibleVerseVersion) -> ResolvedFields {
    let label = vv
        .bible_version
        .as_ref()
        .and_then(|v| v.abbreviation.clone().or_else(|| v.name.clone()));
    let reference = vv
        .bible_verse
        .as_deref()
        .and_then(single_verse_reference);
    let title = match (&label, &reference) {
        (Some(label), Some(reference)) => Some(format!("{label} \u{2013} {reference}")),
        (Some(label), None) => Some(label.clone()),
        (None, Some(reference)) => Some(reference.clone()),
        (None, None) => None,
    };
    ResolvedFields {
        title,
        description: vv.content.clone(),
        reference,
        author: None,
        slug: vv
            .bible_verse
            .as_deref()
            .and_then(|v| v.chapter.as_ref())
            .and_then(|ch| ch.book.as_ref())
            .and_then(|b| b.slug.clone()),
    }
}

fn format_book_overview(o: &BibleBookOverview) -> ResolvedFields {
    // The seven-field order below is the display priority chain.
    let description = first_non_empty([
        o.objective.as_deref(),
        o.key_themes.as_deref(),
        o.teaching_highlights.as_deref(),
        o.unique_elements.as_deref(),
        o.historical_context.as_deref(),
        o.cultural_background.as_deref(),
        o.political_landscape.as_deref(),
    ]);
    let book_name = o.book.as_ref().and_then(|b| b.name.clone());
    ResolvedFields {
        title: Some(book_name.clone().unwrap_or_else(|| "Book Overview".to_string())),
        description,
        reference: book_name,
        author: None,
        slug: o.book.as_ref().and_then(|b| b.slug.clone()),
    }
}

fn format_takeaway(t: &BibleVerseTakeaway) -> ResolvedFields {
    let range = t.verse_reference.as_ref();
    let reference = range_reference(
        range.and_then(|r| r.start.as_ref()),
        range.and_then(|r| r.end.as_ref()),
    );
    let excerpt = t
        .excerpts
        .first()
        .and_then(|e| e.content.as_deref())
        .map(strip_html)
        .filter(|s| !s.is_empty());
    let description = excerpt.or_else(|| {
        t.quotes
            .first()
            .and_then(|q| q.content.as_deref())
            .map(strip_html)
    });
    ResolvedFields {
        title: Some(reference.clone().unwrap_or_else(|| "Takeaway".to_string())),
        description,
        reference,
        author: None,
        slug: t.slug.clone(),
    }
}

fn format_strongs_entry(s: &StrongsLexiconEntry) -> ResolvedFields {
    ResolvedFields {
        title: Some(
            s.strongs_key
                .clone()
                .or_else(|| s.original_word.clone())
                .unwrap_or_else(|| "Strongs Entry".to_string()),
        ),
        description: s.strongs_def.clone().or_else(|| s.short_definition.clone()),
        reference: s.transliteration.clone().or_else(|| s.original_word.clone()),
        author: None,
        slug: s.strongs_key.clone(),
    }
}
