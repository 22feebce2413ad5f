pub mod entities;
pub mod error;
pub mod output;
pub mod traits;
pub mod types;

pub use entities::{
    Author, BibleBookOverview, BibleVerse, BibleVerseTakeaway, BibleVerseVersion, BibleVersion,
    Book, Chapter, Commentary, Excerpt, Quote, StrongsLexiconEntry, TakeawayQuote, VerseRange,
};
pub use error::{ResolveError, StoreError};
pub use output::{DetailedBookmark, FormattedBookmark, ResolvedEntity};
pub use traits::{BookmarkStore, EntityStore};
pub use types::{Bookmark, ContentType};
