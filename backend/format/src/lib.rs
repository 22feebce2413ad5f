//! Pure formatting helpers used by the bookmark resolver.
//!
//! No I/O anywhere in this crate. Absence is always signaled by `None`,
//! never by panicking or erroring.

pub mod references;
pub mod text;

pub use references::{range_reference, single_verse_reference, verse_description};
pub use text::{first_non_empty, normalize_text, strip_html};
