//! # Journal Entries
//!
//! The only domain entity. An `Entry` is a `Draft` plus the id the journal
//! assigned to it when it was added.
//!
//! ```text
//! Entry
//! ├── id: EntryId              // assigned by Journal, never reused
//! ├── title: String            // required, non-blank
//! ├── watched_date: NaiveDate  // required
//! ├── genre: String            // optional, "" when unset
//! ├── rating: Rating           // 0..=5, 0 = unset
//! ├── review: String           // optional
//! └── poster: Option<String>   // data URI, placeholder URL when None
//! ```

use std::fmt;

use chrono::NaiveDate;

/// Unique identifier of a journal entry (Unix millis at creation, bumped on collision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating in `0..=5`. Zero means "not rated yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Builds a rating, clamping anything above `MAX`.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_set(self) -> bool {
        self.0 > 0
    }
}

/// Entry fields before the journal assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub watched_date: NaiveDate,
    pub genre: String,
    pub rating: Rating,
    pub review: String,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub watched_date: NaiveDate,
    pub genre: String,
    pub rating: Rating,
    pub review: String,
    pub poster: Option<String>,
}

impl Entry {
    pub fn from_draft(id: EntryId, draft: Draft) -> Self {
        Self {
            id,
            title: draft.title,
            watched_date: draft.watched_date,
            genre: draft.genre,
            rating: draft.rating,
            review: draft.review,
            poster: draft.poster,
        }
    }

    /// The poster to show: the uploaded data URI, or a placeholder seeded by id.
    pub fn poster_source(&self) -> String {
        match &self.poster {
            Some(uri) => uri.clone(),
            None => placeholder_poster_url(self.id),
        }
    }
}

/// Deterministic placeholder image for entries without an uploaded poster.
pub fn placeholder_poster_url(id: EntryId) -> String {
    format!("https://picsum.photos/seed/{}/400/600", id.0)
}
