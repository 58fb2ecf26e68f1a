//! # Entry Form State
//!
//! The draft being typed plus the form's transient state (poster preview,
//! assist loading flag, last assist text). No I/O happens here: starting an
//! assist request or a poster read hands back a ticket, and the adapter runs
//! the work and reports back with `finish_*`.
//!
//! Every ticket carries the form `generation`. Resetting the form bumps it, so
//! a completion that arrives after a reset is recognised as stale and dropped.

use std::fmt;

use chrono::NaiveDate;
use log::{debug, info};

use crate::assist::AssistText;
use crate::core::entry::{Draft, Rating};
use crate::core::locale::Strings;

/// Accepted input format for the watched date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    WatchedDate,
    Genre,
    Rating,
    Review,
    Poster,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::WatchedDate,
        Field::Genre,
        Field::Rating,
        Field::Review,
        Field::Poster,
    ];

    /// Next field in tab order (wraps around)
    pub fn next(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order (wraps around)
    pub fn prev(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Review)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title, watched date or rating is missing.
    MissingRequired,
    /// The watched date is present but not `YYYY-MM-DD`.
    InvalidDate(String),
}

impl ValidationError {
    /// The localized text shown in the blocking alert.
    pub fn message(&self, strings: &Strings) -> &'static str {
        match self {
            ValidationError::MissingRequired => strings.required_fields,
            ValidationError::InvalidDate(_) => strings.invalid_date,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequired => {
                write!(f, "title, watched date and rating are required")
            }
            ValidationError::InvalidDate(raw) => write!(f, "invalid watched date: {raw:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A pending assist request: which title to ask about, under which generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistTicket {
    pub generation: u64,
    pub title: String,
}

/// A pending poster read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterTicket {
    pub generation: u64,
    pub path: String,
}

#[derive(Debug, Default, Clone)]
pub struct EntryForm {
    pub title: String,
    pub watched_date: String,
    pub genre: String,
    pub rating: Rating,
    pub review: String,
    /// Path typed into the poster field (the terminal's file picker).
    pub poster_path: String,
    pub poster: Option<String>,
    pub poster_preview: Option<String>,
    pub assist_loading: bool,
    pub assist_text: String,
    generation: u64,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Text buffer backing a field; `None` for the rating.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::WatchedDate => Some(&self.watched_date),
            Field::Genre => Some(&self.genre),
            Field::Review => Some(&self.review),
            Field::Poster => Some(&self.poster_path),
            Field::Rating => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::WatchedDate => Some(&mut self.watched_date),
            Field::Genre => Some(&mut self.genre),
            Field::Review => Some(&mut self.review),
            Field::Poster => Some(&mut self.poster_path),
            Field::Rating => None,
        }
    }

    /// Checks the required fields and builds a draft without touching the form.
    pub fn validate(&self) -> Result<Draft, ValidationError> {
        let title = self.title.trim();
        let raw_date = self.watched_date.trim();
        if title.is_empty() || raw_date.is_empty() || !self.rating.is_set() {
            return Err(ValidationError::MissingRequired);
        }
        let watched_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw_date.to_string()))?;

        Ok(Draft {
            title: title.to_string(),
            watched_date,
            genre: self.genre.trim().to_string(),
            rating: self.rating,
            review: self.review.clone(),
            poster: self.poster.clone(),
        })
    }

    /// Validates, and on success clears the form and returns the draft.
    /// On failure nothing changes.
    pub fn submit(&mut self) -> Result<Draft, ValidationError> {
        let draft = self.validate()?;
        self.reset();
        Ok(draft)
    }

    /// Back to the initial empty form. Any in-flight assist or poster read
    /// becomes stale.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
        debug!("Form reset (generation {})", self.generation);
    }

    /// Starts an assist request for the current title.
    ///
    /// A blank title shows the "enter a title first" message and produces no
    /// ticket. While a request is loading, new requests are ignored.
    pub fn begin_assist(&mut self, strings: &Strings) -> Option<AssistTicket> {
        if self.assist_loading {
            debug!("Assist already loading, ignoring request");
            return None;
        }
        let title = self.title.trim();
        if title.is_empty() {
            self.assist_text = strings.enter_title_first.to_string();
            return None;
        }
        self.assist_loading = true;
        self.assist_text.clear();
        info!("Assist requested for '{}'", title);
        Some(AssistTicket {
            generation: self.generation,
            title: title.to_string(),
        })
    }

    /// Applies an assist result. Returns false if the ticket was stale.
    pub fn finish_assist(&mut self, generation: u64, text: AssistText) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping stale assist result (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }
        self.assist_text = text.into_text();
        self.assist_loading = false;
        true
    }

    /// Starts reading the poster at the typed path, if any.
    pub fn begin_poster_load(&self) -> Option<PosterTicket> {
        let path = self.poster_path.trim();
        if path.is_empty() {
            return None;
        }
        Some(PosterTicket {
            generation: self.generation,
            path: path.to_string(),
        })
    }

    /// Stores a loaded poster as both the value and the preview.
    /// Returns false if the ticket was stale.
    pub fn finish_poster_load(&mut self, generation: u64, data_uri: String) -> bool {
        if generation != self.generation {
            debug!("Dropping stale poster read (generation {})", generation);
            return false;
        }
        self.poster_preview = Some(data_uri.clone());
        self.poster = Some(data_uri);
        true
    }
}
