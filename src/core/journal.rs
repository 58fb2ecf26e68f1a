//! # Journal
//!
//! The authoritative, newest-first collection of entries. Owned by `App` and
//! only mutated from `update()`; everything else reads `entries()`.

use chrono::Utc;
use log::debug;

use crate::core::entry::{Draft, Entry, EntryId};

/// Hands out strictly increasing ids based on the wall clock.
///
/// Two adds in the same millisecond (or a clock that went backwards) still get
/// distinct ids: the next id is `max(now, last + 1)`.
#[derive(Debug, Default)]
pub struct IdSource {
    last: Option<i64>,
}

impl IdSource {
    pub fn next_id(&mut self) -> EntryId {
        self.next_after(Utc::now().timestamp_millis())
    }

    fn next_after(&mut self, now_millis: i64) -> EntryId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        EntryId(id)
    }
}

#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<Entry>,
    ids: IdSource,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest-first view of the collection.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Assigns a fresh id to `draft` and puts the entry at the front.
    pub fn add_entry(&mut self, draft: Draft) -> EntryId {
        let id = self.ids.next_id();
        debug!("Adding entry {} ({})", id, draft.title);
        self.entries.insert(0, Entry::from_draft(id, draft));
        id
    }

    /// Removes the entry with `id`. Returns false (and changes nothing) if absent.
    pub fn delete_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        debug!("Delete entry {}: removed={}", id, removed);
        removed
    }
}
