//! # Application State
//!
//! Core business state for cinelog. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── journal: Journal              // the entries, newest first
//! ├── form: EntryForm               // draft being typed + assist/poster state
//! ├── assist: Arc<AssistClient>     // review-question generator
//! ├── locale: Locale                // UI language
//! ├── status_message: String        // status bar text
//! └── alert: Option<String>         // blocking notification
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::assist::AssistClient;
use crate::core::form::EntryForm;
use crate::core::journal::Journal;
use crate::core::locale::{Locale, Strings};

pub struct App {
    pub journal: Journal,
    pub form: EntryForm,
    pub assist: Arc<AssistClient>,
    pub locale: Locale,
    pub status_message: String,
    /// Blocking notification (validation errors). Input is ignored until dismissed.
    pub alert: Option<String>,
}

impl App {
    pub fn new(assist: Arc<AssistClient>, locale: Locale) -> Self {
        Self {
            journal: Journal::new(),
            form: EntryForm::new(),
            assist,
            locale,
            status_message: String::new(),
            alert: None,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    pub fn model_name(&self) -> &str {
        self.assist.model()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.journal.is_empty());
        assert!(app.alert.is_none());
        assert!(app.status_message.is_empty());
        assert_eq!(app.model_name(), "test-model");
    }
}
