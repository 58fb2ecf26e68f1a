//! # Actions
//!
//! Everything that can happen in cinelog becomes an `Action`.
//! User presses Ctrl+S? That's `Action::SubmitForm`.
//! The assist request finishes? That's `Action::AssistFinished { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` describing any I/O the adapter must
//! start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::assist::AssistText;
use crate::core::entry::{EntryId, Rating};
use crate::core::form::{AssistTicket, PosterTicket};
use crate::core::poster::PosterError;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    Quit,
    /// Validate the form and, if valid, add the entry.
    SubmitForm,
    /// Ask for review questions about the current title.
    RequestAssist,
    AssistFinished { generation: u64, text: AssistText },
    /// Read the poster file named in the form.
    LoadPoster,
    PosterLoaded {
        generation: u64,
        result: Result<String, PosterError>,
    },
    SetRating(Rating),
    DeleteEntry(EntryId),
    DismissAlert,
}

/// I/O the adapter should perform after an update.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnAssist(AssistTicket),
    ReadPoster(PosterTicket),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::SubmitForm => {
            match app.form.submit() {
                Ok(draft) => {
                    let id = app.journal.add_entry(draft);
                    info!("Entry {} added ({} total)", id, app.journal.len());
                    app.status_message = app.strings().entry_added.to_string();
                }
                Err(e) => {
                    info!("Submission rejected: {}", e);
                    app.alert = Some(e.message(app.strings()).to_string());
                }
            }
            Effect::None
        }
        Action::RequestAssist => {
            let strings = app.strings();
            match app.form.begin_assist(strings) {
                Some(ticket) => Effect::SpawnAssist(ticket),
                None => Effect::None,
            }
        }
        Action::AssistFinished { generation, text } => {
            if text.is_fallback() {
                debug!("Assist returned fallback text");
            }
            app.form.finish_assist(generation, text);
            Effect::None
        }
        Action::LoadPoster => match app.form.begin_poster_load() {
            Some(ticket) => Effect::ReadPoster(ticket),
            None => Effect::None,
        },
        Action::PosterLoaded { generation, result } => {
            match result {
                Ok(data_uri) => {
                    if app.form.finish_poster_load(generation, data_uri) {
                        app.status_message = app.strings().poster_loaded.to_string();
                    }
                }
                Err(e) => {
                    warn!("Poster read failed: {}", e);
                    if generation == app.form.generation() {
                        app.status_message = format!("{}: {}", app.strings().poster_failed, e);
                    }
                }
            }
            Effect::None
        }
        Action::SetRating(rating) => {
            app.form.rating = rating;
            Effect::None
        }
        Action::DeleteEntry(id) => {
            if app.journal.delete_entry(id) {
                app.status_message = app.strings().entry_deleted.to_string();
            }
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
    }
}
