//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top line with title, model and status
//! - `EntryCard`: one journal entry (a plain `Widget`, drawn inside the list's scroll view)
//! - `Alert`: blocking notification overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `*State` lives in `TuiState`; a transient wrapper is built each
//! frame around `&mut State` plus props:
//! - `EntryFormView` / `EntryFormInput`: the form pane over `EntryFormState`
//! - `EntryList`: scrollable cards over `EntryListState`
//! - `StarRating`: the editable star control over `StarRatingState`
//!
//! Components never touch `App` directly. They edit what they're handed and
//! report anything with domain meaning as an event (`FormEvent`, `ListEvent`)
//! that the event loop turns into an `Action`.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top line)
//! ├── entry_form.rs   (form pane)
//! ├── text_field.rs   (caret handling for form inputs)
//! ├── star_rating.rs  (rating control, display + editable)
//! ├── entry_list.rs   (card list)
//! ├── entry_card.rs   (single card)
//! └── alert.rs        (overlay)
//! ```

mod alert;
pub use alert::Alert;
mod title_bar;
pub use title_bar::TitleBar;

pub mod entry_card;
pub mod entry_form;
pub mod entry_list;
pub mod star_rating;
pub mod text_field;

pub use entry_form::{EntryFormInput, EntryFormState, EntryFormView, FormEvent};
pub use entry_list::{EntryList, EntryListState, ListEvent};
