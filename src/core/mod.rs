//! # Core Application Logic
//!
//! This module contains cinelog's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Journal (entries)    │
//!                    │  • EntryForm (draft)    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. I/O via Effect. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`journal`]: The newest-first entry collection and id assignment
//! - [`form`]: Draft state, validation, assist/poster tickets
//! - [`config`]: Config file + env + CLI resolution

pub mod action;
pub mod config;
pub mod entry;
pub mod form;
pub mod journal;
pub mod locale;
pub mod poster;
pub mod state;
