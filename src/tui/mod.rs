//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates terminal events into `core::Action` values and performs the
//! `Effect`s the reducer hands back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─► TuiEvent ─► focused pane ─► FormEvent / ListEvent ─► Action ─► update()
//!                                                                             │
//!            Action ◄── mpsc ◄── tokio task (assist / poster read) ◄── Effect ┘
//! ```
//!
//! Background tasks report back over a `std::sync::mpsc` channel drained on
//! every loop iteration. Their actions carry the form generation they were
//! started under, so the reducer can drop results that arrive after a reset.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and only
//! redraws after an event or a background completion.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::assist::{AssistClient, GeminiGenerator};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::{AssistTicket, PosterTicket};
use crate::core::poster::load_poster;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EntryFormInput, EntryFormState, EntryListState, FormEvent, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Form,
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Pane,
    pub form: EntryFormState,
    pub list: EntryListState,
    /// Pane rects from the last draw, for mouse routing
    pub form_area: Rect,
    pub list_area: Rect,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Pane::Form, // User expects to type immediately
            form: EntryFormState::new(),
            list: EntryListState::new(),
            form_area: Rect::default(),
            list_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Builds the assist client for a resolved config.
pub fn build_assist(config: &ResolvedConfig) -> Arc<AssistClient> {
    let generator = GeminiGenerator::new(config.api_key.clone(), Some(config.base_url.clone()));
    Arc::new(AssistClient::new(
        Arc::new(generator),
        config.model_name.clone(),
        config.locale,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_assist(&config), config.locale);
    let mut tui = TuiState::new();
    info!(
        "Starting TUI (locale {:?}, model {}, generator {})",
        app.locale,
        app.model_name(),
        app.assist.generator_name()
    );

    let mut terminal = ratatui::init();
    // Guard drops (terminal modes off) before the terminal is restored
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Exiting with {} entries in the journal", app.journal.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(app, tui, event);
            if perform(effect, app, &tx) {
                return Ok(());
            }
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            if perform(effect, app, &tx) {
                return Ok(());
            }
        }
    }
}

/// Routes one terminal event and runs the resulting action through the reducer.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // The alert is modal: only Enter/Esc get through, to dismiss it
    if app.alert.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => update(app, Action::DismissAlert),
            _ => Effect::None,
        };
    }

    match event {
        TuiEvent::Resize => return Effect::None,
        // Form shortcuts work from either pane
        TuiEvent::SaveEntry => return update(app, Action::SubmitForm),
        TuiEvent::RequestAssist => return update(app, Action::RequestAssist),
        // Wheel scrolling always goes to the list
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.list.handle_event(&event);
            return Effect::None;
        }
        // Hover only matters to the star control
        TuiEvent::MouseMove(..) => {
            EntryFormInput::new(&mut tui.form, &mut app.form).handle_event(&event);
            return Effect::None;
        }
        // Clicks focus the pane under the pointer
        TuiEvent::MouseClick(column, row) => {
            let pos = Position::new(column, row);
            if tui.list_area.contains(pos) {
                tui.focus = Pane::List;
            } else if tui.form_area.contains(pos) {
                tui.focus = Pane::Form;
            }
        }
        _ => {}
    }

    match tui.focus {
        Pane::Form => {
            let form_event = EntryFormInput::new(&mut tui.form, &mut app.form).handle_event(&event);
            match form_event {
                Some(FormEvent::Submit) => update(app, Action::SubmitForm),
                Some(FormEvent::RequestAssist) => update(app, Action::RequestAssist),
                Some(FormEvent::LoadPoster) => update(app, Action::LoadPoster),
                Some(FormEvent::RatingChanged(rating)) => update(app, Action::SetRating(rating)),
                Some(FormEvent::FocusList) => {
                    tui.focus = Pane::List;
                    Effect::None
                }
                None => Effect::None,
            }
        }
        Pane::List => {
            tui.list.sync(app.journal.entries());
            match tui.list.handle_event(&event) {
                Some(ListEvent::Delete(id)) => {
                    let effect = update(app, Action::DeleteEntry(id));
                    tui.list.sync(app.journal.entries());
                    effect
                }
                Some(ListEvent::FocusForm) => {
                    tui.focus = Pane::Form;
                    Effect::None
                }
                None => Effect::None,
            }
        }
    }
}

/// Performs an effect. Returns true when the loop should exit.
fn perform(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnAssist(ticket) => {
            spawn_assist(app.assist.clone(), ticket, tx.clone());
            false
        }
        Effect::ReadPoster(ticket) => {
            spawn_poster_read(ticket, tx.clone());
            false
        }
    }
}

fn spawn_assist(assist: Arc<AssistClient>, ticket: AssistTicket, tx: mpsc::Sender<Action>) {
    info!("Spawning assist request for '{}'", ticket.title);
    tokio::spawn(async move {
        let text = assist.generate_review_questions(&ticket.title).await;
        let action = Action::AssistFinished {
            generation: ticket.generation,
            text,
        };
        if tx.send(action).is_err() {
            warn!("Failed to send assist result: receiver dropped");
        }
    });
}

fn spawn_poster_read(ticket: PosterTicket, tx: mpsc::Sender<Action>) {
    info!("Spawning poster read: {}", ticket.path);
    tokio::spawn(async move {
        let result = load_poster(&PathBuf::from(&ticket.path)).await;
        let action = Action::PosterLoaded {
            generation: ticket.generation,
            result,
        };
        if tx.send(action).is_err() {
            warn!("Failed to send poster result: receiver dropped");
        }
    });
}
