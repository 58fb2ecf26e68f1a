//! # EntryForm Component
//!
//! The left pane: one bordered box per field, the assist text box and a key
//! hint line.
//!
//! ```text
//! ╭ Record a new movie ──────────────╮
//! │╭ Title ─────────────────────────╮│
//! ││Dune                            ││
//! │╰────────────────────────────────╯│
//! │  ... date, genre, rating ...     │
//! │╭ Review ────────────────────────╮│
//! ││                                ││
//! │╰────────────────────────────────╯│
//! │╭ Get AI questions (Ctrl+G) ─────╮│
//! │╰────────────────────────────────╯│
//! │╭ Poster image (file path) ──────╮│
//! │╰────────────── image/png · 2 KB ╯│
//! │Ctrl+S Add entry · Tab move · Esc │
//! ╰──────────────────────────────────╯
//! ```
//!
//! ## State Split
//!
//! Field values belong to `core::form::EntryForm` (they are domain state: they
//! get validated and become an entry). `EntryFormState` only holds what the
//! terminal needs on top of that: which field has focus, a caret per text
//! field, the star control's hover, and where things were drawn for mouse
//! hit testing.
//!
//! When the form's generation changes (it was submitted or reset), the view
//! state resets too.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::entry::Rating;
use crate::core::form::{EntryForm, Field};
use crate::core::locale::Strings;
use crate::core::poster::{describe_data_uri, format_size};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::star_rating::{StarRating, StarRatingState};
use crate::tui::components::text_field::{TextCursor, hard_wrap};
use crate::tui::event::TuiEvent;

/// Rows for a bordered single-line field.
const FIELD_HEIGHT: u16 = 3;
/// Rows for the assist box, borders included.
const ASSIST_HEIGHT: u16 = 6;
/// Minimum rows for the review box, borders included.
const REVIEW_MIN_HEIGHT: u16 = 4;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Ctrl+S: validate and add the entry
    Submit,
    /// Ctrl+G: ask for review questions
    RequestAssist,
    /// Enter on the poster field: read the file at the typed path
    LoadPoster,
    /// The star control committed a new rating
    RatingChanged(Rating),
    /// Esc: hand focus to the list pane
    FocusList,
}

/// Persistent view state for the form pane.
pub struct EntryFormState {
    pub focus: Field,
    cursors: HashMap<Field, TextCursor>,
    pub rating: StarRatingState,
    /// Field boxes from the last render, for click-to-focus
    field_areas: Vec<(Field, Rect)>,
    /// Form generation this state belongs to
    generation: u64,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    pub fn new() -> Self {
        Self {
            focus: Field::Title,
            cursors: HashMap::new(),
            rating: StarRatingState::editable(),
            field_areas: Vec::new(),
            generation: 0,
        }
    }

    fn cursor_mut(&mut self, field: Field) -> &mut TextCursor {
        self.cursors.entry(field).or_default()
    }

    /// Pulls props from the form, resetting if it was cleared since last time.
    fn sync(&mut self, form: &EntryForm) {
        if form.generation() != self.generation {
            self.generation = form.generation();
            self.focus = Field::Title;
            self.cursors.clear();
            self.rating.hover = 0;
        }
        self.rating.rating = form.rating;
    }

    fn field_at(&self, column: u16, row: u16) -> Option<Field> {
        self.field_areas
            .iter()
            .find(|(_, area)| area.contains(Position::new(column, row)))
            .map(|(field, _)| *field)
    }
}

/// Transient wrapper that routes terminal events into the form.
pub struct EntryFormInput<'a> {
    pub state: &'a mut EntryFormState,
    pub form: &'a mut EntryForm,
}

impl<'a> EntryFormInput<'a> {
    pub fn new(state: &'a mut EntryFormState, form: &'a mut EntryForm) -> Self {
        Self { state, form }
    }
}

impl EventHandler for EntryFormInput<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        let state = &mut *self.state;
        state.sync(self.form);

        // Bindings that work regardless of the focused field
        match event {
            TuiEvent::SaveEntry => return Some(FormEvent::Submit),
            TuiEvent::RequestAssist => return Some(FormEvent::RequestAssist),
            TuiEvent::Escape => return Some(FormEvent::FocusList),
            TuiEvent::NextField => {
                state.focus = state.focus.next();
                return None;
            }
            TuiEvent::PrevField => {
                state.focus = state.focus.prev();
                return None;
            }
            TuiEvent::MouseMove(..) => {
                state.rating.handle_event(event);
                return None;
            }
            TuiEvent::MouseClick(column, row) => {
                if let Some(rating) = state.rating.handle_event(event) {
                    state.focus = Field::Rating;
                    return Some(FormEvent::RatingChanged(rating));
                }
                if let Some(field) = state.field_at(*column, *row) {
                    state.focus = field;
                }
                return None;
            }
            _ => {}
        }

        let field = state.focus;
        if field == Field::Rating {
            return match event {
                TuiEvent::CursorUp => {
                    state.focus = field.prev();
                    None
                }
                TuiEvent::CursorDown => {
                    state.focus = field.next();
                    None
                }
                _ => state.rating.handle_event(event).map(FormEvent::RatingChanged),
            };
        }

        let buffer = self.form.text_mut(field)?;
        let multiline = field.is_multiline();
        let cursor = state.cursor_mut(field);
        match event {
            TuiEvent::Submit if field == Field::Poster => Some(FormEvent::LoadPoster),
            TuiEvent::Submit if multiline => {
                cursor.handle(buffer, &TuiEvent::InputChar('\n'), true);
                None
            }
            TuiEvent::Submit => {
                state.focus = field.next();
                None
            }
            TuiEvent::CursorUp => {
                if !(multiline && cursor.move_line(buffer, true)) {
                    state.focus = field.prev();
                }
                None
            }
            TuiEvent::CursorDown => {
                if !(multiline && cursor.move_line(buffer, false)) {
                    state.focus = field.next();
                }
                None
            }
            _ => {
                cursor.handle(buffer, event, multiline);
                None
            }
        }
    }
}

/// Transient render wrapper for the form pane.
pub struct EntryFormView<'a> {
    pub state: &'a mut EntryFormState,
    pub form: &'a EntryForm,
    pub strings: &'static Strings,
    /// Whether the form pane has keyboard focus
    pub focused: bool,
}

impl<'a> EntryFormView<'a> {
    pub fn new(
        state: &'a mut EntryFormState,
        form: &'a EntryForm,
        strings: &'static Strings,
        focused: bool,
    ) -> Self {
        Self {
            state,
            form,
            strings,
            focused,
        }
    }

    fn field_block(&self, field: Field, label: &str) -> Block<'static> {
        let style = if self.focused && self.state.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(Line::styled(format!(" {label} "), style))
    }

    fn render_text_field(&mut self, frame: &mut Frame, field: Field, block: Block, area: Rect) {
        let form = self.form;
        let text = form.text(field).unwrap_or_default();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.state.field_areas.push((field, area));

        let focused = self.focused && self.state.focus == field;
        let cursor = self.state.cursor_mut(field);
        cursor.clamp(text);

        let offset = cursor.scroll_offset(text, inner.width, inner.height);
        let visible: Vec<Line> = hard_wrap(text, inner.width)
            .into_iter()
            .skip(offset)
            .take(inner.height as usize)
            .map(|line| Line::raw(line.text))
            .collect();
        frame.render_widget(Paragraph::new(visible), inner);

        if focused && inner.width > 0 && inner.height > 0 {
            let (x, y) = cursor.screen_pos(text, inner);
            frame.set_cursor_position((x, y));
        }
    }

    fn render_rating(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.field_block(Field::Rating, self.strings.label_rating);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.state.field_areas.push((Field::Rating, area));
        StarRating::new(&mut self.state.rating).render(frame, inner);
    }

    fn render_assist(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" {} (Ctrl+G) ", self.strings.assist_button);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title);

        let body = if self.form.assist_loading {
            Paragraph::new(self.strings.assist_loading)
                .style(Style::default().add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.form.assist_text.as_str())
        };
        frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
    }

    fn poster_summary(&self) -> Option<String> {
        let preview = self.form.poster_preview.as_deref()?;
        let (mime, size) = describe_data_uri(preview)?;
        Some(format!(" {} · {} ", mime, format_size(size)))
    }
}

impl Component for EntryFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.form);
        self.state.field_areas.clear();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.strings.form_title));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [title, date, genre, rating, review, assist, poster, hint] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(REVIEW_MIN_HEIGHT),
            Constraint::Length(ASSIST_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        let strings = self.strings;
        for (field, label, area) in [
            (Field::Title, strings.label_title, title),
            (Field::WatchedDate, strings.label_watched_date, date),
            (Field::Genre, strings.label_genre, genre),
            (Field::Review, strings.label_review, review),
        ] {
            let block = self.field_block(field, label);
            self.render_text_field(frame, field, block, area);
        }

        self.render_rating(frame, rating);
        self.render_assist(frame, assist);

        let mut poster_block = self.field_block(Field::Poster, strings.label_poster);
        if let Some(summary) = self.poster_summary() {
            poster_block = poster_block
                .title_bottom(Line::styled(summary, Style::default().fg(Color::Green)).right_aligned());
        }
        self.render_text_field(frame, Field::Poster, poster_block, poster);

        let hint_text = format!("Ctrl+S {} · {}", strings.submit_button, strings.form_nav_hint);
        frame.render_widget(
            Paragraph::new(hint_text).style(Style::default().fg(Color::DarkGray)),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::Locale;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn send(state: &mut EntryFormState, form: &mut EntryForm, event: TuiEvent) -> Option<FormEvent> {
        EntryFormInput::new(state, form).handle_event(&event)
    }

    fn type_text(state: &mut EntryFormState, form: &mut EntryForm, text: &str) {
        for c in text.chars() {
            send(state, form, TuiEvent::InputChar(c));
        }
    }

    fn render_text(state: &mut EntryFormState, form: &EntryForm) -> String {
        let backend = TestBackend::new(60, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                EntryFormView::new(state, form, Locale::English.strings(), true).render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();

        type_text(&mut state, &mut form, "Dune");
        send(&mut state, &mut form, TuiEvent::NextField);
        type_text(&mut state, &mut form, "2025-01-01");
        send(&mut state, &mut form, TuiEvent::Submit);
        type_text(&mut state, &mut form, "SF");

        assert_eq!(form.title, "Dune");
        assert_eq!(form.watched_date, "2025-01-01");
        assert_eq!(form.genre, "SF");
        assert_eq!(state.focus, Field::Genre);
    }

    #[test]
    fn test_global_shortcuts() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        assert_eq!(send(&mut state, &mut form, TuiEvent::SaveEntry), Some(FormEvent::Submit));
        assert_eq!(
            send(&mut state, &mut form, TuiEvent::RequestAssist),
            Some(FormEvent::RequestAssist)
        );
        assert_eq!(send(&mut state, &mut form, TuiEvent::Escape), Some(FormEvent::FocusList));
    }

    #[test]
    fn test_rating_field_digit_emits_change() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        state.focus = Field::Rating;

        assert_eq!(
            send(&mut state, &mut form, TuiEvent::InputChar('4')),
            Some(FormEvent::RatingChanged(Rating::new(4)))
        );
        // The form value only changes through the reducer
        assert_eq!(form.rating, Rating::default());
    }

    #[test]
    fn test_review_enter_inserts_newline_and_up_moves_line() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        state.focus = Field::Review;

        type_text(&mut state, &mut form, "Great");
        send(&mut state, &mut form, TuiEvent::Submit);
        type_text(&mut state, &mut form, "film");
        assert_eq!(form.review, "Great\nfilm");

        send(&mut state, &mut form, TuiEvent::CursorUp);
        assert_eq!(state.focus, Field::Review, "first Up stays inside the review");
        send(&mut state, &mut form, TuiEvent::CursorUp);
        assert_eq!(state.focus, Field::Rating);
    }

    #[test]
    fn test_enter_on_poster_requests_load() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        state.focus = Field::Poster;
        type_text(&mut state, &mut form, "/tmp/dune.png");
        assert_eq!(form.poster_path, "/tmp/dune.png");
        assert_eq!(send(&mut state, &mut form, TuiEvent::Submit), Some(FormEvent::LoadPoster));
    }

    #[test]
    fn test_form_reset_resets_view_state() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        state.focus = Field::Genre;
        type_text(&mut state, &mut form, "Drama");

        form.reset();
        send(&mut state, &mut form, TuiEvent::InputChar('x'));

        assert_eq!(state.focus, Field::Title);
        assert_eq!(form.title, "x");
        assert!(form.genre.is_empty());
    }

    #[test]
    fn test_render_shows_labels_and_values() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        form.title = "Arrival".to_string();
        form.assist_text = "What did the heptapods want?".to_string();

        let text = render_text(&mut state, &form);
        assert!(text.contains("Record a new movie"));
        assert!(text.contains("Title"));
        assert!(text.contains("Watched on (YYYY-MM-DD)"));
        assert!(text.contains("Arrival"));
        assert!(text.contains("Get AI questions"));
        assert!(text.contains("heptapods"));
    }

    #[test]
    fn test_render_shows_loading_label() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        form.assist_loading = true;
        assert!(render_text(&mut state, &form).contains("Generating..."));
    }

    #[test]
    fn test_render_shows_poster_summary() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        form.poster_preview = Some("data:image/png;base64,aGk=".to_string());
        assert!(render_text(&mut state, &form).contains("image/png · 2 B"));
    }

    #[test]
    fn test_click_focuses_field_after_render() {
        let mut state = EntryFormState::new();
        let mut form = EntryForm::new();
        render_text(&mut state, &form);

        // Genre is the third field box: outer border row 0, then 3 rows per field
        send(&mut state, &mut form, TuiEvent::MouseClick(5, 8));
        assert_eq!(state.focus, Field::Genre);
    }
}
