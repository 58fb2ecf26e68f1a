//! # EntryList Component
//!
//! Scrollable column of entry cards, newest first, or the empty-state
//! placeholder when the journal has nothing in it.
//!
//! ## Architecture
//!
//! Same split as the rest of the TUI: `EntryList` is created each frame with
//! the entries as props and wraps `&mut EntryListState`, which persists the
//! scroll offset, the selected card and the card heights measured on the last
//! render (used for keeping the selection in view and for mouse hit testing).
//!
//! The list never changes the journal. Deleting emits `ListEvent::Delete(id)`
//! and the parent turns that into an action.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::entry::{Entry, EntryId};
use crate::core::locale::Strings;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::entry_card::EntryCard;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// `d` or Delete on the selected card
    Delete(EntryId),
    /// Tab / Esc: hand focus back to the form
    FocusForm,
}

/// Scroll and selection state for the entry list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct EntryListState {
    pub scroll_state: ScrollViewState,
    /// Index of the selected card, if any
    pub selected: Option<usize>,
    /// Ids in display order, as of the last sync
    ids: Vec<EntryId>,
    heights: Vec<u16>,
    prefix_heights: Vec<u16>,
    viewport_height: u16,
    /// Where the list was drawn, for mouse hit testing
    area: Option<Rect>,
}

impl EntryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulls the current entry ids and keeps the selection in range.
    pub fn sync(&mut self, entries: &[Entry]) {
        self.ids = entries.iter().map(|e| e.id).collect();
        self.selected = match self.selected {
            _ if self.ids.is_empty() => None,
            Some(idx) => Some(idx.min(self.ids.len() - 1)),
            None => None,
        };
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected.and_then(|idx| self.ids.get(idx).copied())
    }

    fn select_next(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(self.ids.len() - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    fn select_prev(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
        self.scroll_to_selected();
    }

    fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Scroll so the selected card is fully visible (top edge wins if it's
    /// taller than the viewport).
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }
        let top = if idx == 0 { 0 } else { self.prefix_heights[idx - 1] };
        let bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let y = bottom.saturating_sub(self.viewport_height).min(top);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    /// Index of the card under a screen position.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let y = (row - area.y).saturating_add(self.scroll_state.offset().y);
        let idx = self.prefix_heights.partition_point(|&end| end <= y);
        (idx < self.prefix_heights.len()).then_some(idx)
    }
}

/// Running bottom edges of the cards. Saturates at `u16::MAX`, the tallest
/// scroll view ratatui can address.
fn prefix_sums(heights: &[u16]) -> Vec<u16> {
    heights
        .iter()
        .scan(0u16, |acc, &h| {
            *acc = acc.saturating_add(h);
            Some(*acc)
        })
        .collect()
}

impl EventHandler for EntryListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorDown => {
                self.select_next();
                None
            }
            TuiEvent::CursorUp => {
                self.select_prev();
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete => self.selected_id().map(ListEvent::Delete),
            TuiEvent::NextField | TuiEvent::PrevField | TuiEvent::Escape => Some(ListEvent::FocusForm),
            TuiEvent::MouseClick(column, row) => {
                if let Some(idx) = self.card_at(*column, *row) {
                    self.selected = Some(idx);
                }
                None
            }
            _ => None,
        }
    }
}

/// Scrollable list of entry cards.
/// Created fresh each frame with references to state and data.
pub struct EntryList<'a> {
    pub state: &'a mut EntryListState,
    pub entries: &'a [Entry],
    pub strings: &'static Strings,
    /// Whether the list pane has keyboard focus (selection is only drawn then)
    pub focused: bool,
}

impl<'a> EntryList<'a> {
    pub fn new(
        state: &'a mut EntryListState,
        entries: &'a [Entry],
        strings: &'static Strings,
        focused: bool,
    ) -> Self {
        Self {
            state,
            entries,
            strings,
            focused,
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let top_pad = inner.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::raw(""); top_pad as usize];
        lines.push(Line::styled(
            self.strings.empty_list_title,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            self.strings.empty_list_hint,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.entries);
        self.state.area = Some(area);
        self.state.viewport_height = area.height;

        if self.entries.is_empty() {
            self.state.heights.clear();
            self.state.prefix_heights.clear();
            self.render_empty(frame, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.heights = self
            .entries
            .iter()
            .map(|entry| EntryCard::calculate_height(entry, self.strings, content_width))
            .collect();
        self.state.prefix_heights = prefix_sums(&self.state.heights);
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.total_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (i, (entry, &height)) in self.entries.iter().zip(&self.state.heights).enumerate() {
            let is_selected = self.focused && self.state.selected == Some(i);
            let card = EntryCard::new(entry, self.strings, is_selected);
            if y == u16::MAX {
                break;
            }
            scroll_view.render_widget(card, Rect::new(0, y, content_width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::{Draft, Rating};
    use crate::core::journal::Journal;
    use crate::core::locale::Locale;
    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn journal_with(titles: &[&str]) -> Journal {
        let mut journal = Journal::new();
        for title in titles {
            journal.add_entry(Draft {
                title: title.to_string(),
                watched_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                genre: String::new(),
                rating: Rating::new(3),
                review: String::new(),
                poster: None,
            });
        }
        journal
    }

    fn render_list(state: &mut EntryListState, entries: &[Entry], height: u16) -> String {
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                EntryList::new(state, entries, Locale::English.strings(), true).render(f, f.area())
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
    fn test_empty_list_shows_placeholder() {
        let mut state = EntryListState::new();
        let text = render_list(&mut state, &[], 10);
        assert!(text.contains("No movies recorded yet."));
    }

    #[test]
    fn test_cards_render_in_given_order() {
        let journal = journal_with(&["Dune", "Arrival"]);
        let mut state = EntryListState::new();
        let text = render_list(&mut state, journal.entries(), 20);

        let arrival = text.find("Arrival").expect("Arrival rendered");
        let dune = text.find("Dune").expect("Dune rendered");
        assert!(arrival < dune, "newest entry comes first");
        assert!(!text.contains("No movies recorded yet."));
    }

    #[test]
    fn test_selection_moves_and_stops_at_ends() {
        let journal = journal_with(&["A", "B", "C"]);
        let mut state = EntryListState::new();
        state.sync(journal.entries());

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_delete_emits_selected_id() {
        let journal = journal_with(&["Dune", "Arrival"]);
        let mut state = EntryListState::new();
        state.sync(journal.entries());

        assert_eq!(state.handle_event(&TuiEvent::InputChar('d')), None, "nothing selected");

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        let dune_id = journal.entries()[1].id;
        assert_eq!(state.handle_event(&TuiEvent::Delete), Some(ListEvent::Delete(dune_id)));
    }

    #[test]
    fn test_sync_clamps_selection_after_removal() {
        let mut journal = journal_with(&["Dune", "Arrival"]);
        let mut state = EntryListState::new();
        state.sync(journal.entries());
        state.selected = Some(1);

        let last_id = journal.entries()[1].id;
        journal.delete_entry(last_id);
        state.sync(journal.entries());
        assert_eq!(state.selected, Some(0));

        let remaining = journal.entries()[0].id;
        journal.delete_entry(remaining);
        state.sync(journal.entries());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_tab_and_escape_return_focus() {
        let mut state = EntryListState::new();
        assert_eq!(state.handle_event(&TuiEvent::NextField), Some(ListEvent::FocusForm));
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ListEvent::FocusForm));
    }

    #[test]
    fn test_click_selects_card_under_pointer() {
        let journal = journal_with(&["Dune", "Arrival"]);
        let mut state = EntryListState::new();
        render_list(&mut state, journal.entries(), 20);

        // Each card is 5 rows (borders, meta, review, poster)
        state.handle_event(&TuiEvent::MouseClick(3, 6));
        assert_eq!(state.selected, Some(1));
        state.handle_event(&TuiEvent::MouseClick(3, 19));
        assert_eq!(state.selected, Some(1), "click below the cards changes nothing");
    }

    #[test]
    fn test_prefix_sums_saturate_instead_of_overflowing() {
        assert_eq!(prefix_sums(&[5, 5, 4]), vec![5, 10, 14]);
        assert_eq!(
            prefix_sums(&[u16::MAX - 3, 5, 5]),
            vec![u16::MAX - 3, u16::MAX, u16::MAX]
        );
    }

    #[test]
    fn test_scroll_and_hit_test_near_height_limit() {
        let journal = journal_with(&["Dune", "Arrival", "Sicario"]);
        let mut state = EntryListState::new();
        state.sync(journal.entries());
        state.heights = vec![u16::MAX - 2, 10, 10];
        state.prefix_heights = prefix_sums(&state.heights);
        state.viewport_height = 20;
        state.area = Some(Rect::new(0, 0, 50, 20));
        assert_eq!(state.total_height(), u16::MAX);

        state.selected = Some(2);
        state.scroll_to_selected();
        state.clamp_scroll();
        assert_eq!(state.scroll_state.offset().y, u16::MAX - 20);

        // The bottom row maps to the last card the list could place
        assert_eq!(state.card_at(3, 19), Some(1));
    }
}
