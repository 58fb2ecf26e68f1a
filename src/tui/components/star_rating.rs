//! # StarRating Component
//!
//! A row of five stars. In display mode it just shows `rating` filled stars.
//! In editable mode it keeps a transient hover value: pointing at star k
//! previews k, leaving the control clears the preview, and clicking (or
//! pressing a digit) commits.
//!
//! ```text
//! ★★★☆☆   rating 3, no hover
//! ★★★★★   hover 5 previewed over a committed 3
//! ```
//!
//! There are no half stars, and once a rating is set it can't be cleared back
//! to zero; only another star can be chosen.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::entry::Rating;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";
/// Columns per star: glyph plus a gap.
const STAR_CELL_WIDTH: u16 = 2;

/// Five stars with the first `filled` highlighted.
pub fn star_line(filled: u8) -> Line<'static> {
    let spans: Vec<Span> = (1..=Rating::MAX)
        .map(|star| {
            if star <= filled {
                Span::styled(format!("{STAR_FILLED} "), Style::default().fg(Color::Yellow))
            } else {
                Span::styled(format!("{STAR_EMPTY} "), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

/// Persistent state for an editable rating control.
#[derive(Debug, Default)]
pub struct StarRatingState {
    /// Committed rating (prop, synced from the form before each event/render)
    pub rating: Rating,
    /// Transient preview; 0 = none
    pub hover: u8,
    pub editable: bool,
    /// Where the stars were last drawn, for mouse hit testing
    area: Option<Rect>,
}

impl StarRatingState {
    pub fn editable() -> Self {
        Self {
            editable: true,
            ..Self::default()
        }
    }

    pub fn hover(&mut self, star: u8) {
        if self.editable && (1..=Rating::MAX).contains(&star) {
            self.hover = star;
        }
    }

    pub fn leave(&mut self) {
        if self.editable {
            self.hover = 0;
        }
    }

    /// Commits star `star`, returning the new rating for the parent.
    pub fn click(&mut self, star: u8) -> Option<Rating> {
        if !self.editable || !(1..=Rating::MAX).contains(&star) {
            return None;
        }
        self.rating = Rating::new(star);
        Some(self.rating)
    }

    /// Stars to draw filled: the hover preview if any, else the committed rating.
    pub fn displayed(&self) -> u8 {
        if self.hover != 0 {
            self.hover
        } else {
            self.rating.value()
        }
    }

    /// Which star (1-based) is under a screen position, if any.
    pub fn star_at(&self, column: u16, row: u16) -> Option<u8> {
        let area = self.area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let star = (column - area.x) / STAR_CELL_WIDTH + 1;
        (star <= Rating::MAX as u16).then_some(star as u8)
    }
}

impl EventHandler for StarRatingState {
    type Event = Rating;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Rating> {
        if !self.editable {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                let star = c.to_digit(10).unwrap_or(0) as u8;
                self.hover = 0;
                self.click(star)
            }
            TuiEvent::CursorLeft => {
                self.hover = self.displayed().saturating_sub(1).max(1);
                None
            }
            TuiEvent::CursorRight => {
                self.hover = (self.displayed() + 1).min(Rating::MAX);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                let star = self.hover;
                self.hover = 0;
                self.click(star)
            }
            TuiEvent::MouseMove(column, row) => {
                match self.star_at(*column, *row) {
                    Some(star) => self.hover(star),
                    None => self.leave(),
                }
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let star = self.star_at(*column, *row)?;
                self.click(star)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct StarRating<'a> {
    pub state: &'a mut StarRatingState,
}

impl<'a> StarRating<'a> {
    pub fn new(state: &'a mut StarRatingState) -> Self {
        Self { state }
    }
}

impl Component for StarRating<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (STAR_CELL_WIDTH * Rating::MAX as u16).min(area.width);
        let stars_area = Rect::new(area.x, area.y, width, area.height.min(1));
        self.state.area = Some(stars_area);
        frame.render_widget(Paragraph::new(star_line(self.state.displayed())), stars_area);
    }
}
