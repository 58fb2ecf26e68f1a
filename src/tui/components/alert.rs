//! Blocking notification drawn over the whole screen. While it is shown the
//! event loop swallows everything except Enter/Esc, which dismiss it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const MAX_WIDTH: u16 = 60;

pub struct Alert<'a> {
    pub message: &'a str,
    /// Localized "Enter / Esc" hint on the bottom border.
    pub dismiss_hint: &'a str,
}

impl<'a> Alert<'a> {
    pub fn new(message: &'a str, dismiss_hint: &'a str) -> Self {
        Self {
            message,
            dismiss_hint,
        }
    }

    /// Rows needed for the message at `width` (borders, padding and hint included).
    fn height_for(&self, width: u16) -> u16 {
        let text_width = width.saturating_sub(4).max(1) as usize;
        let lines = textwrap::wrap(self.message, text_width).len().max(1);
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(4)
    }
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
        let height = self.height_for(width).min(area.height);
        let overlay = centered_rect(width, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(" ! ")
            .title_bottom(Line::from(format!(" {} ", self.dismiss_hint)).centered())
            .padding(Padding::new(1, 1, 1, 0));
        let body = Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// A `width` x `height` rect centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
