use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::entry::Entry;
use crate::core::locale::Strings;
use crate::core::poster::{describe_data_uri, format_size};
use crate::tui::components::star_rating::star_line;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Borders (1 left + 1 right) plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders (top + bottom), the meta line and the poster line.
const FIXED_ROWS: u16 = 2 + 1 + 1;

/// A read-only card for one journal entry.
///
/// ```text
/// ╭ Dune ──────────────────────────╮
/// │ 2025-01-01  ★ ★ ★ ★ ★  [SF]    │
/// │ Sand everywhere.               │
/// │ ▣ image/png · 12.3 KB          │
/// ╰────────────────────────────────╯
/// ```
///
/// The review is wrapped with `textwrap` both when measuring and when drawing,
/// so [`calculate_height`](Self::calculate_height) always matches the render.
#[derive(Clone, Copy)]
pub struct EntryCard<'a> {
    pub entry: &'a Entry,
    pub strings: &'static Strings,
    pub is_selected: bool,
}

impl<'a> EntryCard<'a> {
    pub fn new(entry: &'a Entry, strings: &'static Strings, is_selected: bool) -> Self {
        Self {
            entry,
            strings,
            is_selected,
        }
    }

    fn review_lines(entry: &Entry, strings: &Strings, width: u16) -> Vec<String> {
        let review = entry.review.trim();
        let text = if review.is_empty() { strings.no_review } else { review };
        let options = textwrap::Options::new(width.max(1) as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        textwrap::wrap(text, options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Rows this card needs at `width`.
    pub fn calculate_height(entry: &Entry, strings: &Strings, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        let review_rows = Self::review_lines(entry, strings, content_width).len().max(1);
        FIXED_ROWS.saturating_add(u16::try_from(review_rows).unwrap_or(u16::MAX))
    }

    fn meta_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                self.entry.watched_date.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
        ];
        spans.extend(star_line(self.entry.rating.value()).spans);
        let genre = self.entry.genre.trim();
        if !genre.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{genre}]"),
                Style::default().fg(Color::Black).bg(Color::Magenta),
            ));
        }
        Line::from(spans)
    }

    fn poster_line(&self) -> Line<'static> {
        let summary = match self.entry.poster.as_deref().and_then(describe_data_uri) {
            Some((mime, size)) => format!("▣ {} · {}", mime, format_size(size)),
            None => format!("▢ {}", self.entry.poster_source()),
        };
        Line::styled(summary, Style::default().fg(Color::DarkGray))
    }
}

impl Widget for EntryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::styled(
                format!(" {} ", self.entry.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(area);
        block.render(area, buf);

        let review_style = if self.entry.review.trim().is_empty() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
        };

        let mut lines = vec![self.meta_line()];
        lines.extend(
            Self::review_lines(self.entry, self.strings, inner.width)
                .into_iter()
                .map(|line| Line::styled(line, review_style)),
        );
        lines.push(self.poster_line());

        Paragraph::new(lines).render(inner, buf);
    }
}
