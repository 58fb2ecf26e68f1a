//! # TextField
//!
//! Cursor handling for the form's text inputs. The text itself lives in
//! `EntryForm`; a `TextCursor` only tracks where the caret is and edits the
//! buffer it's handed.
//!
//! Multi-line fields are hard-wrapped by display width (no word wrapping), so
//! the caret position computed here always matches what is drawn.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::tui::event::TuiEvent;

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// A visual line: byte offset where it starts in the source, and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualLine {
    pub start: usize,
    pub text: String,
}

/// Splits on '\n' and then breaks each line every `width` display columns.
/// Always returns at least one line.
pub fn hard_wrap(text: &str, width: u16) -> Vec<VisualLine> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw in text.split('\n') {
        let mut start = offset;
        let mut current = String::new();
        let mut current_width = 0;
        for (i, c) in raw.char_indices() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(VisualLine {
                    start,
                    text: std::mem::take(&mut current),
                });
                start = offset + i;
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        lines.push(VisualLine { start, text: current });
        offset += raw.len() + 1;
    }

    lines
}

/// Caret position for one text field, as a byte offset into the buffer.
#[derive(Debug, Default, Clone)]
pub struct TextCursor {
    pub pos: usize,
}

impl TextCursor {
    /// Keeps the caret inside the buffer (after the form was reset, for instance).
    pub fn clamp(&mut self, buffer: &str) {
        if self.pos > buffer.len() {
            self.pos = buffer.len();
        }
        while !buffer.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }

    /// Applies an editing event to `buffer`. Returns true if the event was consumed.
    ///
    /// Newlines (pasted or Ctrl+J) are only accepted when `multiline` is set;
    /// single-line fields get them as spaces.
    pub fn handle(&mut self, buffer: &mut String, event: &TuiEvent, multiline: bool) -> bool {
        self.clamp(buffer);
        match event {
            TuiEvent::InputChar(c) => {
                let c = if *c == '\n' && !multiline { ' ' } else { *c };
                buffer.insert(self.pos, c);
                self.pos += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let text = if multiline {
                    text.replace("\r\n", "\n")
                } else {
                    text.replace(['\r', '\n'], " ")
                };
                buffer.insert_str(self.pos, &text);
                self.pos += text.len();
                true
            }
            TuiEvent::Backspace => {
                if self.pos > 0 {
                    let prev = prev_char_boundary(buffer, self.pos);
                    buffer.drain(prev..self.pos);
                    self.pos = prev;
                }
                true
            }
            TuiEvent::Delete => {
                if self.pos < buffer.len() {
                    let next = next_char_boundary(buffer, self.pos);
                    buffer.drain(self.pos..next);
                }
                true
            }
            TuiEvent::CursorLeft => {
                self.pos = prev_char_boundary(buffer, self.pos);
                true
            }
            TuiEvent::CursorRight => {
                if self.pos < buffer.len() {
                    self.pos = next_char_boundary(buffer, self.pos);
                }
                true
            }
            TuiEvent::CursorHome => {
                self.pos = buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                true
            }
            TuiEvent::CursorEnd => {
                self.pos = buffer[self.pos..]
                    .find('\n')
                    .map(|i| self.pos + i)
                    .unwrap_or(buffer.len());
                true
            }
            _ => false,
        }
    }

    /// Moves the caret to the previous (`up`) or next logical line, keeping the
    /// character column where possible. Returns false at the first/last line.
    pub fn move_line(&mut self, buffer: &str, up: bool) -> bool {
        self.clamp(buffer);
        let line_start = buffer[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = buffer[line_start..self.pos].chars().count();

        let target_start = if up {
            if line_start == 0 {
                return false;
            }
            buffer[..line_start - 1].rfind('\n').map(|i| i + 1).unwrap_or(0)
        } else {
            match buffer[self.pos..].find('\n') {
                Some(i) => self.pos + i + 1,
                None => return false,
            }
        };
        let target_end = buffer[target_start..]
            .find('\n')
            .map(|i| target_start + i)
            .unwrap_or(buffer.len());

        self.pos = buffer[target_start..target_end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| target_start + i)
            .unwrap_or(target_end);
        true
    }

    /// (line, column) of the caret within `hard_wrap(buffer, width)`.
    pub fn visual_position(&self, buffer: &str, width: u16) -> (usize, u16) {
        let lines = hard_wrap(buffer, width);
        // Last line starting at or before the caret
        let idx = lines
            .iter()
            .rposition(|l| l.start <= self.pos)
            .unwrap_or(0);
        let line = &lines[idx];
        let col: usize = buffer[line.start..self.pos.max(line.start)]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (idx, col as u16)
    }

    /// First visible line so the caret stays inside a viewport of `height` lines.
    pub fn scroll_offset(&self, buffer: &str, width: u16, height: u16) -> usize {
        let (line, _) = self.visual_position(buffer, width);
        let height = height.max(1) as usize;
        (line + 1).saturating_sub(height)
    }

    /// Screen coordinates of the caret for a field drawn in `inner`.
    pub fn screen_pos(&self, buffer: &str, inner: Rect) -> (u16, u16) {
        let (line, col) = self.visual_position(buffer, inner.width);
        let offset = self.scroll_offset(buffer, inner.width, inner.height);
        let row = (line - offset) as u16;
        (
            inner.x + col.min(inner.width.saturating_sub(1)),
            inner.y + row.min(inner.height.saturating_sub(1)),
        )
    }
}
