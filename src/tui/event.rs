use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C quits from anywhere
    ForceQuit,
    /// Ctrl+S submits the form
    SaveEntry,
    /// Ctrl+G asks for review questions
    RequestAssist,
    Escape,
    Submit,
    NextField,
    PrevField,

    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    ScrollPageUp,
    ScrollPageDown,
    ScrollUp,
    ScrollDown,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            log::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            // Keyboard enhancement reports releases too; only act on presses
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::SaveEntry),
                (KeyModifiers::CONTROL, KeyCode::Char('g')) => Some(TuiEvent::RequestAssist),
                // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
                (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::NextField),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
