use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Props are struct fields filled in by the parent each frame; persistent
/// state is borrowed as `&mut SomethingState`. `render` takes `&mut self` so a
/// component can write layout facts back into that state while drawing (the
/// star control's hit area, the card heights, the form's field boxes), which
/// the next event then uses for mouse hit testing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Something that consumes `TuiEvent`s.
///
/// Returns `Some` only for events the parent must act on (`FormEvent::Submit`,
/// `ListEvent::Delete(id)`, a committed `Rating`); purely local changes such as
/// caret moves or scrolling are absorbed and return `None`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
