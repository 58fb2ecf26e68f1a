use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Alert, EntryFormView, EntryList, TitleBar};
use crate::tui::{Pane, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Width share of the form pane, in percent.
const FORM_PERCENT: u16 = 45;

/// Draws the whole screen.
///
/// ```text
/// ┌ title bar ─────────────────────────────────────┐
/// ├ form pane ──────────┬ card list ───────────────┤
/// │                     │                          │
/// └─────────────────────┴──────────────────────────┘
/// ```
///
/// The alert overlay, when present, is drawn last over everything. Pane rects
/// are recorded on `tui` so the event loop can route mouse clicks.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let strings = app.strings();

    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [form_area, list_area] =
        Layout::horizontal([Percentage(FORM_PERCENT), Percentage(100 - FORM_PERCENT)]).areas(main_area);
    tui.form_area = form_area;
    tui.list_area = list_area;

    TitleBar::new(
        strings.app_title,
        strings.app_subtitle,
        strings.model_label,
        app.model_name(),
        &app.status_message,
    )
    .render(frame, title_area);

    let modal = app.alert.is_some();
    EntryFormView::new(
        &mut tui.form,
        &app.form,
        strings,
        tui.focus == Pane::Form && !modal,
    )
    .render(frame, form_area);

    EntryList::new(
        &mut tui.list,
        app.journal.entries(),
        strings,
        tui.focus == Pane::List && !modal,
    )
    .render(frame, list_area);

    if let Some(message) = &app.alert {
        Alert::new(message, strings.alert_dismiss_hint).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::entry::Rating;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);

        assert!(text.contains("2025 Movie Journal"));
        assert!(text.contains("model: test-model"));
        assert!(text.contains("Record a new movie"));
        assert!(text.contains("No movies recorded yet."));
        assert_eq!(tui.form_area.x, 0);
        assert!(tui.list_area.x > 0);
    }

    #[test]
    fn test_added_entry_shows_as_card() {
        let mut app = test_app();
        app.form.title = "Dune".to_string();
        app.form.watched_date = "2025-01-01".to_string();
        update(&mut app, Action::SetRating(Rating::new(5)));
        update(&mut app, Action::SubmitForm);

        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Dune"));
        assert!(text.contains("Entry added."));
        assert!(!text.contains("No movies recorded yet."));
    }

    #[test]
    fn test_alert_overlay_drawn() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm);

        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Title, watched date, and rating are required."));
    }

    #[test]
    fn test_korean_screen_has_no_english_chrome() {
        use crate::assist::AssistClient;
        use crate::core::locale::Locale;
        use crate::test_support::NoopGenerator;
        use std::sync::Arc;

        let assist = AssistClient::new(Arc::new(NoopGenerator), "test-model".to_string(), Locale::Korean);
        let mut app = App::new(Arc::new(assist), Locale::Korean);
        update(&mut app, Action::SubmitForm);

        let mut tui = TuiState::new();
        // Wide glyphs leave padding cells behind them
        let text: String = screen(&app, &mut tui).chars().filter(|c| *c != ' ').collect();
        assert!(text.contains("모델:test-model"));
        assert!(text.contains("Tab이동·Esc목록"));
        assert!(text.contains("Enter/Esc닫기"));
        assert!(!text.contains("model:"));
        assert!(!text.contains("Tabmove"));
    }
}
