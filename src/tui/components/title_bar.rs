//! # TitleBar Component
//!
//! Top line of the screen: the app title and subtitle on the left, the model
//! and the latest status message after them.
//!
//! ```text
//! 2025 Movie Journal · Write your own movie diary. | model: gemini-2.5-flash | Entry added.
//! ```
//!
//! Stateless: every field is a prop copied from `App` each frame. The status
//! part is dropped when there is no status message.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub title: String,
    pub subtitle: String,
    /// Localized label in front of the model name
    pub model_label: String,
    /// Model used for review questions
    pub model_name: String,
    /// Transient status (entry added, poster loaded, ...)
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        title: &str,
        subtitle: &str,
        model_label: &str,
        model_name: &str,
        status_message: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            model_label: model_label.to_string(),
            model_name: model_name.to_string(),
            status_message: status_message.to_string(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", self.subtitle),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(" | {}: {}", self.model_label, self.model_name),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("2025 Movie Journal", "Diary", "model", "gemini-2.5-flash", "Entry added.");
        let text = render(&mut title_bar);

        assert!(text.contains("2025 Movie Journal"));
        assert!(text.contains("Diary"));
        assert!(text.contains("model: gemini-2.5-flash"));
        assert!(text.contains("| Entry added."));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new("2025 Movie Journal", "Diary", "model", "gemini-2.5-flash", "");
        let text = render(&mut title_bar);

        assert!(text.contains("model: gemini-2.5-flash"));
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new("a", "b", "model", "gemini-2.5-flash", "");
        title_bar.status_message = "Poster loaded.".to_string();
        assert!(render(&mut title_bar).contains("Poster loaded."));
    }
}
