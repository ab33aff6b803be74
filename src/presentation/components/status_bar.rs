//! Status bar component
//!
//! Displays key hints, a clock and transient status messages in the two
//! bottom lines of the screen. Pure and stateless.

use chrono::Local;
use ratatui::{prelude::*, widgets::*};

use crate::core::state::{AppState, Mode, PanelKind};

#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the two status lines into the given (already split) areas.
    pub fn view(&self, state: &AppState, frame: &mut Frame, hints_area: Rect, message_area: Rect) {
        frame.render_widget(Clear, hints_area);
        frame.render_widget(Clear, message_area);

        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(0), Constraint::Length(8)],
        )
        .split(hints_area);

        let hints = Span::styled(
            self.key_hints(state),
            Style::default().fg(Color::Gray).italic(),
        );
        let clock = Local::now().format("%H:%M:%S").to_string();

        let background = Style::default().bg(Color::Black);
        frame.render_widget(
            Paragraph::new(Line::from(hints)).style(background),
            layout[0],
        );
        frame.render_widget(Paragraph::new(clock).style(background), layout[1]);

        let message = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(Paragraph::new(message), message_area);
    }

    /// Key hints for the current panel and mode.
    pub fn key_hints(&self, state: &AppState) -> &'static str {
        match state.ui.mode {
            Mode::Form => "Enter submit | Tab next field | Esc cancel",
            Mode::InsightInput => "Enter run | Esc cancel",
            Mode::Normal => match state.ui.active_panel {
                PanelKind::Items => "j/k move | a add | +/- price | r refresh | q quit",
                PanelKind::Menu => "j/k move | Space toggle | r refresh | q quit",
                PanelKind::Stock => "j/k move | a add | +/- quantity | r refresh | q quit",
                PanelKind::Tables => "j/k move | v/o/b status | r refresh | q quit",
                PanelKind::Waiters => "j/k move | a add | v/b status | r refresh | q quit",
                PanelKind::Taxes => "j/k move | a add | +/- rate | r refresh | q quit",
                PanelKind::Inventory => "j/k move | a add | r refresh | q quit",
                PanelKind::Insights => "j/k section | i set id | Enter run | q quit",
            },
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
