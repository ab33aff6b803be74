//! Create-form overlay
//!
//! Centered popup over the active panel. The focused field is
//! highlighted; validation and submit errors render inside the popup.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, FormState},
    presentation::widgets::centered_rect,
};

#[derive(Debug, Clone, Default)]
pub struct FormOverlay;

impl FormOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(form) = &state.ui.form else {
            return;
        };

        let height = Self::height(form);
        let popup = centered_rect(52, height, area);
        frame.render_widget(Clear, popup);

        let title = format!("Add to {}", form.panel.title());
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = Vec::with_capacity(form.fields.len() + 2);
        for (i, field) in form.fields.iter().enumerate() {
            let focused = i == form.focused;
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                Style::default().reversed()
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}: ", field.label), Style::default().bold()),
                Span::styled(field.value.clone(), value_style),
            ]));
        }

        if let Some(error) = &form.error {
            lines.push(Line::default());
            lines.push(Line::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Popup height: borders, one line per field, two for an error.
    fn height(form: &FormState) -> u16 {
        let error_lines = if form.error.is_some() { 2 } else { 0 };
        (form.fields.len() + error_lines) as u16 + 2
    }
}
