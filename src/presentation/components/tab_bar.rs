//! Tab bar component
//!
//! One tab per panel, numbered to match the digit key bindings.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::core::state::{AppState, PanelKind};

#[derive(Debug, Clone)]
pub struct TabBarComponent;

impl TabBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn titles(&self) -> Vec<String> {
        PanelKind::iter()
            .enumerate()
            .map(|(i, panel)| format!("{} {}", i + 1, panel.title()))
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(self.titles())
            .select(state.ui.active_panel as usize)
            .style(Style::default().bg(Color::Black))
            .highlight_style(Style::default().reversed());
        frame.render_widget(tabs, area);
    }
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_titles_are_numbered_in_key_order() {
        let titles = TabBarComponent::new().titles();
        assert_eq!(titles.len(), 8);
        assert_eq!(titles[0], "1 Items");
        assert_eq!(titles[5], "6 Tax Rates");
        assert_eq!(titles[7], "8 AI Insights");
    }
}
