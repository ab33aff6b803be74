//! AI Insights panel
//!
//! Four sections sharing one layout: a section list on the left, the
//! active section's input and result on the right. Results are fetched
//! on request, never automatically.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::{AppState, InsightSection, Mode, Phase, Resource},
    domain::text::wrap_text,
};

#[derive(Debug, Clone, Default)]
pub struct InsightsPanel;

impl InsightsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(28), Constraint::Min(0)],
        )
        .split(area);

        self.render_sections(state, frame, layout[0]);
        self.render_body(state, frame, layout[1]);
    }

    fn render_sections(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let items = InsightSection::iter()
            .map(|section| ListItem::new(section.to_string()))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("AI Insights"))
            .highlight_style(Style::default().reversed())
            .highlight_symbol("> ");

        let mut list_state =
            ListState::default().with_selected(Some(state.panels.insights.section as usize));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_body(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let section = state.panels.insights.section;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(section.to_string());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = match section.input_label() {
            Some(label) => {
                let layout = Layout::new(
                    Direction::Vertical,
                    [Constraint::Length(1), Constraint::Min(0)],
                )
                .split(inner);
                self.render_input(state, label, frame, layout[0]);
                layout[1]
            }
            None => inner,
        };

        let width = body.width.saturating_sub(1) as usize;
        let text = section_text(state, section, width);
        frame.render_widget(Paragraph::new(text), body);
    }

    fn render_input(&self, state: &AppState, label: &str, frame: &mut Frame, area: Rect) {
        let section = state.panels.insights.section;
        let value = state.panels.insights.input_for(section).unwrap_or("");
        let editing = state.ui.mode == Mode::InsightInput;

        let style = if editing {
            Style::default().reversed()
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if editing { "_" } else { "" };
        let line = Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().bold()),
            Span::styled(format!("{value}{cursor}"), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Displayable text for the active section's resource.
fn section_text(state: &AppState, section: InsightSection, width: usize) -> Text<'static> {
    let insights = &state.panels.insights;
    match section {
        InsightSection::SalesTrends => {
            resource_text(&insights.trends, width, |data| data.insights.clone())
        }
        InsightSection::Recommendations => {
            resource_text(&insights.recommendations, width, |data| {
                if data.recommendations.is_empty() {
                    "No recommendations for this customer.".to_string()
                } else {
                    data.recommendations
                        .iter()
                        .map(|r| format!("- {r}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            })
        }
        InsightSection::Inventory => resource_text(&insights.advice, width, |data| {
            format!("Optimal inventory level: {}", data.optimal_inventory_level)
        }),
        InsightSection::Performance => resource_text(&insights.review, width, |data| {
            data.performance_review.clone()
        }),
    }
}

fn resource_text<T>(
    resource: &Resource<T>,
    width: usize,
    format: impl Fn(&T) -> String,
) -> Text<'static> {
    match resource.phase() {
        Phase::Idle => Text::styled(
            "Press Enter to fetch.",
            Style::default().fg(Color::DarkGray),
        ),
        Phase::Loading => Text::styled("Loading...", Style::default().fg(Color::Gray)),
        Phase::Failure(message) => Text::styled(message.clone(), Style::default().fg(Color::Red)),
        Phase::Success => match resource.data() {
            Some(data) => Text::from(wrap_text(&format(data), width)),
            None => Text::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::entities::{InventoryAdvice, ProductRecommendations};

    #[test]
    fn test_idle_section_shows_prompt() {
        let state = AppState::default();
        let text = section_text(&state, InsightSection::SalesTrends, 80);
        assert_eq!(text.to_string(), "Press Enter to fetch.");
    }

    #[test]
    fn test_inventory_advice_is_formatted() {
        let mut state = AppState::default();
        let token = state.panels.insights.advice.begin();
        state
            .panels
            .insights
            .advice
            .settle(token, Ok(InventoryAdvice {
                optimal_inventory_level: 150,
            }));

        let text = section_text(&state, InsightSection::Inventory, 80);
        assert_eq!(text.to_string(), "Optimal inventory level: 150");
    }

    #[test]
    fn test_recommendations_render_as_bullets() {
        let mut state = AppState::default();
        let token = state.panels.insights.recommendations.begin();
        state.panels.insights.recommendations.settle(
            token,
            Ok(ProductRecommendations {
                recommendations: vec!["Espresso".to_string(), "Latte".to_string()],
            }),
        );

        let text = section_text(&state, InsightSection::Recommendations, 80);
        assert_eq!(text.to_string(), "- Espresso\n- Latte");
    }
}
