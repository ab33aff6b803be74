//! Menu panel: availability is the only thing edited here.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::text::{format_price, truncate_cell},
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct MenuPanel;

impl MenuPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.menu;
        let rows = panel
            .rows()
            .iter()
            .map(|item| {
                let availability = if item.is_available {
                    Cell::from("available").style(Style::default().fg(Color::Green))
                } else {
                    Cell::from("unavailable").style(Style::default().fg(Color::Red))
                };
                Row::new(vec![
                    Cell::from(item.id.to_string()),
                    Cell::from(item.name.clone()),
                    Cell::from(truncate_cell(&item.description, 36)),
                    Cell::from(format_price(item.price)),
                    Cell::from(item.category.clone()),
                    availability,
                ])
            })
            .collect();

        TablePage {
            title: "Menu".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(16)),
                Column::new("Description", Constraint::Min(18)),
                Column::new("Price", Constraint::Length(10)),
                Column::new("Category", Constraint::Length(12)),
                Column::new("Status", Constraint::Length(12)),
            ],
            rows,
            selected: panel.selected,
            loading: panel.resource.is_loading(),
            alert: panel.alert(),
        }
        .render(frame, area);
    }
}
