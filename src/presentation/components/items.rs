//! Items panel: the item master with price stepping.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::text::{format_price, truncate_cell},
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct ItemsPanel;

impl ItemsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.items;
        let rows = panel
            .rows()
            .iter()
            .map(|item| {
                Row::new(vec![
                    Cell::from(item.id.to_string()),
                    Cell::from(item.name.clone()),
                    Cell::from(truncate_cell(&item.description, 40)),
                    Cell::from(format_price(item.price)),
                    Cell::from(item.category.clone()),
                ])
            })
            .collect();

        TablePage {
            title: "Items".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(16)),
                Column::new("Description", Constraint::Min(20)),
                Column::new("Price", Constraint::Length(10)),
                Column::new("Category", Constraint::Length(14)),
            ],
            rows,
            selected: panel.selected,
            loading: panel.resource.is_loading(),
            alert: panel.alert(),
        }
        .render(frame, area);
    }
}
