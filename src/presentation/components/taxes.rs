//! Tax rates panel.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct TaxesPanel;

impl TaxesPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.taxes;
        let rows = panel
            .rows()
            .iter()
            .map(|tax| {
                Row::new(vec![
                    Cell::from(tax.id.to_string()),
                    Cell::from(tax.name.clone()),
                    Cell::from(format!("{:.2}%", tax.rate)),
                ])
            })
            .collect();

        TablePage {
            title: "Tax Rates".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(20)),
                Column::new("Rate", Constraint::Length(10)),
            ],
            rows,
            selected: panel.selected,
            loading: panel.resource.is_loading(),
            alert: panel.alert(),
        }
        .render(frame, area);
    }
}
