//! Stock panel: quantities with a low-stock warning against the
//! reorder point.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    core::state::AppState,
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct StockPanel;

impl StockPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.stock;
        let rows = panel
            .rows()
            .iter()
            .map(|item| {
                let low = item.quantity <= item.reorder_point;
                let quantity = if low {
                    Cell::from(item.quantity.separate_with_commas())
                        .style(Style::default().fg(Color::Yellow))
                } else {
                    Cell::from(item.quantity.separate_with_commas())
                };
                Row::new(vec![
                    Cell::from(item.id.to_string()),
                    Cell::from(item.name.clone()),
                    quantity,
                    Cell::from(item.unit.clone()),
                    Cell::from(item.reorder_point.separate_with_commas()),
                    Cell::from(if low { "reorder" } else { "" }),
                ])
            })
            .collect();

        TablePage {
            title: "Stock".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(16)),
                Column::new("Quantity", Constraint::Length(12)),
                Column::new("Unit", Constraint::Length(8)),
                Column::new("Reorder at", Constraint::Length(12)),
                Column::new("", Constraint::Length(9)),
            ],
            rows,
            selected: panel.selected,
            loading: panel.resource.is_loading(),
            alert: panel.alert(),
        }
        .render(frame, area);
    }
}
