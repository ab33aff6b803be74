//! Inventory panel: warehouse products with SKUs and reorder levels.

use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::{
    core::state::AppState,
    domain::text::format_price,
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct InventoryPanel;

impl InventoryPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.inventory;
        let rows = panel
            .rows()
            .iter()
            .map(|product| {
                let low = product.stock_quantity <= product.reorder_level;
                let quantity = if low {
                    Cell::from(product.stock_quantity.separate_with_commas())
                        .style(Style::default().fg(Color::Yellow))
                } else {
                    Cell::from(product.stock_quantity.separate_with_commas())
                };
                Row::new(vec![
                    Cell::from(product.id.to_string()),
                    Cell::from(product.name.clone()),
                    Cell::from(product.sku.clone()),
                    Cell::from(format_price(product.price)),
                    quantity,
                    Cell::from(product.reorder_level.separate_with_commas()),
                ])
            })
            .collect();

        TablePage {
            title: "Inventory".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(16)),
                Column::new("SKU", Constraint::Length(14)),
                Column::new("Price", Constraint::Length(10)),
                Column::new("In stock", Constraint::Length(10)),
                Column::new("Reorder at", Constraint::Length(12)),
            ],
            rows,
            selected: panel.selected,
            loading: panel.resource.is_loading(),
            alert: panel.alert(),
        }
        .render(frame, area);
    }
}
