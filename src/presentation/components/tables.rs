//! Tables panel: floor tables with color-coded status.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::entities::TableStatus,
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct TablesPanel;

impl TablesPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.tables;
        let rows = panel
            .rows()
            .iter()
            .map(|table| {
                Row::new(vec![
                    Cell::from(table.id.to_string()),
                    Cell::from(format!("Table {}", table.number)),
                    Cell::from(table.capacity.to_string()),
                    Cell::from(table.status.to_string()).style(status_style(table.status)),
                ])
            })
            .collect();

        TablePage {
            title: "Tables".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Table", Constraint::Min(12)),
                Column::new("Capacity", Constraint::Length(10)),
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

fn status_style(status: TableStatus) -> Style {
    match status {
        TableStatus::Available => Style::default().fg(Color::Green),
        TableStatus::Occupied => Style::default().fg(Color::Red),
        TableStatus::Reserved => Style::default().fg(Color::Yellow),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(
            status_style(TableStatus::Available).fg,
            Some(Color::Green)
        );
        assert_eq!(status_style(TableStatus::Occupied).fg, Some(Color::Red));
        assert_eq!(status_style(TableStatus::Reserved).fg, Some(Color::Yellow));
    }
}
