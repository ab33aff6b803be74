//! Waiters panel: staff roster with availability status.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::entities::WaiterStatus,
    presentation::widgets::{Column, TablePage},
};

#[derive(Debug, Clone, Default)]
pub struct WaitersPanel;

impl WaitersPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panel = &state.panels.waiters;
        let rows = panel
            .rows()
            .iter()
            .map(|waiter| {
                let status = match waiter.status {
                    WaiterStatus::Available => {
                        Cell::from("available").style(Style::default().fg(Color::Green))
                    }
                    WaiterStatus::Busy => {
                        Cell::from("busy").style(Style::default().fg(Color::Red))
                    }
                };
                Row::new(vec![
                    Cell::from(waiter.id.to_string()),
                    Cell::from(waiter.name.clone()),
                    status,
                ])
            })
            .collect();

        TablePage {
            title: "Waiters".to_string(),
            columns: vec![
                Column::new("ID", Constraint::Length(6)),
                Column::new("Name", Constraint::Min(20)),
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
