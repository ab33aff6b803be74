//! Presentation layer: screen layout and the per-panel components.

pub mod components;
pub mod widgets;

use ratatui::prelude::*;

use crate::core::state::{AppState, PanelKind};
use components::{
    FormOverlay, InsightsPanel, InventoryPanel, ItemsPanel, MenuPanel, StatusBarComponent,
    StockPanel, TabBarComponent, TablesPanel, TaxesPanel, WaitersPanel,
};

/// Render the whole screen from state.
pub fn view(state: &AppState, frame: &mut Frame, area: Rect) {
    let layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // panel body
            Constraint::Length(1), // key hints + clock
            Constraint::Length(1), // status message
        ],
    )
    .split(area);

    TabBarComponent::new().view(state, frame, layout[0]);

    match state.ui.active_panel {
        PanelKind::Items => ItemsPanel::new().view(state, frame, layout[1]),
        PanelKind::Menu => MenuPanel::new().view(state, frame, layout[1]),
        PanelKind::Stock => StockPanel::new().view(state, frame, layout[1]),
        PanelKind::Tables => TablesPanel::new().view(state, frame, layout[1]),
        PanelKind::Waiters => WaitersPanel::new().view(state, frame, layout[1]),
        PanelKind::Taxes => TaxesPanel::new().view(state, frame, layout[1]),
        PanelKind::Inventory => InventoryPanel::new().view(state, frame, layout[1]),
        PanelKind::Insights => InsightsPanel::new().view(state, frame, layout[1]),
    }

    StatusBarComponent::new().view(state, frame, layout[2], layout[3]);

    // The form pops up over everything else
    FormOverlay::new().view(state, frame, layout[1]);
}
