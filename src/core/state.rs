pub mod form;
pub mod panels;
pub mod resource;
pub mod system;
pub mod ui;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr};

use crate::infrastructure::config::Config;

pub use form::{FieldKind, FormField, FormState};
pub use panels::{InsightSection, InsightsState, ListPanel, PanelsState};
pub use resource::{Phase, Resource};
pub use system::SystemState;
pub use ui::{Mode, UiState};

/// The dashboard's tabs, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    FromRepr,
)]
#[strum(serialize_all = "lowercase")]
pub enum PanelKind {
    Items,
    Menu,
    Stock,
    Tables,
    Waiters,
    Taxes,
    Inventory,
    Insights,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Items => "Items",
            PanelKind::Menu => "Menu",
            PanelKind::Stock => "Stock",
            PanelKind::Tables => "Tables",
            PanelKind::Waiters => "Waiters",
            PanelKind::Taxes => "Tax Rates",
            PanelKind::Inventory => "Inventory",
            PanelKind::Insights => "AI Insights",
        }
    }

    pub fn next(&self) -> Self {
        let index = *self as usize;
        Self::from_repr((index + 1) % Self::COUNT).unwrap_or(PanelKind::Items)
    }

    pub fn prev(&self) -> Self {
        let index = *self as usize;
        Self::from_repr((index + Self::COUNT - 1) % Self::COUNT).unwrap_or(PanelKind::Items)
    }

    /// Panels with a create form.
    pub fn has_form(&self) -> bool {
        matches!(
            self,
            PanelKind::Items
                | PanelKind::Stock
                | PanelKind::Waiters
                | PanelKind::Taxes
                | PanelKind::Inventory
        )
    }

    /// Panels backed by a single list endpoint.
    pub fn is_list_panel(&self) -> bool {
        !matches!(self, PanelKind::Insights)
    }

    /// Human-facing load-failure message, matching the backend's wording
    /// per panel.
    pub fn load_error_message(&self) -> String {
        let noun = match self {
            PanelKind::Items => "items",
            PanelKind::Menu => "menu items",
            PanelKind::Stock => "stock items",
            PanelKind::Tables => "tables",
            PanelKind::Waiters => "waiters",
            PanelKind::Taxes => "tax rates",
            PanelKind::Inventory => "products",
            PanelKind::Insights => "insights",
        };
        format!("Failed to load {noun}. Please try again later.")
    }
}

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub panels: PanelsState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        let initial_panel = config.initial_panel();
        Self {
            ui: UiState {
                active_panel: initial_panel,
                ..Default::default()
            },
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Row count of the active panel's list, 0 when not a list panel.
    pub fn active_row_count(&self) -> usize {
        self.panels.row_count(self.ui.active_panel)
    }

    /// Selection index of the active panel's list.
    pub fn active_selection(&self) -> Option<usize> {
        self.panels.selection(self.ui.active_panel)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.ui.active_panel, PanelKind::Items);
        assert_eq!(state.ui.mode, Mode::Normal);
        assert!(!state.system.should_quit);
        assert_eq!(state.active_row_count(), 0);
    }

    #[test]
    fn test_panel_kind_cycles_through_all_tabs() {
        let mut panel = PanelKind::Items;
        for _ in 0..PanelKind::COUNT {
            panel = panel.next();
        }
        assert_eq!(panel, PanelKind::Items);

        assert_eq!(PanelKind::Items.prev(), PanelKind::Insights);
        assert_eq!(PanelKind::Insights.next(), PanelKind::Items);
    }

    #[test]
    fn test_panel_kind_form_availability() {
        assert!(PanelKind::Items.has_form());
        assert!(PanelKind::Waiters.has_form());
        assert!(!PanelKind::Menu.has_form());
        assert!(!PanelKind::Tables.has_form());
        assert!(!PanelKind::Insights.has_form());
    }

    #[test]
    fn test_load_error_message_wording() {
        assert_eq!(
            PanelKind::Items.load_error_message(),
            "Failed to load items. Please try again later."
        );
        assert_eq!(
            PanelKind::Taxes.load_error_message(),
            "Failed to load tax rates. Please try again later."
        );
    }
}
