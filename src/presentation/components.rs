//! Presentation components
//!
//! Stateless views over `AppState`. Each component renders one piece of
//! the screen; none of them mutate state.

pub mod form_overlay;
pub mod insights;
pub mod inventory;
pub mod items;
pub mod menu;
pub mod status_bar;
pub mod stock;
pub mod tab_bar;
pub mod tables;
pub mod taxes;
pub mod waiters;

pub use form_overlay::FormOverlay;
pub use insights::InsightsPanel;
pub use inventory::InventoryPanel;
pub use items::ItemsPanel;
pub use menu::MenuPanel;
pub use status_bar::StatusBarComponent;
pub use stock::StockPanel;
pub use tab_bar::TabBarComponent;
pub use tables::TablesPanel;
pub use taxes::TaxesPanel;
pub use waiters::WaitersPanel;
