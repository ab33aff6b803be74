//! Panel entity records
//!
//! Flat records mirroring the backend's JSON. The resource machinery treats
//! these as opaque payloads; only the panel views interpret them.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::state::PanelKind;

/// A catalog item from the item master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

/// A menu entry; availability is the only mutable field at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "reorderPoint", default)]
    pub reorder_point: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

/// Named `DiningTable` to keep `Table` free for the ratatui widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: u64,
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: u64,
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WaiterStatus {
    Available,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waiter {
    pub id: u64,
    pub name: String,
    pub status: WaiterStatus,
}

/// An inventory product (Django serializer field names, snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock_quantity: u32,
    pub reorder_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTrends {
    pub insights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendations {
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAdvice {
    pub optimal_inventory_level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub performance_review: String,
}

/// A settled list payload, tagged with the panel it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListPayload {
    Items(Vec<Item>),
    Menu(Vec<MenuItem>),
    Stock(Vec<StockItem>),
    Tables(Vec<DiningTable>),
    Waiters(Vec<Waiter>),
    Taxes(Vec<TaxRate>),
    Products(Vec<Product>),
}

impl ListPayload {
    pub fn panel(&self) -> PanelKind {
        match self {
            ListPayload::Items(_) => PanelKind::Items,
            ListPayload::Menu(_) => PanelKind::Menu,
            ListPayload::Stock(_) => PanelKind::Stock,
            ListPayload::Tables(_) => PanelKind::Tables,
            ListPayload::Waiters(_) => PanelKind::Waiters,
            ListPayload::Taxes(_) => PanelKind::Taxes,
            ListPayload::Products(_) => PanelKind::Inventory,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListPayload::Items(v) => v.len(),
            ListPayload::Menu(v) => v.len(),
            ListPayload::Stock(v) => v.len(),
            ListPayload::Tables(v) => v.len(),
            ListPayload::Waiters(v) => v.len(),
            ListPayload::Taxes(v) => v.len(),
            ListPayload::Products(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A settled AI-insight payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightPayload {
    Trends(SalesTrends),
    Recommendations(ProductRecommendations),
    Inventory(InventoryAdvice),
    Performance(PerformanceReview),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_menu_item_wire_names() {
        let json = r#"{
            "id": 1,
            "name": "Espresso",
            "description": "",
            "price": 2.5,
            "category": "drinks",
            "isAvailable": true
        }"#;
        let item: MenuItem = serde_json::from_str(json).expect("menu item should decode");
        assert!(item.is_available);

        let encoded = serde_json::to_value(&item).expect("menu item should encode");
        assert_eq!(encoded["isAvailable"], serde_json::json!(true));
    }

    #[test]
    fn test_stock_item_wire_names() {
        let json = r#"{"id": 3, "name": "Flour", "quantity": 12, "unit": "kg", "reorderPoint": 5}"#;
        let item: StockItem = serde_json::from_str(json).expect("stock item should decode");
        assert_eq!(item.reorder_point, 5);
    }

    #[test]
    fn test_table_status_is_lowercase_on_the_wire() {
        let status = TableStatus::Occupied;
        assert_eq!(
            serde_json::to_string(&status).expect("status should encode"),
            "\"occupied\""
        );
        assert_eq!(status.to_string(), "occupied");
    }

    #[test]
    fn test_waiter_decodes_with_server_default_status() {
        let json = r#"{"id": 7, "name": "Sam", "status": "available"}"#;
        let waiter: Waiter = serde_json::from_str(json).expect("waiter should decode");
        assert_eq!(waiter.status, WaiterStatus::Available);
    }

    #[test]
    fn test_list_payload_panel_tagging() {
        let payload = ListPayload::Waiters(vec![]);
        assert_eq!(payload.panel(), PanelKind::Waiters);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_optional_description_defaults() {
        let json = r#"{"id": 2, "name": "Widget", "price": 4.0}"#;
        let item: Item = serde_json::from_str(json).expect("item should decode");
        assert!(item.description.is_empty());
        assert!(item.category.is_empty());
    }
}
