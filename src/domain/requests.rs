//! Mutation request payloads
//!
//! Commands carry these descriptions; the API layer turns them into JSON
//! bodies. Numeric fields are already validated and clamped by the time a
//! request is constructed.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{TableStatus, WaiterStatus};

/// Which kind of mutation a settlement message refers to. A failed
/// create belongs to the open form; a failed patch belongs to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    Create,
    Patch,
}

/// A create (POST) request for one of the panels that has a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateRequest {
    Item {
        name: String,
        description: String,
        price: f64,
        category: String,
    },
    StockItem {
        name: String,
        quantity: u32,
        unit: String,
        reorder_point: u32,
    },
    TaxRate {
        name: String,
        rate: f64,
    },
    Waiter {
        name: String,
    },
    Product {
        name: String,
        sku: String,
        price: f64,
        stock_quantity: u32,
        reorder_level: u32,
    },
}

impl CreateRequest {
    /// JSON body in the field names the backend expects.
    pub fn body(&self) -> serde_json::Value {
        match self {
            CreateRequest::Item {
                name,
                description,
                price,
                category,
            } => json!({
                "name": name,
                "description": description,
                "price": price,
                "category": category,
            }),
            CreateRequest::StockItem {
                name,
                quantity,
                unit,
                reorder_point,
            } => json!({
                "name": name,
                "quantity": quantity,
                "unit": unit,
                "reorderPoint": reorder_point,
            }),
            CreateRequest::TaxRate { name, rate } => json!({ "name": name, "rate": rate }),
            CreateRequest::Waiter { name } => json!({ "name": name }),
            CreateRequest::Product {
                name,
                sku,
                price,
                stock_quantity,
                reorder_level,
            } => json!({
                "name": name,
                "sku": sku,
                "price": price,
                "stock_quantity": stock_quantity,
                "reorder_level": reorder_level,
            }),
        }
    }

    /// Status-bar note shown after the request succeeds.
    pub fn status_note(&self) -> String {
        match self {
            CreateRequest::Item { name, .. } => format!("[Added item] {name}"),
            CreateRequest::StockItem { name, .. } => format!("[Added stock] {name}"),
            CreateRequest::TaxRate { name, .. } => format!("[Added tax rate] {name}"),
            CreateRequest::Waiter { name } => format!("[Added waiter] {name}"),
            CreateRequest::Product { name, .. } => format!("[Added product] {name}"),
        }
    }
}

/// A partial update (PATCH) against a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatchRequest {
    ItemPrice { id: u64, price: f64 },
    MenuAvailability { id: u64, is_available: bool },
    StockQuantity { id: u64, quantity: u32 },
    TableStatus { id: u64, status: TableStatus },
    TaxRateValue { id: u64, rate: f64 },
    WaiterStatus { id: u64, status: WaiterStatus },
}

impl PatchRequest {
    pub fn id(&self) -> u64 {
        match self {
            PatchRequest::ItemPrice { id, .. }
            | PatchRequest::MenuAvailability { id, .. }
            | PatchRequest::StockQuantity { id, .. }
            | PatchRequest::TableStatus { id, .. }
            | PatchRequest::TaxRateValue { id, .. }
            | PatchRequest::WaiterStatus { id, .. } => *id,
        }
    }

    /// JSON body containing only the patched field.
    pub fn body(&self) -> serde_json::Value {
        match self {
            PatchRequest::ItemPrice { price, .. } => json!({ "price": price }),
            PatchRequest::MenuAvailability { is_available, .. } => {
                json!({ "isAvailable": is_available })
            }
            PatchRequest::StockQuantity { quantity, .. } => json!({ "quantity": quantity }),
            PatchRequest::TableStatus { status, .. } => json!({ "status": status }),
            PatchRequest::TaxRateValue { rate, .. } => json!({ "rate": rate }),
            PatchRequest::WaiterStatus { status, .. } => json!({ "status": status }),
        }
    }

    pub fn status_note(&self) -> String {
        match self {
            PatchRequest::ItemPrice { price, .. } => format!("[Price set] {price:.2}"),
            PatchRequest::MenuAvailability { is_available, .. } => {
                if *is_available {
                    "[Set available]".to_string()
                } else {
                    "[Set unavailable]".to_string()
                }
            }
            PatchRequest::StockQuantity { quantity, .. } => format!("[Quantity set] {quantity}"),
            PatchRequest::TableStatus { status, .. } => format!("[Table set] {status}"),
            PatchRequest::TaxRateValue { rate, .. } => format!("[Rate set] {rate:.2}%"),
            PatchRequest::WaiterStatus { status, .. } => format!("[Waiter set] {status}"),
        }
    }
}
