//! Domain types: the wire-level records served by the POS backend and the
//! request payloads the dashboard sends back.

pub mod entities;
pub mod requests;
pub mod text;

pub use entities::{
    DiningTable, InsightPayload, InventoryAdvice, Item, ListPayload, MenuItem, PerformanceReview,
    Product, ProductRecommendations, SalesTrends, StockItem, TableStatus, TaxRate, Waiter,
    WaiterStatus,
};
pub use requests::{CreateRequest, PatchRequest};
