use std::fmt;
use std::time::Duration;

use color_eyre::eyre::Result;
use serde::de::DeserializeOwned;

use crate::{
    core::state::{InsightSection, PanelKind},
    domain::entities::{
        DiningTable, InsightPayload, Item, ListPayload, MenuItem, Product, StockItem, TaxRate,
        Waiter,
    },
    domain::requests::{CreateRequest, PatchRequest},
};

/// What went wrong with a backend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Status(code) => write!(f, "unexpected status {code}"),
            ApiError::Decode(message) => write!(f, "decode error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Collection path for a panel's list endpoint, with trailing slash.
pub fn list_path(panel: PanelKind) -> Option<&'static str> {
    match panel {
        PanelKind::Items => Some("/api/items/"),
        PanelKind::Menu => Some("/api/menu-items/"),
        PanelKind::Stock => Some("/api/stock/"),
        PanelKind::Tables => Some("/api/tables/"),
        PanelKind::Waiters => Some("/api/waiters/"),
        PanelKind::Taxes => Some("/api/tax-rates/"),
        PanelKind::Inventory => Some("/api/inventory/products/"),
        PanelKind::Insights => None,
    }
}

/// Path of an AI insight endpoint. Sales trends is a collection-level
/// route; the other three are detail routes keyed by the typed id and
/// have no address without one.
pub fn insight_path(section: InsightSection, id: Option<&str>) -> Option<String> {
    match (section, id) {
        (InsightSection::SalesTrends, _) => Some("/ai/sales_trends/".to_string()),
        (InsightSection::Recommendations, Some(id)) => {
            Some(format!("/ai/{id}/product_recommendations/"))
        }
        (InsightSection::Inventory, Some(id)) => Some(format!("/ai/{id}/optimize_inventory/")),
        (InsightSection::Performance, Some(id)) => Some(format!("/ai/{id}/employee_performance/")),
        (_, None) => None,
    }
}

/// Thin typed wrapper over the backend's REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    /// GET the panel's collection and decode it into a tagged payload.
    pub async fn fetch_list(&self, panel: PanelKind) -> Result<ListPayload, ApiError> {
        let path = list_path(panel)
            .ok_or_else(|| ApiError::Decode(format!("{panel} has no list endpoint")))?;
        let payload = match panel {
            PanelKind::Items => ListPayload::Items(self.get_json::<Vec<Item>>(path).await?),
            PanelKind::Menu => ListPayload::Menu(self.get_json::<Vec<MenuItem>>(path).await?),
            PanelKind::Stock => ListPayload::Stock(self.get_json::<Vec<StockItem>>(path).await?),
            PanelKind::Tables => {
                ListPayload::Tables(self.get_json::<Vec<DiningTable>>(path).await?)
            }
            PanelKind::Waiters => ListPayload::Waiters(self.get_json::<Vec<Waiter>>(path).await?),
            PanelKind::Taxes => ListPayload::Taxes(self.get_json::<Vec<TaxRate>>(path).await?),
            PanelKind::Inventory => {
                ListPayload::Products(self.get_json::<Vec<Product>>(path).await?)
            }
            PanelKind::Insights => {
                return Err(ApiError::Decode(format!("{panel} has no list endpoint")))
            }
        };
        Ok(payload)
    }

    /// GET an AI insight, with the typed id interpolated into the path
    /// for the detail routes.
    pub async fn fetch_insight(
        &self,
        section: InsightSection,
        arg: Option<&str>,
    ) -> Result<InsightPayload, ApiError> {
        let path = insight_path(section, arg)
            .ok_or_else(|| ApiError::Decode(format!("{section} requires an id")))?;
        let payload = match section {
            InsightSection::SalesTrends => InsightPayload::Trends(self.get_json(&path).await?),
            InsightSection::Recommendations => {
                InsightPayload::Recommendations(self.get_json(&path).await?)
            }
            InsightSection::Inventory => InsightPayload::Inventory(self.get_json(&path).await?),
            InsightSection::Performance => InsightPayload::Performance(self.get_json(&path).await?),
        };
        Ok(payload)
    }

    /// POST a create request to the panel's collection.
    pub async fn create(&self, panel: PanelKind, request: &CreateRequest) -> Result<(), ApiError> {
        let path = list_path(panel)
            .ok_or_else(|| ApiError::Decode(format!("{panel} has no create endpoint")))?;
        let response = self
            .http
            .post(self.url(path))
            .json(&request.body())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_success(response).await
    }

    /// PATCH a single record's detail route.
    pub async fn patch(&self, panel: PanelKind, request: &PatchRequest) -> Result<(), ApiError> {
        let path = list_path(panel)
            .ok_or_else(|| ApiError::Decode(format!("{panel} has no detail endpoint")))?;
        let url = format!("{}{}/", self.url(path), request.id());
        let response = self
            .http
            .patch(url)
            .json(&request.body())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_every_list_panel_has_a_path() {
        for panel in [
            PanelKind::Items,
            PanelKind::Menu,
            PanelKind::Stock,
            PanelKind::Tables,
            PanelKind::Waiters,
            PanelKind::Taxes,
            PanelKind::Inventory,
        ] {
            let path = list_path(panel).unwrap();
            assert!(path.starts_with("/api/"));
            assert!(path.ends_with('/'));
        }
        assert_eq!(list_path(PanelKind::Insights), None);
    }

    #[test]
    fn test_sales_trends_path_takes_no_id() {
        assert_eq!(
            insight_path(InsightSection::SalesTrends, None).as_deref(),
            Some("/ai/sales_trends/")
        );
        // A stray id on the collection route is ignored
        assert_eq!(
            insight_path(InsightSection::SalesTrends, Some("7")).as_deref(),
            Some("/ai/sales_trends/")
        );
    }

    #[test]
    fn test_detail_insight_paths_carry_the_id_as_a_segment() {
        assert_eq!(
            insight_path(InsightSection::Recommendations, Some("42")).as_deref(),
            Some("/ai/42/product_recommendations/")
        );
        assert_eq!(
            insight_path(InsightSection::Inventory, Some("3")).as_deref(),
            Some("/ai/3/optimize_inventory/")
        );
        assert_eq!(
            insight_path(InsightSection::Performance, Some("18")).as_deref(),
            Some("/ai/18/employee_performance/")
        );
    }

    #[test]
    fn test_detail_insight_paths_need_an_id() {
        assert_eq!(insight_path(InsightSection::Recommendations, None), None);
        assert_eq!(insight_path(InsightSection::Performance, None), None);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Status(500).to_string(), "unexpected status 500");
        assert_eq!(
            ApiError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
    }
}
