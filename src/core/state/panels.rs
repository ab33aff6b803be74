//! Per-panel state
//!
//! Every list panel owns one `Resource<Vec<T>>` plus table selection.
//! No panel reads another panel's state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::{
    core::state::{resource::Resource, PanelKind},
    domain::entities::{
        DiningTable, InventoryAdvice, Item, MenuItem, PerformanceReview, Product,
        ProductRecommendations, SalesTrends, StockItem, TaxRate, Waiter,
    },
};

/// List-and-mutate state for one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPanel<T> {
    pub resource: Resource<Vec<T>>,
    pub selected: Option<usize>,
    /// Fetch-on-first-focus marker.
    pub visited: bool,
    /// Error from the most recent failed mutation; cleared by the next
    /// successful fetch or mutation.
    pub mutation_error: Option<String>,
}

impl<T> Default for ListPanel<T> {
    fn default() -> Self {
        Self {
            resource: Resource::default(),
            selected: None,
            visited: false,
            mutation_error: None,
        }
    }
}

impl<T> ListPanel<T> {
    pub fn rows(&self) -> &[T] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.selected.and_then(|i| self.rows().get(i))
    }

    /// Error to surface in the panel's alert, fetch failures first.
    pub fn alert(&self) -> Option<&str> {
        self.resource.error().or(self.mutation_error.as_deref())
    }

    pub fn scroll_up(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    pub fn scroll_down(&mut self) {
        if self.is_empty() {
            return;
        }
        let max_index = self.len().saturating_sub(1);
        self.selected = match self.selected {
            Some(i) if i < max_index => Some(i + 1),
            Some(_) => Some(max_index),
            None => Some(0),
        };
    }

    pub fn scroll_to_top(&mut self) {
        if !self.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if !self.is_empty() {
            self.selected = Some(self.len().saturating_sub(1));
        }
    }

    /// Install a freshly fetched list: settle the resource, clear any
    /// mutation error and keep the selection in range.
    pub fn accept(&mut self, token: u64, rows: Vec<T>) -> bool {
        if !self.resource.settle(token, Ok(rows)) {
            return false;
        }
        self.mutation_error = None;
        let len = self.len();
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        true
    }
}

/// The four sections of the AI Insights panel.
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
    FromRepr,
)]
pub enum InsightSection {
    #[strum(serialize = "Sales Trends")]
    SalesTrends,
    #[strum(serialize = "Product Recommendations")]
    Recommendations,
    #[strum(serialize = "Inventory Optimization")]
    Inventory,
    #[strum(serialize = "Performance Review")]
    Performance,
}

impl InsightSection {
    pub fn next(&self) -> Self {
        let index = *self as usize;
        Self::from_repr((index + 1) % Self::COUNT).unwrap_or(InsightSection::SalesTrends)
    }

    pub fn prev(&self) -> Self {
        let index = *self as usize;
        Self::from_repr((index + Self::COUNT - 1) % Self::COUNT)
            .unwrap_or(InsightSection::SalesTrends)
    }

    /// Label of the id argument the section sends, if it takes one.
    pub fn input_label(&self) -> Option<&'static str> {
        match self {
            InsightSection::SalesTrends => None,
            InsightSection::Recommendations => Some("Customer ID"),
            InsightSection::Inventory => Some("Product ID"),
            InsightSection::Performance => Some("Employee ID"),
        }
    }
}

/// AI Insights panel: four independent resources, fetched on request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsState {
    pub section: InsightSection,
    pub trends: Resource<SalesTrends>,
    pub recommendations: Resource<ProductRecommendations>,
    pub advice: Resource<InventoryAdvice>,
    pub review: Resource<PerformanceReview>,
    pub customer_id: String,
    pub product_id: String,
    pub employee_id: String,
}

impl Default for InsightSection {
    fn default() -> Self {
        InsightSection::SalesTrends
    }
}

impl InsightsState {
    /// Input buffer backing the given section, if it takes one.
    pub fn input_for(&self, section: InsightSection) -> Option<&str> {
        match section {
            InsightSection::SalesTrends => None,
            InsightSection::Recommendations => Some(&self.customer_id),
            InsightSection::Inventory => Some(&self.product_id),
            InsightSection::Performance => Some(&self.employee_id),
        }
    }

    pub fn input_for_mut(&mut self, section: InsightSection) -> Option<&mut String> {
        match section {
            InsightSection::SalesTrends => None,
            InsightSection::Recommendations => Some(&mut self.customer_id),
            InsightSection::Inventory => Some(&mut self.product_id),
            InsightSection::Performance => Some(&mut self.employee_id),
        }
    }
}

/// All panel state, keyed by `PanelKind`.
#[derive(Debug, Clone, Default)]
pub struct PanelsState {
    pub items: ListPanel<Item>,
    pub menu: ListPanel<MenuItem>,
    pub stock: ListPanel<StockItem>,
    pub tables: ListPanel<DiningTable>,
    pub waiters: ListPanel<Waiter>,
    pub taxes: ListPanel<TaxRate>,
    pub inventory: ListPanel<Product>,
    pub insights: InsightsState,
}

macro_rules! with_list_panel {
    ($self:expr, $panel:expr, $p:ident => $body:expr) => {
        match $panel {
            PanelKind::Items => {
                let $p = &$self.items;
                Some($body)
            }
            PanelKind::Menu => {
                let $p = &$self.menu;
                Some($body)
            }
            PanelKind::Stock => {
                let $p = &$self.stock;
                Some($body)
            }
            PanelKind::Tables => {
                let $p = &$self.tables;
                Some($body)
            }
            PanelKind::Waiters => {
                let $p = &$self.waiters;
                Some($body)
            }
            PanelKind::Taxes => {
                let $p = &$self.taxes;
                Some($body)
            }
            PanelKind::Inventory => {
                let $p = &$self.inventory;
                Some($body)
            }
            PanelKind::Insights => None,
        }
    };
}

macro_rules! with_list_panel_mut {
    ($self:expr, $panel:expr, $p:ident => $body:expr) => {
        match $panel {
            PanelKind::Items => {
                let $p = &mut $self.items;
                Some($body)
            }
            PanelKind::Menu => {
                let $p = &mut $self.menu;
                Some($body)
            }
            PanelKind::Stock => {
                let $p = &mut $self.stock;
                Some($body)
            }
            PanelKind::Tables => {
                let $p = &mut $self.tables;
                Some($body)
            }
            PanelKind::Waiters => {
                let $p = &mut $self.waiters;
                Some($body)
            }
            PanelKind::Taxes => {
                let $p = &mut $self.taxes;
                Some($body)
            }
            PanelKind::Inventory => {
                let $p = &mut $self.inventory;
                Some($body)
            }
            PanelKind::Insights => None,
        }
    };
}

impl PanelsState {
    pub fn row_count(&self, panel: PanelKind) -> usize {
        with_list_panel!(self, panel, p => p.len()).unwrap_or(0)
    }

    pub fn selection(&self, panel: PanelKind) -> Option<usize> {
        with_list_panel!(self, panel, p => p.selected).flatten()
    }

    pub fn visited(&self, panel: PanelKind) -> bool {
        with_list_panel!(self, panel, p => p.visited).unwrap_or(true)
    }

    pub fn mark_visited(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.visited = true);
    }

    /// Begin a fetch on the panel's resource, returning the token.
    pub fn begin_fetch(&mut self, panel: PanelKind) -> Option<u64> {
        with_list_panel_mut!(self, panel, p => p.resource.begin())
    }

    pub fn fail_fetch(&mut self, panel: PanelKind, token: u64, message: String) -> bool {
        with_list_panel_mut!(self, panel, p => p.resource.settle(token, Err(message)))
            .unwrap_or(false)
    }

    pub fn set_mutation_error(&mut self, panel: PanelKind, message: String) {
        with_list_panel_mut!(self, panel, p => p.mutation_error = Some(message));
    }

    pub fn clear_mutation_error(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.mutation_error = None);
    }

    pub fn scroll_up(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.scroll_up());
    }

    pub fn scroll_down(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.scroll_down());
    }

    pub fn scroll_to_top(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.scroll_to_top());
    }

    pub fn scroll_to_bottom(&mut self, panel: PanelKind) {
        with_list_panel_mut!(self, panel, p => p.scroll_to_bottom());
    }

    pub fn alert(&self, panel: PanelKind) -> Option<&str> {
        with_list_panel!(self, panel, p => p.alert()).flatten()
    }

    pub fn is_loading(&self, panel: PanelKind) -> bool {
        with_list_panel!(self, panel, p => p.resource.is_loading()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn panel_with_rows(rows: Vec<u32>) -> ListPanel<u32> {
        let mut panel = ListPanel::default();
        let token = panel.resource.begin();
        panel.accept(token, rows);
        panel
    }

    #[test]
    fn test_scroll_is_clamped_to_list_bounds() {
        let mut panel = panel_with_rows(vec![10, 20, 30]);
        assert_eq!(panel.selected, Some(0));

        panel.scroll_up();
        assert_eq!(panel.selected, Some(0));

        for _ in 0..10 {
            panel.scroll_down();
        }
        assert_eq!(panel.selected, Some(2));

        panel.scroll_to_top();
        assert_eq!(panel.selected, Some(0));
        panel.scroll_to_bottom();
        assert_eq!(panel.selected, Some(2));
    }

    #[test]
    fn test_scroll_on_empty_panel_is_a_noop() {
        let mut panel: ListPanel<u32> = ListPanel::default();
        panel.scroll_down();
        assert_eq!(panel.selected, None);
    }

    #[test]
    fn test_accept_clamps_selection_when_list_shrinks() {
        let mut panel = panel_with_rows(vec![1, 2, 3, 4]);
        panel.scroll_to_bottom();
        assert_eq!(panel.selected, Some(3));

        let token = panel.resource.begin();
        assert!(panel.accept(token, vec![1, 2]));
        assert_eq!(panel.selected, Some(1));

        let token = panel.resource.begin();
        assert!(panel.accept(token, vec![]));
        assert_eq!(panel.selected, None);
    }

    #[test]
    fn test_accept_clears_mutation_error() {
        let mut panel = panel_with_rows(vec![1]);
        panel.mutation_error = Some("Failed to add item. Please try again.".to_string());
        assert!(panel.alert().is_some());

        let token = panel.resource.begin();
        panel.accept(token, vec![1, 2]);
        assert_eq!(panel.alert(), None);
    }

    #[test]
    fn test_alert_prefers_fetch_failure() {
        let mut panel = panel_with_rows(vec![1]);
        panel.mutation_error = Some("mutation".to_string());
        let token = panel.resource.begin();
        panel.resource.settle(token, Err("fetch".to_string()));
        assert_eq!(panel.alert(), Some("fetch"));
    }

    #[test]
    fn test_insight_section_cycles() {
        let mut section = InsightSection::SalesTrends;
        for _ in 0..4 {
            section = section.next();
        }
        assert_eq!(section, InsightSection::SalesTrends);
        assert_eq!(
            InsightSection::SalesTrends.prev(),
            InsightSection::Performance
        );
    }

    #[test]
    fn test_insights_input_buffers() {
        let mut insights = InsightsState::default();
        assert!(insights.input_for(InsightSection::SalesTrends).is_none());

        if let Some(buffer) = insights.input_for_mut(InsightSection::Inventory) {
            buffer.push_str("42");
        }
        assert_eq!(insights.input_for(InsightSection::Inventory), Some("42"));
        assert_eq!(insights.input_for(InsightSection::Recommendations), Some(""));
    }

    #[test]
    fn test_panels_state_dispatch() {
        let mut panels = PanelsState::default();
        assert_eq!(panels.row_count(PanelKind::Waiters), 0);
        assert!(!panels.visited(PanelKind::Waiters));

        panels.mark_visited(PanelKind::Waiters);
        assert!(panels.visited(PanelKind::Waiters));

        // Insights has no list resource
        assert!(panels.begin_fetch(PanelKind::Insights).is_none());
        assert!(panels.visited(PanelKind::Insights));
    }
}
