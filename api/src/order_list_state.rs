//! A snapshot of the order list's local UI state.
//!
//! The composition root keeps each field in its own reactive cell; this type
//! is the plain-value view of those cells and carries the transition rules.

use crate::order::OrderSummary;
use crate::sort::DEFAULT_SORT_KEY;
use crate::tab::DEFAULT_TAB_ID;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OrderListState {
    pub active_tab_id: String,
    pub search_query: String,
    pub sort_key: String,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            active_tab_id: DEFAULT_TAB_ID.to_string(),
            search_query: String::new(),
            sort_key: DEFAULT_SORT_KEY.to_string(),
        }
    }
}

impl OrderListState {
    /// Last write wins. Re-selecting the active tab is a no-op.
    pub fn select_tab(&mut self, tab_id: impl Into<String>) {
        self.active_tab_id = tab_id.into();
    }

    /// Stores the query verbatim: no trimming, no length limits.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_sort_key(&mut self, sort_key: impl Into<String>) {
        self.sort_key = sort_key.into();
    }

    /// The orders to display under this state.
    ///
    /// Tab, query and sort key are not wired to the data yet, so every order
    /// is returned in its original order.
    pub fn orders_in_view<'a>(&self, orders: &'a [OrderSummary]) -> &'a [OrderSummary] {
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::mock_orders;
    use crate::tab::ORDER_PAGE_TABS;

    #[test]
    fn initial_values() {
        let state = OrderListState::default();
        assert_eq!(state.active_tab_id, "all");
        assert_eq!(state.search_query, "");
        assert_eq!(state.sort_key, "recent");
    }

    #[test]
    fn last_clicked_tab_wins() {
        let mut state = OrderListState::default();
        let clicks = ["pending", "pending", "returned", "all", "shipping"];
        for id in clicks {
            state.select_tab(id);
            assert_eq!(state.active_tab_id, id);
        }
        assert_eq!(state.active_tab_id, "shipping");
        assert_eq!(state.search_query, "");
        assert_eq!(state.sort_key, "recent");
    }

    #[test]
    fn every_tab_is_selectable() {
        let mut state = OrderListState::default();
        for tab in ORDER_PAGE_TABS {
            state.select_tab(tab.id);
            assert!(tab.is_active(&state.active_tab_id));
        }
    }

    #[test]
    fn search_query_is_verbatim() {
        let long = "x".repeat(4096);
        let mut state = OrderListState::default();
        for query in ["a", "ab", "  ab  ", "", "Đơn <hủy>", long.as_str()] {
            state.set_search_query(query);
            assert_eq!(state.search_query, query);
        }
    }

    #[test]
    fn state_does_not_change_orders_in_view() {
        let orders = mock_orders(7);
        let mut state = OrderListState::default();
        let before = state.orders_in_view(&orders).to_vec();

        state.select_tab("cancelled");
        state.set_search_query("không có");
        state.set_sort_key("price-low");

        assert_eq!(state.orders_in_view(&orders), before.as_slice());
        assert_eq!(state.orders_in_view(&[]).len(), 0);
    }
}
