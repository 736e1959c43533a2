use api::order_list_state::OrderListState;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

/// The three state cells owned by an order list composition root.
///
/// Each cell is an independent signal with its own setter. Children get
/// plain values plus callbacks, never the signals themselves.
#[derive(Clone, Copy)]
pub struct OrderListCells {
    active_tab_id: Signal<String>,
    search_query: Signal<String>,
    sort_key: Signal<String>,
}

impl OrderListCells {
    pub fn active_tab_id(&self) -> String {
        self.active_tab_id.read().clone()
    }

    pub fn search_query(&self) -> String {
        self.search_query.read().clone()
    }

    pub fn sort_key(&self) -> String {
        self.sort_key.read().clone()
    }

    pub fn select_tab(&mut self, tab_id: String) {
        debug!("tab selected: {}", tab_id);
        self.active_tab_id.set(tab_id);
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query.set(query);
    }

    pub fn set_sort_key(&mut self, sort_key: String) {
        debug!("sort key: {}", sort_key);
        self.sort_key.set(sort_key);
    }
}

/// Creates the order list state cells with their initial values.
pub fn use_order_list_state() -> OrderListCells {
    let initial = OrderListState::default();
    let active_tab_id = use_signal(|| initial.active_tab_id);
    let search_query = use_signal(|| initial.search_query);
    let sort_key = use_signal(|| initial.sort_key);

    OrderListCells {
        active_tab_id,
        search_query,
        sort_key,
    }
}
