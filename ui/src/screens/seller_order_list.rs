//=============================================================================
// File: src/screens/seller_order_list.rs
//=============================================================================
use crate::components::filters::PillFilters;
use crate::components::header::Header;
use crate::components::order_card::OrderList;
use crate::components::sidebar::Sidebar;
use crate::components::sort_select::SortDisplay;
use crate::components::tabs::TabStyle;
use crate::components::tabs::Tabs;
use crate::hooks::use_order_list_state::use_order_list_state;
use api::order::mock_orders;
use api::order::OrderSummary;
use api::order::SELLER_SCREEN_ORDER_COUNT;
use api::tab::SELLER_SCREEN_TABS;
use dioxus::prelude::*;

/// The seller "Đơn bán" screen: header, sidebar and the order list content.
///
/// Owns the tab, search and sort cells. None of them affects which orders
/// are shown.
#[component]
pub fn SellerOrderListScreen() -> Element {
    let mut state = use_order_list_state();

    rsx! {
        div {
            class: "min-h-screen bg-bg-canvas",
            Header {}
            div {
                class: "w-[1440px] mx-auto px-20 py-10",
                div {
                    class: "flex gap-10",
                    Sidebar {}
                    OrderListContent {
                        orders: mock_orders(SELLER_SCREEN_ORDER_COUNT),
                        active_tab_id: state.active_tab_id(),
                        on_tab_change: move |id: String| state.select_tab(id),
                        search_query: state.search_query(),
                        on_search_change: move |query: String| state.set_search_query(query),
                        sort_key: state.sort_key(),
                    }
                }
            }
        }
    }
}

/// Title card, tabs and filters, count and sort row, then the cards.
#[component]
fn OrderListContent(
    orders: Vec<OrderSummary>,
    active_tab_id: String,
    on_tab_change: EventHandler<String>,
    search_query: String,
    on_search_change: EventHandler<String>,
    sort_key: String,
) -> Element {
    let count = orders.len();

    rsx! {
        div {
            class: "w-[990px] flex-shrink-0 flex flex-col gap-5",
            div {
                class: "bg-bg-surface rounded-md px-5 py-4",
                div {
                    class: "h-7",
                    p { class: "text-h4-bold text-content-neutral-strong", "Đơn bán" }
                }
            }
            div {
                class: "bg-bg-surface rounded-md p-5 flex flex-col gap-6",
                Tabs {
                    tabs: SELLER_SCREEN_TABS,
                    active_tab_id,
                    on_tab_change,
                    style: TabStyle::Bordered,
                }
                PillFilters { search_query, on_search_change }
            }
            div {
                class: "flex items-center justify-between",
                div {
                    class: "h-10 flex items-center",
                    p { class: "text-body-large-bold text-content-neutral-strong", "{count} sản phẩm" }
                }
                SortDisplay { sort_key }
            }
            OrderList {
                orders,
                class: "flex flex-col",
                style: "gap: 73px;",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn renders_six_cards_with_all_tab_active() {
        let html = render(SellerOrderListScreen);
        assert_eq!(html.matches("data-order-id=").count(), SELLER_SCREEN_ORDER_COUNT);
        assert!(html.contains("6 sản phẩm"));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert!(html.contains("Được tạo gần đây"));
        assert!(html.contains("Tìm trên Oreka"));
    }
}
