//=============================================================================
// File: src/screens/order_list_page.rs
//=============================================================================
use crate::components::filters::Filters;
use crate::components::order_card::OrderList;
use crate::components::sidebar::PageSidebar;
use crate::components::sort_select::SortSelect;
use crate::components::tabs::Tabs;
use crate::hooks::use_order_list_state::use_order_list_state;
use api::order::mock_orders;
use api::order::ORDER_PAGE_ORDER_COUNT;
use api::tab::ORDER_PAGE_TABS;
use dioxus::prelude::*;

/// The standalone order page: emoji sidebar, tabs, filters, a live sort
/// select and seven sample cards.
#[allow(non_snake_case)]
#[component]
pub fn OrderListPage() -> Element {
    let mut state = use_order_list_state();

    // Regenerated on every render; tab, search and sort are not applied.
    let orders = mock_orders(ORDER_PAGE_ORDER_COUNT);
    let count = orders.len();

    rsx! {
        div {
            class: "min-h-screen bg-bg-canvas",
            div {
                class: "max-w-[1440px] mx-auto px-20 py-10",
                div {
                    class: "flex gap-10",
                    PageSidebar {}
                    div {
                        class: "flex-1 min-w-0",
                        div {
                            class: "mb-8",
                            div {
                                class: "bg-bg-surface rounded-lg",
                                div {
                                    class: "px-5 py-4",
                                    h1 { class: "text-h3-bold text-content-neutral-strong", "Đơn bán" }
                                }
                                div {
                                    class: "px-5 pb-5",
                                    div {
                                        class: "mb-5",
                                        Tabs {
                                            tabs: ORDER_PAGE_TABS,
                                            active_tab_id: state.active_tab_id(),
                                            on_tab_change: move |id: String| state.select_tab(id),
                                        }
                                    }
                                    Filters {
                                        search_query: state.search_query(),
                                        on_search_change: move |query: String| state.set_search_query(query),
                                    }
                                }
                            }
                        }
                        div {
                            class: "flex items-center justify-between mb-6",
                            p { class: "text-body-large-regular text-content-neutral-strong", "{count} sản phẩm" }
                            SortSelect {
                                sort_key: state.sort_key(),
                                on_sort_change: move |key: String| state.set_sort_key(key),
                            }
                        }
                        OrderList { orders, class: "space-y-8" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn renders_seven_cards_and_live_count() {
        let html = render(OrderListPage);
        assert_eq!(html.matches("data-order-id=").count(), ORDER_PAGE_ORDER_COUNT);
        assert!(html.contains("7 sản phẩm"));
        assert!(html.contains(r#"data-order-id="order-7""#));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches("<option").count(), 4);
    }
}
