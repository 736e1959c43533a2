// File: src/components/order_card.rs
use api::order::OrderAction;
use api::order::OrderSummary;
use api::order::ACTIVE_STATUS_STEP;
use api::order::STATUS_STEPS;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

const IMG_LOGO: &str = "https://www.figma.com/api/mcp/asset/7e9e6f0d-8e3e-48f0-a06d-b56d4cb19c1a";
const IMG_CONTACT: &str = "https://www.figma.com/api/mcp/asset/6f5f4391-38a2-497c-a17f-c5d67ed91b18";
const IMG_INFO: &str = "https://www.figma.com/api/mcp/asset/fb7e9d6f-ab71-41ed-88cf-022a773850f0";
const IMG_ARROW_ACTIVE: &str =
    "https://www.figma.com/api/mcp/asset/88f7630b-fae1-4a7c-ab0c-160ed2933063";
const IMG_ARROW_INACTIVE: &str =
    "https://www.figma.com/api/mcp/asset/01262088-7c7c-4f47-ad1f-b32f4e30db03";

/// Writes an order action to the log. Nothing on screen changes.
pub fn log_order_action(action: OrderAction, order_id: &str) {
    info!("{}", action.log_line(order_id));
}

/// One order: seller bar, product block with progress strip, price,
/// message and an info banner carrying the confirm/reject buttons.
///
/// The card has no state. Clicking a button only calls the matching handler.
#[component]
pub fn OrderCard(
    #[props(default)] order: OrderSummary,
    on_confirm: Option<EventHandler<()>>,
    on_reject: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "w-full max-w-[1057px] mx-auto bg-bg-surface rounded-lg overflow-hidden",
            "data-order-id": "{order.id}",

            // seller bar
            div {
                class: "flex items-center justify-between px-5 py-2.5 border-b border-border-surface",
                div {
                    class: "flex items-center gap-1",
                    div {
                        class: "w-5 h-[21.53px] flex-shrink-0",
                        img { src: IMG_LOGO, alt: "Store logo", class: "w-full h-full object-cover" }
                    }
                    h3 { class: "text-body-bold text-content-neutral", "{order.seller_name}" }
                }
                div {
                    class: "flex items-center gap-4",
                    button {
                        class: "flex items-center gap-1 text-content-secondary hover:underline",
                        img { src: IMG_CONTACT, alt: "", class: "w-[14px] h-[14px]" }
                        span { class: "text-body-regular", "Yêu cầu liên hệ với người mua" }
                    }
                    span { class: "text-body-regular text-content-neutral", "{order.timestamp}" }
                }
            }

            div {
                class: "flex items-start gap-4 p-5 border-b border-border-surface",
                div {
                    class: "flex flex-1 gap-3",
                    div {
                        class: "w-[100px] h-[100px] flex-shrink-0 overflow-hidden rounded",
                        img {
                            src: "{order.product_image}",
                            alt: "{order.product_title}",
                            class: "w-full h-full object-cover",
                        }
                    }
                    div {
                        class: "flex-1 flex flex-col justify-between min-h-[100px]",
                        div {
                            class: "flex flex-wrap items-center gap-2",
                            h4 { class: "text-h4-bold text-content-neutral-strong", "{order.product_title}" }
                            button { class: "text-body-regular text-content-secondary hover:underline", "(Chi tiết)" }
                        }
                        div {
                            class: "flex flex-col gap-1",
                            div {
                                class: "flex items-center gap-1",
                                span {
                                    class: "text-body-regular text-content-neutral",
                                    "Tình trạng: {order.product_condition}"
                                }
                                img { src: IMG_INFO, alt: "", class: "w-[18px] h-[14px]" }
                            }
                            p { class: "text-body-regular text-content-neutral", "{order.product_details}" }
                            StatusProgress {}
                        }
                    }
                }
                div { class: "flex-shrink-0 text-body-regular text-content-neutral", "{order.price}" }
            }

            div {
                class: "px-5 py-2.5 bg-bg-surface",
                p { class: "text-body-regular text-content-neutral-light", "{order.message}" }
            }

            div {
                class: "flex items-center gap-4 px-5 py-2.5 bg-bg-info-light",
                p { class: "flex-1 text-body-regular text-content-info", "{order.info_message}" }
                div {
                    class: "flex items-center gap-3",
                    button {
                        class: "px-3 py-1.5 rounded-sm bg-bg-primary hover:bg-bg-primary-hover active:bg-bg-primary-press text-action-medium text-content-on-action transition-colors focus-ring",
                        onclick: move |_| {
                            if let Some(handler) = on_confirm {
                                handler.call(());
                            }
                        },
                        {OrderAction::Confirm.label()}
                    }
                    button {
                        class: "px-3 py-1.5 rounded-sm border border-border-primary text-action-medium text-content-primary hover:bg-bg-primary-light transition-colors focus-ring",
                        onclick: move |_| {
                            if let Some(handler) = on_reject {
                                handler.call(());
                            }
                        },
                        {OrderAction::Reject.label()}
                    }
                }
            }
        }
    }
}

/// Fulfilment steps separated by arrows; only the first step is lit.
#[component]
fn StatusProgress() -> Element {
    rsx! {
        div {
            class: "flex flex-wrap items-center gap-2 mt-1",
            for (i, step) in STATUS_STEPS.iter().enumerate() {
                span {
                    class: if i == ACTIVE_STATUS_STEP { "text-body-regular text-content-selected-orange" } else { "text-body-regular text-content-neutral-light" },
                    "{step}"
                }
                if i + 1 < STATUS_STEPS.len() {
                    img {
                        src: if i == ACTIVE_STATUS_STEP { IMG_ARROW_ACTIVE } else { IMG_ARROW_INACTIVE },
                        alt: "",
                        class: "w-[12.5px] h-[10px]",
                    }
                }
            }
        }
    }
}

/// Renders `orders` as cards. Confirm/reject are logged against each id.
#[component]
pub fn OrderList(
    orders: Vec<OrderSummary>,
    #[props(default)] class: String,
    #[props(default)] style: String,
) -> Element {
    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            {orders.into_iter().map(|order| {
                let key = order.id.clone();
                let confirm_id = order.id.clone();
                let reject_id = order.id.clone();
                rsx! {
                    OrderCard {
                        key: "{key}",
                        order,
                        on_confirm: move |_| log_order_action(OrderAction::Confirm, &confirm_id),
                        on_reject: move |_| log_order_action(OrderAction::Reject, &reject_id),
                    }
                }
            })}
        }
    }
}
