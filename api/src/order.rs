//! Defines the order summary shown on each order card.

use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://www.figma.com/api/mcp/asset/429a9c19-7fb4-4575-83a1-0b9952565afc";

/// Number of cards on the seller order list screen.
pub const SELLER_SCREEN_ORDER_COUNT: usize = 6;

/// Number of cards on the standalone order list page.
pub const ORDER_PAGE_ORDER_COUNT: usize = 7;

/// Everything an order card displays.
///
/// Every field is an opaque display string. Prices and dates are shown
/// exactly as given and never parsed. `Default` holds the sample content
/// used when a card is rendered without explicit data.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummary {
    /// Rendering key. Unique within one list, carries no business meaning.
    pub id: String,
    pub seller_name: String,
    pub timestamp: String,
    pub product_title: String,
    pub product_image: String,
    pub product_condition: String,
    pub product_details: String,
    pub price: String,
    pub message: String,
    pub info_message: String,
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self {
            id: String::new(),
            seller_name: "Seller Vi1 store".to_string(),
            timestamp: "21-11-2025 14:09".to_string(),
            product_title: "Hàng hoá 1.5% từ seller Vi1".to_string(),
            product_image: DEFAULT_PRODUCT_IMAGE.to_string(),
            product_condition: "Như mới".to_string(),
            product_details: "Annj: Kwjwja, Số lượng: 1".to_string(),
            price: "500,000 vnđ".to_string(),
            message: "Sản phẩm này của bạn đã được đặt mua. Hãy xác nhận đơn hàng để bán nhé"
                .to_string(),
            info_message: "Đơn đặt hàng này cần xác nhận. Thời hạn xác nhận: 22-11-2025 02:09"
                .to_string(),
        }
    }
}

impl OrderSummary {
    /// The sample order at zero-based `index`, keyed `order-{index + 1}`.
    pub fn sample(index: usize) -> Self {
        Self {
            id: format!("order-{}", index + 1),
            ..Default::default()
        }
    }
}

/// Produces `count` sample orders with identical content and distinct ids.
pub fn mock_orders(count: usize) -> Vec<OrderSummary> {
    (0..count).map(OrderSummary::sample).collect()
}

/// The two actions a seller can take on a pending order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumIter)]
pub enum OrderAction {
    #[strum(to_string = "Confirmed")]
    Confirm,
    #[strum(to_string = "Rejected")]
    Reject,
}

impl OrderAction {
    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirm => "Xác nhận bán",
            Self::Reject => "Từ chối bán",
        }
    }

    /// The line written to the log when the action fires for `order_id`.
    pub fn log_line(&self, order_id: &str) -> String {
        format!("{}: {}", self, order_id)
    }
}

/// Steps of the fulfilment progress strip, in display order.
pub const STATUS_STEPS: &[&str] = &[
    "Xác nhận",
    "Vận chuyển",
    "Đánh giá người mua",
    "Hoàn thành",
];

/// Index into [`STATUS_STEPS`] of the step highlighted on pending orders.
pub const ACTIVE_STATUS_STEP: usize = 0;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mock_ids_are_unique_and_one_based() {
        let orders = mock_orders(SELLER_SCREEN_ORDER_COUNT);
        assert_eq!(orders.len(), 6);
        assert_eq!(orders[0].id, "order-1");
        assert_eq!(orders[5].id, "order-6");

        let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn mock_orders_differ_only_by_id() {
        let orders = mock_orders(ORDER_PAGE_ORDER_COUNT);
        for order in &orders {
            assert_eq!(
                OrderSummary {
                    id: String::new(),
                    ..order.clone()
                },
                OrderSummary::default()
            );
        }
    }

    #[test]
    fn zero_orders_is_an_empty_list() {
        assert!(mock_orders(0).is_empty());
    }

    #[test]
    fn action_log_lines() {
        assert_eq!(OrderAction::Confirm.log_line("order-3"), "Confirmed: order-3");
        assert_eq!(OrderAction::Reject.log_line("order-3"), "Rejected: order-3");
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let order: OrderSummary =
            serde_json::from_str(r#"{"id":"order-9","price":"1 vnđ"}"#).unwrap();
        assert_eq!(order.id, "order-9");
        assert_eq!(order.price, "1 vnđ");
        assert_eq!(order.seller_name, OrderSummary::default().seller_name);
    }

    #[test]
    fn strings_are_kept_verbatim() {
        let order = OrderSummary {
            price: "".to_string(),
            seller_name: "<b>shop</b>".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&order).unwrap();
        let back: OrderSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
