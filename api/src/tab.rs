//! Order-status tabs.
//!
//! Each screen variant has its own closed set of tabs. Which one is active is
//! never stored on the descriptor; it is decided by comparing ids with the
//! composition root's `active_tab_id`.

/// A single selectable order-status bucket.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub count: Option<u32>,
}

impl TabDescriptor {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            count: None,
        }
    }

    /// The same tab with a badge count shown next to its label.
    pub const fn with_count(self, count: u32) -> Self {
        Self {
            count: Some(count),
            ..self
        }
    }

    pub fn is_active(&self, active_tab_id: &str) -> bool {
        self.id == active_tab_id
    }
}

pub const DEFAULT_TAB_ID: &str = "all";

/// Tabs of the seller order list screen.
pub const SELLER_SCREEN_TABS: &[TabDescriptor] = &[
    TabDescriptor::new("all", "Tất cả"),
    TabDescriptor::new("pending", "Chờ xác nhận"),
    TabDescriptor::new("pickup", "Chờ giao hàng"),
    TabDescriptor::new("processing", "Đang xử lý"),
    TabDescriptor::new("review", "Đánh giá"),
    TabDescriptor::new("complaint", "Khiếu nại"),
    TabDescriptor::new("cancelled", "Đơn bị huỷ"),
    TabDescriptor::new("completed", "Hoàn thành"),
];

/// Tabs of the standalone order list page.
pub const ORDER_PAGE_TABS: &[TabDescriptor] = &[
    TabDescriptor::new("all", "Tất cả"),
    TabDescriptor::new("pending", "Chờ xác nhận"),
    TabDescriptor::new("pickup", "Chờ lấy hàng"),
    TabDescriptor::new("shipping", "Đang vận chuyển"),
    TabDescriptor::new("delivered", "Đang giao"),
    TabDescriptor::new("completed", "Hoàn thành"),
    TabDescriptor::new("cancelled", "Đơn hủy"),
    TabDescriptor::new("returned", "Trả hàng/Hoàn tiền"),
];

/// The tab in `tabs` matching `active_tab_id`, if any.
pub fn active_tab<'a>(tabs: &'a [TabDescriptor], active_tab_id: &str) -> Option<&'a TabDescriptor> {
    tabs.iter().find(|tab| tab.is_active(active_tab_id))
}
