//! Static sidebar navigation trees for both screen variants.

/// One row of a sidebar group: either a section title or a link.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub is_active: bool,
    /// Section headers are rendered as plain text and are not clickable.
    pub is_title: bool,
}

impl NavEntry {
    pub const fn link(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            icon: None,
            is_active: false,
            is_title: false,
        }
    }

    pub const fn title(id: &'static str, label: &'static str) -> Self {
        Self {
            is_title: true,
            ..Self::link(id, label)
        }
    }

    pub const fn with_icon(self, icon: &'static str) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }

    pub const fn active(self) -> Self {
        Self {
            is_active: true,
            ..self
        }
    }
}

/// Display name on the seller screen's profile block.
pub const SELLER_PROFILE_NAME: &str = "Seller Name Just 2 line, if longer it be showed like this...";

/// Display name on the order page's profile block.
pub const PAGE_PROFILE_NAME: &str = "Seller Vi1 store";

/// Groups of the seller order list screen sidebar, separated by dividers.
pub const SELLER_SCREEN_NAV: &[&[NavEntry]] = &[
    &[
        NavEntry::link("profile", "Hồ sơ của tôi"),
        NavEntry::link("messages", "Tin nhắn"),
        NavEntry::link("wallet", "Tiền của tôi"),
        NavEntry::link("notifications", "Thông báo"),
        NavEntry::link("my-reviews", "Đánh giá của tôi"),
    ],
    &[
        NavEntry::title("selling-title", "Bán hàng"),
        NavEntry::link("add-product", "Thêm sản phẩm"),
        NavEntry::link("all-products", "Tất cả sản phẩm"),
        NavEntry::link("orders", "Đơn bán").active(),
        NavEntry::link("shop-profile", "Hồ sơ shop"),
        NavEntry::link("api-connect", "Kết nối API"),
        NavEntry::link("faq", "Hỏi đáp"),
        NavEntry::link("identity", "Xác minh danh tính"),
    ],
    &[
        NavEntry::title("buying-title", "Mua hàng"),
        NavEntry::link("favorites", "Yêu thích"),
        NavEntry::link("purchases", "Đơn mua"),
    ],
    &[
        NavEntry::title("settings-title", "Cài đặt"),
        NavEntry::link("help-center", "Trung tâm trợ giúp"),
        NavEntry::link("feedback", "Đóng góp ý kiến"),
        NavEntry::link("logout", "Đăng xuất"),
    ],
];

/// Groups of the standalone order list page sidebar.
pub const ORDER_PAGE_NAV: &[&[NavEntry]] = &[
    &[
        NavEntry::link("dashboard", "Kênh người bán").with_icon("🏠"),
        NavEntry::link("orders", "Đơn bán").with_icon("📦").active(),
        NavEntry::link("products", "Sản phẩm").with_icon("📋"),
        NavEntry::link("revenue", "Doanh thu").with_icon("💰"),
        NavEntry::link("reviews", "Đánh giá của tôi").with_icon("⭐"),
    ],
    &[
        NavEntry::title("sales-title", "Bán hàng"),
        NavEntry::link("promotion", "Khuyến mãi").with_icon("🎁"),
        NavEntry::link("all-products", "Tất cả sản phẩm").with_icon("📦"),
        NavEntry::link("violations", "Sản phẩm vi phạm").with_icon("⚠️"),
        NavEntry::link("out-of-stock", "Sản phẩm hết hàng").with_icon("❌"),
        NavEntry::link("product-stats", "Thống kê sản phẩm").with_icon("📊"),
        NavEntry::link("return-refund", "Trả hàng/Hoàn tiền").with_icon("↩️"),
        NavEntry::link("shop-rating", "Đánh giá Shop").with_icon("⭐"),
    ],
    &[
        NavEntry::title("finance-title", "Tài chính"),
        NavEntry::link("revenue-stats", "Doanh thu").with_icon("💵"),
        NavEntry::link("balance", "Số dư TK Oreka").with_icon("💳"),
    ],
    &[
        NavEntry::title("account-title", "Cài đặt"),
        NavEntry::link("shop-profile", "Hồ sơ Shop").with_icon("👤"),
        NavEntry::link("shipping", "Vận chuyển").with_icon("🚚"),
        NavEntry::link("notifications", "Cài đặt thông báo").with_icon("🔔"),
    ],
];
