// File: src/components/header.rs
use dioxus::prelude::*;

const IMG_LOGO: &str = "https://www.figma.com/api/mcp/asset/54dd4168-27d3-408e-9459-2550cbb8fe53";
const IMG_PROFILE: &str = "https://www.figma.com/api/mcp/asset/52509665-84d9-4a82-bc75-ffde5756c309";
const IMG_CATEGORY_ICON: &str =
    "https://www.figma.com/api/mcp/asset/95cfe607-c525-4aef-a6df-341e055f8619";
const IMG_CATEGORY_CHEVRON: &str =
    "https://www.figma.com/api/mcp/asset/e56f71b3-3e16-48e1-9b10-89c00dcff388";
const IMG_LEAF_MASK: &str = "https://www.figma.com/api/mcp/asset/49a40ebc-8461-4537-9ccf-c42552b11c33";
const IMG_LEAF: &str = "https://www.figma.com/api/mcp/asset/5c80193d-a3b0-4bcd-92f3-3e78e863e87a";
const IMG_REFUND: &str = "https://www.figma.com/api/mcp/asset/49b30c8e-791b-4422-8a84-b9cce3c6288b";
const IMG_VN_FLAG: &str = "https://www.figma.com/api/mcp/asset/49f816df-785e-48d3-8d3d-63c0a183ef2d";
const IMG_LANGUAGE_CHEVRON: &str =
    "https://www.figma.com/api/mcp/asset/dfd7df97-de8d-402c-8648-ffc6256548c2";
const IMG_SUPPORT: &str = "https://www.figma.com/api/mcp/asset/190fe780-bb45-4e25-968a-dd94a7b49e2d";
const IMG_SEARCH: &str = "https://www.figma.com/api/mcp/asset/157e2028-84c9-438f-bfd8-b6b2c03f0b59";
const IMG_PROFILE_CHEVRON: &str =
    "https://www.figma.com/api/mcp/asset/d370fc54-ccb8-4a24-8829-5e9f3d7ad1bd";
const IMG_ACTION_1: &str = "https://www.figma.com/api/mcp/asset/fcd1e906-ae2c-4d39-b153-53ac2b12fc7e";
const IMG_ACTION_2: &str = "https://www.figma.com/api/mcp/asset/b38bd812-e46b-423f-a6d2-05d4a095414f";

/// Marketplace categories. The first one carries icons and is set apart by a
/// divider.
pub const CATEGORIES: &[&str] = &[
    "Tất cả danh mục",
    "Sách",
    "Xe cộ",
    "Đồ cho nam",
    "Thời trang nữ",
    "Đồ cho mẹ và bé",
    "Đồ làm đẹp",
    "Đồ chơi & trò chơi",
    "Đồ thể thao & dã ngoại",
    "Đồ dùng nhà cửa",
    "Thiết bị điện tử",
];

/// Fully static top bar: promo strip, logo/search/profile row, categories.
#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            PromoStrip {}
            div {
                class: "bg-bg-surface flex flex-col gap-3 px-20 py-6",
                div {
                    class: "flex items-center gap-20 w-full",
                    div {
                        class: "flex flex-1 items-center gap-4",
                        div {
                            class: "py-2",
                            div {
                                class: "w-[81px] h-6",
                                img { src: IMG_LOGO, alt: "Oreka", class: "w-full h-full object-contain" }
                            }
                        }
                        div {
                            class: "flex-1 bg-bg-neutral-light border border-border-surface rounded-sm flex items-center justify-between p-2.5",
                            p { class: "text-body-regular text-content-neutral-strong", "Tìm trên Oreka" }
                            div {
                                class: "w-5 h-5",
                                img { src: IMG_SEARCH, alt: "Search", class: "w-full h-full" }
                            }
                        }
                    }
                    div {
                        class: "flex items-center justify-end gap-1",
                        div {
                            class: "flex items-center gap-1 p-2",
                            div {
                                class: "w-6 h-6 rounded-full overflow-hidden",
                                img {
                                    src: IMG_PROFILE,
                                    alt: "Profile",
                                    class: "w-full h-full object-cover",
                                    style: "object-position: -39.21% 0;",
                                }
                            }
                            div {
                                class: "py-0.5",
                                p { class: "text-body-regular text-content-neutral-strong", "Seller test (user)" }
                            }
                            div {
                                class: "p-0.5",
                                div {
                                    class: "w-5 h-5",
                                    img { src: IMG_PROFILE_CHEVRON, alt: "", class: "w-full h-full" }
                                }
                            }
                        }
                        for icon in [IMG_ACTION_1, IMG_ACTION_2] {
                            div {
                                key: "{icon}",
                                class: "p-2 rounded-sm",
                                div {
                                    class: "p-1",
                                    div {
                                        class: "w-4 h-4",
                                        img { src: icon, alt: "", class: "w-full h-full" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "bg-bg-primary px-10 py-2 rounded-sm",
                            p { class: "text-action-large-medium text-content-on-action text-center", "Đăng bán" }
                        }
                    }
                }
                CategoryStrip {}
            }
        }
    }
}

#[component]
fn PromoStrip() -> Element {
    rsx! {
        div {
            class: "bg-accent-green-light flex items-center justify-between px-20 py-3",
            div {
                class: "flex flex-wrap items-center gap-2",
                div {
                    class: "flex items-center gap-1",
                    div {
                        class: "w-5 h-5",
                        div {
                            class: "w-full h-full",
                            style: "mask-image: url('{IMG_LEAF_MASK}');",
                            img { src: IMG_LEAF, alt: "", class: "w-full h-full object-cover" }
                        }
                    }
                    p {
                        class: "text-body-regular text-content-neutral",
                        "Oreka - Nền tảng mua bán đồ cũ vì một trái đất xanh hơn!"
                    }
                }
                div {
                    class: "px-2",
                    p { class: "text-body-regular text-content-neutral", "•" }
                }
                div {
                    class: "flex items-center gap-1",
                    div {
                        class: "w-4 h-4",
                        img { src: IMG_REFUND, alt: "", class: "w-full h-full object-cover" }
                    }
                    p {
                        class: "text-body-regular text-content-neutral",
                        "Cam kết hoàn tiền 100% nếu sản phẩm không đúng mô tả!"
                    }
                }
            }
            div {
                class: "flex items-center gap-2",
                div {
                    class: "flex items-center gap-0",
                    div {
                        class: "py-0.5",
                        div {
                            class: "w-6 h-4",
                            img { src: IMG_VN_FLAG, alt: "VN", class: "w-full h-full object-cover" }
                        }
                    }
                    div {
                        class: "w-5 h-5",
                        img { src: IMG_LANGUAGE_CHEVRON, alt: "", class: "w-full h-full object-cover" }
                    }
                }
                div { class: "w-px h-5 bg-accent-gray-light" }
                div {
                    class: "flex items-center gap-0",
                    div {
                        class: "p-0.5",
                        img { src: IMG_SUPPORT, alt: "", class: "w-4 h-4" }
                    }
                    p { class: "text-body-regular text-content-neutral text-center", "Hỗ trợ" }
                }
            }
        }
    }
}

#[component]
fn CategoryStrip() -> Element {
    let (first, rest) = CATEGORIES.split_at(1);

    rsx! {
        div {
            class: "flex items-center gap-2 overflow-x-auto w-full",
            div {
                class: "flex items-center gap-1 p-2",
                div {
                    class: "w-5 h-5",
                    img { src: IMG_CATEGORY_ICON, alt: "", class: "w-full h-full" }
                }
                p { class: "text-body-regular text-content-neutral-strong whitespace-nowrap", {first[0]} }
                div {
                    class: "w-5 h-5",
                    img { src: IMG_CATEGORY_CHEVRON, alt: "", class: "w-full h-full" }
                }
            }
            div { class: "h-9 w-px bg-accent-gray-light" }
            for category in rest.iter() {
                div {
                    key: "{category}",
                    class: "p-2",
                    p { class: "text-body-regular text-content-neutral-strong whitespace-nowrap", "{category}" }
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
    fn every_category_is_listed() {
        let html = render(Header);
        for category in CATEGORIES.iter().filter(|c| !c.contains('&')) {
            assert!(html.contains(&format!(">{category}<")), "{category}");
        }
        assert!(html.contains("Đăng bán"));
        assert!(html.contains("Seller test (user)"));
    }
}
