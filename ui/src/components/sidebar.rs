// File: src/components/sidebar.rs
//
// Static navigation trees. Nothing here is wired to a handler: links only
// change on hover, and the active entry is a literal flag on the data.

use api::nav::NavEntry;
use api::nav::ORDER_PAGE_NAV;
use api::nav::PAGE_PROFILE_NAME;
use api::nav::SELLER_PROFILE_NAME;
use api::nav::SELLER_SCREEN_NAV;
use dioxus::prelude::*;

const IMG_AVATAR: &str = "https://www.figma.com/api/mcp/asset/1468e739-128c-4015-948a-b72e5bad83a2";
const IMG_NAV_ICON: &str = "https://www.figma.com/api/mcp/asset/8eaf22c7-1e21-4659-bccd-84ce9d5cfe4d";
const IMG_NAV_ICON_ACTIVE: &str =
    "https://www.figma.com/api/mcp/asset/675729de-4add-403b-8152-96a1adc0ac4c";
const IMG_PAGE_AVATAR: &str =
    "https://www.figma.com/api/mcp/asset/316f77e3-d0e0-4214-8fe4-9c3904a3365b";

/// Sidebar of the seller order list screen: profile, then four groups
/// separated by hairlines.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "w-[250px] flex-shrink-0 flex flex-col gap-6",
            div {
                class: "flex items-center gap-2 w-full",
                div {
                    class: "w-12 h-12 rounded-full overflow-hidden flex-shrink-0",
                    img {
                        src: IMG_AVATAR,
                        alt: "Profile",
                        class: "w-full h-full object-cover",
                        style: "object-position: -39.21% 0; transform: scale(1.7842);",
                    }
                }
                div {
                    class: "flex-1 min-w-0",
                    p {
                        class: "text-body-large-bold text-content-neutral-strong max-h-12 overflow-hidden text-ellipsis",
                        {SELLER_PROFILE_NAME}
                    }
                }
            }
            for (i, group) in SELLER_SCREEN_NAV.iter().enumerate() {
                if i > 0 {
                    div { class: "w-full h-px bg-accent-gray-light" }
                }
                div {
                    class: "flex flex-col w-full",
                    for entry in group.iter().copied() {
                        if entry.is_title {
                            SectionTitle { key: "{entry.id}", label: entry.label }
                        } else {
                            NavItem { key: "{entry.id}", entry }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry) -> Element {
    let row_class = if entry.is_active {
        "flex items-center gap-2.5 p-2.5 w-full bg-bg-surface border-l-2 border-border-selected-orange rounded-r-full"
    } else {
        "flex items-center gap-2.5 p-2.5 w-full"
    };
    let label_class = if entry.is_active {
        "text-body-regular flex-1 text-content-selected-orange"
    } else {
        "text-body-regular flex-1 text-content-neutral-strong"
    };
    let icon = if entry.is_active { IMG_NAV_ICON_ACTIVE } else { IMG_NAV_ICON };

    rsx! {
        div {
            class: "{row_class}",
            "aria-current": if entry.is_active { "page" } else { "false" },
            div {
                class: "w-5 h-5 flex-shrink-0",
                img { src: icon, alt: "", class: "w-full h-full" }
            }
            p { class: "{label_class}", "{entry.label}" }
        }
    }
}

#[component]
fn SectionTitle(label: &'static str) -> Element {
    rsx! {
        div {
            class: "py-1.5",
            p { class: "text-h4-bold text-content-neutral-strong", {label} }
        }
    }
}

/// Sidebar of the standalone order page: a sticky card with emoji links.
#[component]
pub fn PageSidebar() -> Element {
    rsx! {
        aside {
            class: "w-[250px] flex-shrink-0",
            div {
                class: "bg-bg-surface rounded-lg p-4 sticky top-4",
                div {
                    class: "flex items-center gap-3 pb-4 mb-2 border-b border-border-surface",
                    img {
                        src: IMG_PAGE_AVATAR,
                        alt: "Profile",
                        class: "w-12 h-12 rounded-full object-cover",
                    }
                    p { class: "text-body-bold text-content-neutral-strong", {PAGE_PROFILE_NAME} }
                }
                for group in ORDER_PAGE_NAV.iter() {
                    nav {
                        class: "flex flex-col gap-1 py-2",
                        for entry in group.iter().copied() {
                            PageNavEntry { key: "{entry.id}", entry }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PageNavEntry(entry: NavEntry) -> Element {
    if entry.is_title {
        return rsx! {
            div {
                class: "px-4 py-2",
                h3 { class: "text-body-semibold text-content-neutral", "{entry.label}" }
            }
        };
    }

    let class = if entry.is_active {
        "w-full flex items-center gap-3 px-4 py-2.5 rounded-md text-body-regular text-left transition-colors bg-bg-primary-light text-content-primary"
    } else {
        "w-full flex items-center gap-3 px-4 py-2.5 rounded-md text-body-regular text-left transition-colors text-content-neutral hover:bg-bg-canvas"
    };

    rsx! {
        button {
            class: "{class}",
            "aria-current": if entry.is_active { "page" } else { "false" },
            if let Some(icon) = entry.icon {
                span { class: "text-lg", "{icon}" }
            }
            span { "{entry.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    fn link_count(tree: &[&[NavEntry]]) -> usize {
        tree.iter()
            .flat_map(|group| group.iter())
            .filter(|entry| !entry.is_title)
            .count()
    }

    #[test]
    fn seller_sidebar_marks_one_entry_active() {
        let html = render(Sidebar);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches("aria-current=").count(), link_count(SELLER_SCREEN_NAV));
        assert!(html.contains("Đơn bán"));
        assert!(html.contains("Đăng xuất"));
    }

    #[test]
    fn page_sidebar_renders_titles_as_text() {
        let html = render(PageSidebar);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert_eq!(html.matches("<button").count(), link_count(ORDER_PAGE_NAV));
        assert!(html.contains("Tài chính"));
        assert!(html.contains("📦"));
    }
}
