// File: src/components/sort_select.rs
use api::sort::sort_label;
use api::sort::SORT_OPTIONS;
use dioxus::prelude::*;

const IMG_DROPDOWN: &str = "https://www.figma.com/api/mcp/asset/157e2028-84c9-438f-bfd8-b6b2c03f0b59";

/// A native `<select>` bound to the sort key.
#[component]
pub fn SortSelect(sort_key: String, on_sort_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2",
            span { class: "text-body-regular text-content-neutral", "Sắp xếp:" }
            select {
                value: "{sort_key}",
                onchange: move |evt| on_sort_change.call(evt.value()),
                class: "px-2.5 py-2 rounded-md border border-border-surface bg-bg-surface text-body-regular text-content-neutral focus:outline-none focus:ring-2 focus:ring-border-primary cursor-pointer",
                for choice in SORT_OPTIONS {
                    option {
                        key: "{choice.value}",
                        value: choice.value,
                        selected: choice.value == sort_key,
                        {choice.label}
                    }
                }
            }
        }
    }
}

/// Read-only pill showing the caption of the current sort key.
#[component]
pub fn SortDisplay(sort_key: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2",
            div {
                class: "h-10 flex items-center",
                p { class: "text-body-regular text-content-neutral", "Sắp xếp:" }
            }
            div {
                class: "border border-border-surface rounded-full flex items-center justify-between p-2.5 w-[250px]",
                p { class: "text-body-regular text-content-neutral-strong", {sort_label(&sort_key)} }
                div {
                    class: "w-5 h-5",
                    img { src: IMG_DROPDOWN, alt: "Dropdown", class: "w-full h-full" }
                }
            }
        }
    }
}
