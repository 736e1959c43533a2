// File: src/components/filters.rs
//
// Search, date and filter controls above the order list. Only the search
// field is live: it forwards every keystroke verbatim. The date field and
// the filter button are placeholders and emit nothing.

use dioxus::prelude::*;

const SEARCH_PLACEHOLDER: &str = "Tìm trên Oreka";
const DATE_PLACEHOLDER: &str = "Ngày đặt hàng";

const IMG_SEARCH: &str = "https://www.figma.com/api/mcp/asset/bd55370c-44f9-48dc-8cec-33865e9304ef";
const IMG_CALENDAR: &str = "https://www.figma.com/api/mcp/asset/52d20e84-a9f3-458c-bef0-ef2d4cf94759";
const IMG_FILTER: &str = "https://www.figma.com/api/mcp/asset/c801c8d1-0891-451d-b083-39fe5697d11d";

const FIELD_CLASS: &str = "w-full px-2.5 py-2 pr-10 border border-border-surface rounded-md bg-bg-surface text-body-regular text-content-neutral placeholder:text-content-neutral-light focus:outline-none focus:ring-2 focus:ring-border-primary";

/// Boxed inputs with inline SVG icons, as on the standalone order page.
#[component]
pub fn Filters(search_query: String, on_search_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4",
            div {
                class: "relative w-[250px]",
                input {
                    r#type: "text",
                    class: "{FIELD_CLASS}",
                    placeholder: SEARCH_PLACEHOLDER,
                    value: "{search_query}",
                    oninput: move |evt| on_search_change.call(evt.value()),
                }
                button {
                    class: "absolute right-2.5 top-1/2 -translate-y-1/2",
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 20 20",
                        fill: "none",
                        class: "text-content-neutral-light",
                        path {
                            d: "M9 17A8 8 0 1 0 9 1a8 8 0 0 0 0 16zM18 18l-4.35-4.35",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                }
            }
            div {
                class: "relative w-[250px]",
                input {
                    r#type: "text",
                    class: "{FIELD_CLASS} cursor-pointer",
                    placeholder: DATE_PLACEHOLDER,
                    readonly: true,
                }
                button {
                    class: "absolute right-2.5 top-1/2 -translate-y-1/2",
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 20 20",
                        fill: "none",
                        class: "text-content-neutral-light",
                        rect {
                            x: "3",
                            y: "4",
                            width: "14",
                            height: "14",
                            rx: "2",
                            stroke: "currentColor",
                            stroke_width: "2",
                        }
                        path {
                            d: "M7 2v4M13 2v4M3 8h14",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                        }
                    }
                }
            }
            button {
                class: "flex items-center justify-center gap-2 px-4 py-2 rounded-md border border-border-surface bg-bg-surface text-body-medium text-content-neutral hover:bg-bg-canvas transition-colors",
                svg {
                    width: "20",
                    height: "20",
                    view_box: "0 0 20 20",
                    fill: "none",
                    class: "text-content-neutral",
                    path {
                        d: "M2 5h16M5 10h10M8 15h4",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                    }
                }
            }
        }
    }
}

/// Rounded "pill" inputs with image icons, as on the seller screen.
#[component]
pub fn PillFilters(search_query: String, on_search_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-1.5",
            div {
                class: "flex flex-wrap items-center gap-4 overflow-hidden min-w-[516px]",
                div {
                    class: "flex-1 min-w-[250px] border border-border-surface rounded-full flex items-center justify-between p-2.5",
                    input {
                        r#type: "text",
                        placeholder: SEARCH_PLACEHOLDER,
                        value: "{search_query}",
                        oninput: move |evt| on_search_change.call(evt.value()),
                        class: "text-body-regular text-content-neutral-strong bg-transparent border-none outline-none flex-1",
                    }
                    div {
                        class: "w-5 h-5 flex-shrink-0",
                        img { src: IMG_SEARCH, alt: "Search", class: "w-full h-full" }
                    }
                }
                div {
                    class: "flex-1 min-w-[250px] border border-border-surface rounded-full flex items-center justify-between p-2.5",
                    p { class: "text-body-regular text-content-neutral-strong", {DATE_PLACEHOLDER} }
                    div {
                        class: "w-5 h-5 flex items-center justify-center py-1 px-px",
                        div {
                            class: "w-[17.5px] h-3.5",
                            img { src: IMG_CALENDAR, alt: "Calendar", class: "w-full h-full" }
                        }
                    }
                }
            }
            div {
                class: "bg-bg-tertiary rounded-full flex items-center justify-center px-8 py-2.5",
                div {
                    class: "w-5 h-5",
                    img { src: IMG_FILTER, alt: "Filter", class: "w-full h-full" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;
    use crate::test_util::EventDom;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Keystrokes = Rc<RefCell<Vec<String>>>;

    #[allow(non_snake_case)]
    fn TypedQuery() -> Element {
        rsx! {
            Filters { search_query: "giày  da ", on_search_change: |_| {} }
        }
    }

    #[allow(non_snake_case)]
    fn EmptyPillQuery() -> Element {
        rsx! {
            PillFilters { search_query: "", on_search_change: |_| {} }
        }
    }

    #[test]
    fn field_shows_query_untrimmed() {
        let html = render(TypedQuery);
        assert!(html.contains(r#"value="giày  da ""#));
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert!(html.contains(DATE_PLACEHOLDER));
    }

    #[test]
    fn pill_variant_has_placeholders() {
        let html = render(EmptyPillQuery);
        assert!(html.contains(SEARCH_PLACEHOLDER));
        assert!(html.contains(DATE_PLACEHOLDER));
        assert!(html.contains(IMG_FILTER));
    }

    fn live_search(seen: Keystrokes) -> Element {
        let mut query = use_signal(String::new);
        rsx! {
            Filters {
                search_query: query(),
                on_search_change: move |value: String| {
                    seen.borrow_mut().push(value.clone());
                    query.set(value);
                },
            }
        }
    }

    #[test]
    fn every_keystroke_is_forwarded_verbatim() {
        let seen = Keystrokes::default();
        let mut dom = EventDom::new(live_search, seen.clone());

        // the date field and filter button have no listeners
        let inputs = dom.listeners("input");
        assert_eq!(inputs.len(), 1);
        assert!(dom.listeners("click").is_empty());

        let typed = ["a", "ab", "ab ", "  ab  ", ""];
        for value in typed {
            dom.input(inputs[0], value);
        }
        assert_eq!(*seen.borrow(), typed);

        dom.input(inputs[0], "giày");
        assert!(dom.html().contains(r#"value="giày""#));
    }
}
