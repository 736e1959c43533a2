// File: src/components/tabs.rs
use api::tab::TabDescriptor;
use dioxus::prelude::*;

/// Visual treatment of the tab strip. The behaviour is identical.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum TabStyle {
    /// Accent text plus an absolutely positioned bar under the active tab.
    #[default]
    Underline,
    /// Orange text and a bottom border on the active tab.
    Bordered,
}

/// A fixed row of order-status tabs.
///
/// The active tab is whichever descriptor's id equals `active_tab_id`; if
/// none does, no tab is highlighted. Every click reports the tab's id, also
/// when it is already active.
#[component]
pub fn Tabs(
    tabs: &'static [TabDescriptor],
    active_tab_id: String,
    on_tab_change: EventHandler<String>,
    #[props(default)] style: TabStyle,
) -> Element {
    let strip_class = match style {
        TabStyle::Underline => {
            "flex items-center gap-5 overflow-x-auto scrollbar-hide border-b border-border-surface"
        }
        TabStyle::Bordered => "border-b border-border-surface flex items-center gap-4 overflow-x-auto",
    };

    rsx! {
        div {
            class: "{strip_class}",
            role: "tablist",
            for tab in tabs.iter().copied() {
                TabButton {
                    key: "{tab.id}",
                    tab,
                    is_active: tab.is_active(&active_tab_id),
                    style,
                    on_select: move |id: &'static str| on_tab_change.call(id.to_string()),
                }
            }
        }
    }
}

#[component]
fn TabButton(
    tab: TabDescriptor,
    is_active: bool,
    style: TabStyle,
    on_select: EventHandler<&'static str>,
) -> Element {
    let (button_class, label_class) = match (style, is_active) {
        (TabStyle::Underline, true) => (
            "relative px-0 py-2.5 whitespace-nowrap text-body-medium transition-colors text-content-primary",
            "",
        ),
        (TabStyle::Underline, false) => (
            "relative px-0 py-2.5 whitespace-nowrap text-body-medium transition-colors text-content-neutral hover:text-content-neutral-strong",
            "",
        ),
        (TabStyle::Bordered, true) => (
            "flex flex-col items-center p-2.5 border-b border-border-selected-orange",
            "text-body-medium whitespace-nowrap text-center text-content-selected-orange",
        ),
        (TabStyle::Bordered, false) => (
            "flex flex-col items-center p-2.5",
            "text-body-medium whitespace-nowrap text-center text-content-neutral",
        ),
    };

    rsx! {
        button {
            class: "{button_class}",
            role: "tab",
            "aria-selected": if is_active { "true" } else { "false" },
            onclick: move |_| on_select.call(tab.id),
            match style {
                TabStyle::Underline => rsx! {
                    span { "{tab.label}" }
                    if let Some(count) = tab.count {
                        span { class: "ml-1.5 text-content-neutral-light", "({count})" }
                    }
                    if is_active {
                        div { class: "absolute bottom-0 left-0 right-0 h-0.5 bg-bg-primary" }
                    }
                },
                TabStyle::Bordered => rsx! {
                    p {
                        class: "{label_class}",
                        "{tab.label}"
                        if let Some(count) = tab.count {
                            span { class: "ml-1.5 text-content-neutral-light", "({count})" }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;
    use crate::test_util::EventDom;
    use api::tab::DEFAULT_TAB_ID;
    use api::tab::ORDER_PAGE_TABS;
    use api::tab::SELLER_SCREEN_TABS;
    use std::cell::RefCell;
    use std::rc::Rc;

    type ClickLog = Rc<RefCell<Vec<String>>>;

    const COUNTED: &[TabDescriptor] = &[
        ORDER_PAGE_TABS[0].with_count(12),
        ORDER_PAGE_TABS[1],
    ];

    #[allow(non_snake_case)]
    fn ReviewActive() -> Element {
        rsx! {
            Tabs {
                tabs: SELLER_SCREEN_TABS,
                active_tab_id: "review",
                on_tab_change: |_| {},
                style: TabStyle::Bordered,
            }
        }
    }

    #[allow(non_snake_case)]
    fn UnknownActive() -> Element {
        rsx! {
            Tabs {
                tabs: ORDER_PAGE_TABS,
                active_tab_id: "archived",
                on_tab_change: |_| {},
            }
        }
    }

    #[allow(non_snake_case)]
    fn WithCount() -> Element {
        rsx! {
            Tabs {
                tabs: COUNTED,
                active_tab_id: "all",
                on_tab_change: |_| {},
            }
        }
    }

    #[test]
    fn exactly_one_tab_selected() {
        let html = render(ReviewActive);
        assert_eq!(html.matches(r#"role="tab""#).count(), SELLER_SCREEN_TABS.len());
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches("text-content-selected-orange").count(), 1);
    }

    #[test]
    fn unknown_id_selects_nothing() {
        let html = render(UnknownActive);
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 0);
        assert!(!html.contains("bg-bg-primary"));
    }

    #[test]
    fn count_badge_is_rendered() {
        let html = render(WithCount);
        assert!(html.contains("(12)"));
        assert_eq!(html.matches("bg-bg-primary").count(), 1);
    }

    fn live_tabs(clicks: ClickLog) -> Element {
        let mut active = use_signal(|| DEFAULT_TAB_ID.to_string());
        rsx! {
            Tabs {
                tabs: ORDER_PAGE_TABS,
                active_tab_id: active(),
                on_tab_change: move |id: String| {
                    clicks.borrow_mut().push(id.clone());
                    active.set(id);
                },
            }
        }
    }

    /// Position of the selected tab within the strip.
    fn selected_index(html: &str) -> Option<usize> {
        html.split(r#"role="tab""#)
            .skip(1)
            .position(|tab| tab.contains(r#"aria-selected="true""#))
    }

    #[test]
    fn last_clicked_tab_is_the_only_active_one() {
        let clicks = ClickLog::default();
        let mut dom = EventDom::new(live_tabs, clicks.clone());
        assert_eq!(selected_index(&dom.html()), Some(0));

        let buttons = dom.listeners("click");
        assert_eq!(buttons.len(), ORDER_PAGE_TABS.len());

        for button in buttons.iter().rev() {
            dom.click(*button);
            let last = clicks.borrow().last().cloned().unwrap();
            let html = dom.html();
            assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
            assert_eq!(
                selected_index(&html),
                ORDER_PAGE_TABS.iter().position(|tab| tab.id == last)
            );
        }

        let mut distinct = clicks.borrow().clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), ORDER_PAGE_TABS.len());
    }

    #[test]
    fn clicking_the_active_tab_reports_it_again() {
        let clicks = ClickLog::default();
        let mut dom = EventDom::new(live_tabs, clicks.clone());
        let buttons = dom.listeners("click");

        dom.click(buttons[3]);
        dom.click(buttons[3]);

        let clicks = clicks.borrow();
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0], clicks[1]);
        assert_eq!(dom.html().matches(r#"aria-selected="true""#).count(), 1);
    }
}
