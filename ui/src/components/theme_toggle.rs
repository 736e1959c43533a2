// File: src/components/theme_toggle.rs
use crate::app_state_mut::AppStateMut;
use dioxus::prelude::*;

/// Fixed top-right button flipping the application theme.
///
/// Reads and writes the theme through the [`AppStateMut`] context, so it must
/// be rendered below the application root.
#[component]
pub fn ThemeToggle() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let theme = *app_state_mut.theme.read();

    rsx! {
        button {
            class: "fixed top-4 right-4 z-50 px-4 py-2 rounded-lg bg-bg-primary hover:bg-bg-primary-hover active:bg-bg-primary-press text-content-on-action text-action-medium transition-colors shadow-lg",
            title: "{theme.toggle_title()}",
            onclick: move |_| app_state_mut.toggle_theme(),
            {theme.toggle_icon()}
        }
    }
}
