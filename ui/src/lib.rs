// The client-side Dioxus application logic.

use dioxus::prelude::*;
use strum::IntoEnumIterator;

mod app_state_mut;
mod components;
pub mod hooks;
mod screens;
#[cfg(test)]
mod test_util;

use api::prefs::user_prefs::UserPrefs;
use app_state_mut::AppStateMut;
use components::theme_toggle::ThemeToggle;
use hooks::use_theme_attribute::use_theme_attribute;
use screens::order_list_page::OrderListPage;
use screens::seller_order_list::SellerOrderListScreen;

/// The two renditions of the order list shipped with the app.
#[derive(Clone, Copy, PartialEq, Default, Debug, strum::EnumIter)]
enum Screen {
    #[default]
    SellerOrderList,
    OrderListPage,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::SellerOrderList => "Seller screen",
            Screen::OrderListPage => "Order page",
        }
    }
}

/// Switches between screen variants. Only rendered when the app is built
/// with `VARIANT_TOGGLE=1`.
#[component]
fn ScreenSwitcher(mut active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "fixed bottom-4 right-4 z-50 flex gap-2",
            for screen in Screen::iter() {
                button {
                    class: if active_screen() == screen { "px-3 py-1.5 rounded-sm bg-bg-primary text-content-on-action" } else { "px-3 py-1.5 rounded-sm border border-border-primary text-content-primary" },
                    "aria-current": if active_screen() == screen { "page" } else { "false" },
                    onclick: move |_| active_screen.set(screen),
                    "{screen.name()}"
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/tailwind.css"),
        }
        AppBody {}
    }
}

/// Owns the process-wide theme and picks the screen to show.
#[component]
fn AppBody() -> Element {
    let theme = use_signal(|| UserPrefs::default().theme());

    // Provide the theme to every descendant; only ThemeToggle writes it.
    use_context_provider(|| AppStateMut { theme });
    use_theme_attribute(theme);

    let active_screen = use_signal(Screen::default);

    rsx! {
        ThemeToggle {}
        if option_env!("VARIANT_TOGGLE") == Some("1") {
            ScreenSwitcher { active_screen }
        }
        match active_screen() {
            Screen::SellerOrderList => rsx! {
                SellerOrderListScreen {}
            },
            Screen::OrderListPage => rsx! {
                OrderListPage {}
            },
        }
    }
}
