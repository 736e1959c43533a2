//! Defines the mutable, reactive state shared across the whole application.

use api::theme::Theme;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context by the application root.
///
/// Only the theme lives here. Per-screen state (tabs, search, sort) is owned
/// by each screen, see [`crate::hooks::use_order_list_state`].
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The presentation theme applied to the document element.
    pub theme: Signal<Theme>,
}

impl AppStateMut {
    /// Flips between light and dark. This is the theme's only mutator.
    pub fn toggle_theme(&mut self) {
        let next = self.theme.peek().toggled();
        dioxus_logger::tracing::debug!("theme -> {}", next);
        self.theme.set(next);
    }
}
