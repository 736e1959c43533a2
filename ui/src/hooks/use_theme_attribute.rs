//=============================================================================
// File: src/hooks/use_theme_attribute.rs
//=============================================================================

// Writes the active theme onto the document element so the stylesheet's
// `[data-theme=...]` selectors pick it up. Platform selection follows the
// same cfg split as the other platform-specific code in this crate.

use api::theme::Theme;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use self::wasm32::apply_theme_attribute;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub use self::webview::apply_theme_attribute;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no document element to attach the theme to")]
    NoDocument,
    #[error("setting `{attribute}` failed: {reason}")]
    SetAttribute {
        attribute: &'static str,
        reason: String,
    },
}

/// Re-applies the theme attribute whenever `theme` changes.
///
/// A failure is logged and otherwise ignored: the page keeps rendering in
/// whatever theme the document already has.
pub fn use_theme_attribute(theme: Signal<Theme>) {
    use_effect(move || {
        let theme = theme();
        spawn(async move {
            if let Err(e) = apply_theme_attribute(theme).await {
                warn!("could not apply theme {}: {}", theme, e);
            }
        });
    });
}

/// The script that sets the theme attribute on `<html>`.
pub fn theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.setAttribute('{}', '{}');",
        Theme::ATTRIBUTE,
        theme.attribute_value()
    )
}

/// # WebAssembly (WASM) Implementation
/// Talks to the DOM directly through `web_sys`.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod wasm32 {
    use super::ThemeError;
    use api::theme::Theme;

    pub async fn apply_theme_attribute(theme: Theme) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or(ThemeError::NoDocument)?;

        root.set_attribute(Theme::ATTRIBUTE, theme.attribute_value())
            .map_err(|e| ThemeError::SetAttribute {
                attribute: Theme::ATTRIBUTE,
                reason: e.as_string().unwrap_or_default(),
            })
    }
}

/// # Desktop / Fallback Implementation
/// Evaluates a one-line script in whatever document the renderer provides.
/// Renderers that cannot evaluate scripts (SSR, tests) report an error.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
mod webview {
    use super::theme_script;
    use super::ThemeError;
    use api::theme::Theme;
    use dioxus::prelude::*;

    pub async fn apply_theme_attribute(theme: Theme) -> Result<(), ThemeError> {
        document::eval(&theme_script(theme))
            .await
            .map(|_| ())
            .map_err(|e| ThemeError::SetAttribute {
                attribute: Theme::ATTRIBUTE,
                reason: e.to_string(),
            })
    }
}
