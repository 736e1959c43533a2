//! Light/dark presentation theme.

use serde::Deserialize;
use serde::Serialize;

/// The value written to the document's `data-theme` attribute.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name of the attribute set on the document element.
    pub const ATTRIBUTE: &'static str = "data-theme";

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn attribute_value(self) -> &'static str {
        self.into()
    }

    /// Glyph on the toggle button while this theme is showing.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Tooltip on the toggle button while this theme is showing.
    pub fn toggle_title(self) -> String {
        format!("Switch to {} mode", self.toggled())
    }
}
