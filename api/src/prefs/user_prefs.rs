use crate::theme::Theme;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// Represents all user prefs. Intended for a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    theme: Theme,
}

impl UserPrefs {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Builds prefs from an optional theme setting.
    ///
    /// The setting is case-insensitive ("light" or "dark"). Anything else,
    /// including no setting at all, yields the light theme.
    pub fn from_theme_setting(setting: Option<&str>) -> Self {
        let theme = setting
            .and_then(|s| Theme::from_str(s.trim()).ok())
            .unwrap_or_default();
        Self { theme }
    }
}

impl Default for UserPrefs {
    /// Reads `ORDER_LIST_THEME` at compile time.
    fn default() -> Self {
        Self::from_theme_setting(option_env!("ORDER_LIST_THEME"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_invalid_setting_is_light() {
        assert_eq!(UserPrefs::from_theme_setting(None).theme(), Theme::Light);
        assert_eq!(UserPrefs::from_theme_setting(Some("blue")).theme(), Theme::Light);
        assert_eq!(UserPrefs::from_theme_setting(Some("")).theme(), Theme::Light);
    }

    #[test]
    fn setting_is_case_insensitive() {
        assert_eq!(UserPrefs::from_theme_setting(Some("Dark")).theme(), Theme::Dark);
        assert_eq!(UserPrefs::from_theme_setting(Some(" LIGHT ")).theme(), Theme::Light);
    }

    #[test]
    fn json_shape() {
        let prefs = UserPrefs::from_theme_setting(Some("dark"));
        assert_eq!(serde_json::to_string(&prefs).unwrap(), r#"{"theme":"dark"}"#);
    }
}
