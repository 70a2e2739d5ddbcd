//! Theme preference — the persisted light/dark display mode.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Key under which the preference is persisted in browser-local storage.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root element when the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Light or dark display mode. Defaults to [`Light`](Self::Light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The opposite preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a raw stored value.
    ///
    /// Missing or unrecognised values fall back to the default preference,
    /// so a corrupted entry never blocks rendering.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn should_toggle_between_light_and_dark() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }

    #[test]
    fn should_return_to_original_after_two_toggles() {
        let theme = ThemePreference::Dark;
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn should_parse_stored_values() {
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
    }

    #[test]
    fn should_reject_unknown_value() {
        let result = "Dark".parse::<ThemePreference>();
        assert_eq!(result, Err(ParseError::UnknownTheme("Dark".to_string())));
    }

    #[test]
    fn should_fall_back_to_light_when_stored_value_is_missing_or_unknown() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
        assert_eq!(
            ThemePreference::from_stored(Some("sepia")),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_stored(Some("dark")),
            ThemePreference::Dark
        );
    }
}
