//! The two visual modes a page can be in.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Glyph shown on the control while the page is dark (click to go light).
pub const SUN_GLYPH: &str = "☀️";
/// Glyph shown on the control while the page is light (click to go dark).
pub const MOON_GLYPH: &str = "🌙";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String form used in storage and as the default class name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme implied by the presence of the dark class on the root.
    #[must_use]
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}
