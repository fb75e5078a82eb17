//! Controller configuration.
//!
//! Every field has a default matching the stock page markup, so a page only
//! needs to supply the fields it changes. In the browser the JSON comes from
//! the text of an element with id [`CONFIG_ELEMENT_ID`], when present.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::{MOON_GLYPH, SUN_GLYPH, Theme};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// Id of the clickable control element.
    pub control_id: String,
    /// Class on the root element while dark.
    pub dark_class: String,
    /// Class added at startup when the stored preference is light.
    pub light_class: String,
    pub dark_label: String,
    pub light_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            dark_class: Theme::Dark.as_str().to_owned(),
            light_class: Theme::Light.as_str().to_owned(),
            dark_label: SUN_GLYPH.to_owned(),
            light_label: MOON_GLYPH.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON and
    /// [`ThemeError::InvalidConfig`] when a key, id, or class is empty.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from the text of the page's config element, if any.
    ///
    /// A missing element and one with blank text both mean "use defaults".
    ///
    /// # Errors
    ///
    /// Same as [`ThemeConfig::from_json`] for non-blank text.
    pub fn from_embedded(raw: Option<&str>) -> Result<Self, ThemeError> {
        match raw.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    /// Check that the fields used as DOM tokens and storage keys are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("control_id", &self.control_id),
            ("dark_class", &self.dark_class),
            ("light_class", &self.light_class),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ThemeError::InvalidConfig { field: *field }),
            None => Ok(()),
        }
    }

    /// Root class that represents `theme`.
    #[must_use]
    pub fn class_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_class,
            Theme::Dark => &self.dark_class,
        }
    }

    /// Control text shown while `theme` is active.
    #[must_use]
    pub fn label_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_label,
            Theme::Dark => &self.dark_label,
        }
    }
}
