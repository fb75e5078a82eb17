//! Theme controller: keeps the stored preference, the root class, and the
//! control label in step.
//!
//! Two entry points are driven by the host's event loop: [`ThemeController::initialize`]
//! once when the page is ready, and [`ThemeController::on_toggle_click`] per
//! click. Both run synchronously to completion.

use crate::config::ThemeConfig;
use crate::host::{ControlLabel, PreferenceStore, RootClasses};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, R, C> {
    config: ThemeConfig,
    store: S,
    root: R,
    control: C,
}

impl<S, R, C> ThemeController<S, R, C>
where
    S: PreferenceStore,
    R: RootClasses,
    C: ControlLabel,
{
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, root: R, control: C) -> Self {
        Self { config, store, root, control }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Apply the stored preference, if any.
    ///
    /// Returns the applied theme. An absent or unrecognized value leaves the
    /// page in its default light state and returns `None`.
    pub fn initialize(&self) -> Option<Theme> {
        let raw = self.store.load(&self.config.storage_key)?;
        let theme = match raw.parse::<Theme>() {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("ignoring stored {}: {err}", self.config.storage_key);
                return None;
            }
        };
        self.root.add(self.config.class_for(theme));
        self.update_label(theme);
        log::debug!("applied stored theme {theme}");
        Some(theme)
    }

    /// Flip the dark class, persist the resulting theme, and relabel.
    pub fn on_toggle_click(&self) -> Theme {
        let theme = Theme::from_dark_flag(self.root.toggle(&self.config.dark_class));
        self.store.save(&self.config.storage_key, theme.as_str());
        self.update_label(theme);
        log::debug!("theme toggled to {theme}");
        theme
    }

    /// Show the glyph that offers the opposite of `theme`.
    pub fn update_label(&self, theme: Theme) {
        self.control.set_label(self.config.label_for(theme));
    }

    /// Theme currently shown, read from the root's dark class.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        Theme::from_dark_flag(self.root.contains(&self.config.dark_class))
    }
}
