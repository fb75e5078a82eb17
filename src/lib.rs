//! Persistent light/dark theme toggle for web pages.
//!
//! Built with the `browser` feature this crate compiles to WebAssembly and
//! attaches itself on load: it applies the theme saved in `localStorage` to
//! `<body>`, labels the `#theme-toggle` control, and flips the `dark` class
//! on each click, saving the new choice. Without the feature only the
//! host-independent controller is built, which is what the tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The [`Theme`] enum and its string/glyph forms |
//! | [`config`] | [`ThemeConfig`]: storage key, control id, classes, glyphs |
//! | [`controller`] | [`ThemeController`]: initialize, toggle, relabel |
//! | [`host`] | Collaborator traits and in-memory implementations |
//! | [`error`] | [`ThemeError`] |
//! | `web` | `web-sys` implementations and event wiring (`browser` only) |

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod theme;
#[cfg(feature = "browser")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "browser")]
impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM entry point: install the panic hook and console logger, then mount.
///
/// # Errors
///
/// Returns the mount error as a `JsValue` so it surfaces in the console.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
    web::mount(None)?;
    Ok(())
}
