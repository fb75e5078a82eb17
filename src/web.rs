//! Browser bindings: `localStorage`, the body class list, the toggle
//! control, and event registration.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A browser that refuses `localStorage` still gets a
//! working toggle; the choice just does not survive a reload.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DomTokenList, Element, Storage, Window};

use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{ControlLabel, PreferenceStore, RootClasses};

pub type WebThemeController = ThemeController<LocalStorage, ElementClasses, ElementLabel>;

/// `window.localStorage`, or nothing if the browser refuses it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("localStorage unavailable; theme will not persist");
                None
            }
            Err(err) => {
                log::warn!("localStorage blocked: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }
}

/// Class list of an element, normally `<body>`.
pub struct ElementClasses {
    list: DomTokenList,
}

impl ElementClasses {
    #[must_use]
    pub fn new(element: &Element) -> Self {
        Self { list: element.class_list() }
    }
}

impl RootClasses for ElementClasses {
    fn add(&self, class: &str) {
        if let Err(err) = self.list.add_1(class) {
            log::warn!("classList.add({class}) failed: {err:?}");
        }
    }

    fn toggle(&self, class: &str) -> bool {
        match self.list.toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("classList.toggle({class}) failed: {err:?}");
                self.list.contains(class)
            }
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.list.contains(class)
    }
}

/// Text content of the toggle control.
pub struct ElementLabel {
    element: Element,
}

impl ElementLabel {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ControlLabel for ElementLabel {
    fn set_label(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Attach the controller once the document is ready.
///
/// With `config` of `None` the config is read from the page (see
/// [`CONFIG_ELEMENT_ID`]) at attach time.
///
/// # Errors
///
/// Returns an error if there is no window or document, or if the ready
/// listener cannot be registered. When attaching runs immediately, lookup
/// failures for the body and control are returned too; when it is deferred
/// they are logged.
pub fn mount(config: Option<ThemeConfig>) -> Result<(), ThemeError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return attach(config).map(drop);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = attach(config) {
            log::error!("theme toggle not attached: {err}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|err| ThemeError::Listener {
            event: "DOMContentLoaded",
            reason: format!("{err:?}"),
        })
}

/// Build the controller, apply the stored preference, and wire the click
/// handler. The handler lives for the rest of the page.
///
/// # Errors
///
/// Returns an error if the body or control element is missing, the page
/// config is invalid, or the click listener cannot be registered.
pub fn attach(config: Option<ThemeConfig>) -> Result<Rc<WebThemeController>, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::MissingWindow)?;
    let document = window.document().ok_or(ThemeError::MissingDocument)?;
    let config = match config {
        Some(config) => {
            config.validate()?;
            config
        }
        None => page_config(&document)?,
    };

    let body = document.body().ok_or(ThemeError::MissingBody)?;
    let control = document
        .get_element_by_id(&config.control_id)
        .ok_or_else(|| ThemeError::MissingControl { id: config.control_id.clone() })?;

    let controller = Rc::new(ThemeController::new(
        config,
        LocalStorage::open(&window),
        ElementClasses::new(&body),
        ElementLabel::new(control.clone()),
    ));
    controller.initialize();

    let handler = Rc::clone(&controller);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        handler.on_toggle_click();
    });
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Listener { event: "click", reason: format!("{err:?}") })?;
    on_click.forget();

    log::info!("theme toggle attached to #{}", controller.config().control_id);
    Ok(controller)
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .ok_or(ThemeError::MissingWindow)?
        .document()
        .ok_or(ThemeError::MissingDocument)
}

/// Config embedded in the page as JSON, or the defaults.
fn page_config(document: &Document) -> Result<ThemeConfig, ThemeError> {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    ThemeConfig::from_embedded(raw.as_deref())
}
