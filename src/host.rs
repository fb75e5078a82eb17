//! Collaborators the controller drives.
//!
//! DESIGN
//! ======
//! The controller never touches the DOM or `localStorage` directly. It talks
//! to three narrow traits, implemented for the browser in `web` and in memory
//! here. Methods take `&self` because the browser handles are themselves
//! shared, interior-mutable references; the in-memory versions mirror that
//! with `RefCell`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Durable key-value storage for the preference.
pub trait PreferenceStore {
    /// Stored value under `key`, or `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any prior value. Failures are
    /// swallowed by the implementation.
    fn save(&self, key: &str, value: &str);
}

/// Class list of the root element.
pub trait RootClasses {
    fn add(&self, class: &str);

    /// Add `class` if absent, remove it if present. Returns whether the
    /// class is present afterwards.
    fn toggle(&self, class: &str) -> bool;

    fn contains(&self, class: &str) -> bool;
}

/// Text label of the toggle control.
pub trait ControlLabel {
    fn set_label(&self, text: &str);
}

// =============================================================
// In-memory host
// =============================================================

/// `HashMap`-backed store. An unavailable store reads as empty and drops
/// writes, like a browser with storage disabled.
#[derive(Debug)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { entries: RefCell::new(HashMap::new()), available: true }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: RefCell::new(HashMap::new()), available: false }
    }

    /// Raw stored value, bypassing availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) {
        if !self.available {
            log::warn!("preference store unavailable; dropping {key}={value}");
            return;
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Ordered set of class names.
#[derive(Debug, Default)]
pub struct MemoryClassList {
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current classes, sorted.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl RootClasses for MemoryClassList {
    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn toggle(&self, class: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_owned());
            true
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

/// Label that remembers its text and how many times it was written.
#[derive(Debug, Default)]
pub struct MemoryLabel {
    text: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, `None` if never set.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ControlLabel for MemoryLabel {
    fn set_label(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}
