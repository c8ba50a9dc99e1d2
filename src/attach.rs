//! Idempotent attachment of behavior to elements.
//!
//! Page fragments are injected after load, so interactive elements appear at
//! arbitrary times. The host observes insertions and offers every matching
//! element to an [`Attachments`] registry; the registry keeps an
//! initialized/uninitialized marker per element id and runs the initializer
//! only for elements not yet initialized.
//!
//! A failed initialization leaves the element unmarked, so a later insertion
//! (say, the strip's controls arriving in a second fragment) retries it.

use std::collections::BTreeMap;

/// Per-element initialization marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Uninitialized,
    Initialized,
}

/// Result of offering an element to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attach<E> {
    /// The initializer ran and the element is now marked.
    Attached,
    /// The element was already marked; nothing ran.
    AlreadyInitialized,
    /// The initializer declined; the element stays unmarked.
    Declined(E),
}

/// Behavior instances keyed by element id.
#[derive(Debug, Clone)]
pub struct Attachments<T> {
    attached: BTreeMap<String, T>,
}

impl<T> Default for Attachments<T> {
    fn default() -> Self {
        Self {
            attached: BTreeMap::new(),
        }
    }
}

impl<T> Attachments<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, id: &str) -> Marker {
        if self.attached.contains_key(id) {
            Marker::Initialized
        } else {
            Marker::Uninitialized
        }
    }

    /// Run `init` for `id` unless it is already initialized.
    pub fn attach_with<E>(&mut self, id: &str, init: impl FnOnce() -> Result<T, E>) -> Attach<E> {
        if self.marker(id) == Marker::Initialized {
            return Attach::AlreadyInitialized;
        }
        match init() {
            Ok(behavior) => {
                self.attached.insert(id.to_string(), behavior);
                Attach::Attached
            }
            Err(e) => Attach::Declined(e),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.attached.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.attached.get_mut(id)
    }

    /// Forget an element that left the document.
    pub fn detach(&mut self, id: &str) -> Option<T> {
        self.attached.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.attached.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
