//! Per-application extension state.
//!
//! Hosts expose a general-purpose container mapping subsystem names to
//! arbitrary state. The navigation extension stores its registries there
//! under fixed keys instead of in process-wide globals, so multiple
//! application instances can coexist in one process without leaking state
//! into each other.

use std::any::Any;
use std::collections::HashMap;

use crate::template::NavGlobal;

/// Container for per-application subsystem state.
///
/// Entries are type-erased; readers supply the expected type and get `None`
/// back on a type mismatch rather than a panic.
#[derive(Default)]
pub struct Extensions {
    entries: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Extensions {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any prior entry.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Look up the entry under `key` as a `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|slot| slot.downcast_ref::<T>())
    }

    /// Look up the entry under `key` as a mutable `T`.
    pub fn get_mut<T: Any + Send + Sync>(&mut self, key: &str) -> Option<&mut T> {
        self.entries
            .get_mut(key)
            .and_then(|slot| slot.downcast_mut::<T>())
    }

    /// Return the entry under `key`, inserting `default()` first if the key
    /// is absent. An existing entry of a different type is replaced.
    pub fn get_or_insert_with<T: Any + Send + Sync>(
        &mut self,
        key: &str,
        default: impl FnOnce() -> T,
    ) -> &mut T {
        let needs_default = match self.entries.get(key) {
            Some(slot) => !(**slot).is::<T>(),
            None => true,
        };
        if needs_default {
            self.entries.insert(key.to_string(), Box::new(default()));
        }
        let slot = match self.entries.get_mut(key) {
            Some(slot) => slot,
            None => unreachable!("slot was just inserted above"),
        };
        match slot.downcast_mut::<T>() {
            Some(value) => value,
            None => unreachable!("slot holds a `T` after the check above"),
        }
    }

    /// Check whether any entry exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Extensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extensions")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Host application surface the navigation extension attaches to.
///
/// A host owns an [`Extensions`] container and a templating layer that can
/// expose named globals. For a Tera host, `add_template_global` forwards to
/// `Tera::register_function`.
pub trait NavHost {
    /// The host's extension container.
    fn extensions(&self) -> &Extensions;

    /// Mutable access to the host's extension container.
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Make `global` available to templates under `name`.
    fn add_template_global(&mut self, name: &str, global: NavGlobal);
}
