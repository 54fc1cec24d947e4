//! Element registry - maps ids to navigational elements or element factories.
//!
//! The registry is the value templates see behind the `nav` global. A stored
//! factory is invoked on every read, so elements can be computed per render
//! (e.g. a menu that depends on mutable application state).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tera::Value;
use tracing::debug;

use crate::error::NavError;

/// Zero-argument factory producing an element value.
pub type ElementFactory = Arc<dyn Fn() -> Value + Send + Sync>;

/// A registered element: either a concrete value or a factory producing one.
#[derive(Clone)]
pub enum Element {
    /// A concrete element value, returned as-is on every read.
    Value(Value),
    /// A factory invoked on every read; the factory itself is never
    /// surfaced to callers.
    Factory(ElementFactory),
}

impl Element {
    /// Wrap a factory closure.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Resolve to a concrete value, invoking the factory if present.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

#[derive(Default)]
struct ElementMap {
    elems: HashMap<String, Element>,
    /// Ids in first-insertion order; reinsertion keeps the original slot.
    order: Vec<String>,
}

/// Registry of navigational elements, keyed by id.
///
/// Interior locking makes a shared handle (`Arc<ElementRegistry>`) usable
/// from both application setup code and the template global.
#[derive(Default)]
pub struct ElementRegistry {
    inner: RwLock<ElementMap>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `element` under `id`, replacing any prior value.
    pub fn insert(&self, id: impl Into<String>, element: impl Into<Element>) {
        let id = id.into();
        debug!(id = %id, "element registered");

        let mut inner = self.inner.write();
        if inner.elems.insert(id.clone(), element.into()).is_none() {
            inner.order.push(id);
        }
    }

    /// Resolve the element registered under `id`.
    ///
    /// A stored factory is re-invoked on every call; results are never
    /// cached.
    pub fn get(&self, id: &str) -> Result<Value, NavError> {
        // The lock is released before resolving so a factory may re-enter
        // the registry.
        let element = self.inner.read().elems.get(id).cloned();
        let element = element.ok_or_else(|| NavError::UnknownElement(id.to_string()))?;
        Ok(element.resolve())
    }

    /// Remove the element registered under `id`.
    pub fn remove(&self, id: &str) -> Result<(), NavError> {
        let mut inner = self.inner.write();
        if inner.elems.remove(id).is_none() {
            return Err(NavError::UnknownElement(id.to_string()));
        }
        inner.order.retain(|key| key != id);
        Ok(())
    }

    /// Number of registered elements; factories count once, unresolved.
    pub fn len(&self) -> usize {
        self.inner.read().elems.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().elems.is_empty()
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }

    /// Iterate over resolved values in insertion order.
    ///
    /// Elements are snapshotted up front, but factories run lazily as the
    /// iterator advances.
    pub fn resolved(&self) -> Resolved {
        let inner = self.inner.read();
        let elems: Vec<Element> = inner
            .order
            .iter()
            .filter_map(|id| inner.elems.get(id).cloned())
            .collect();
        Resolved {
            elems: elems.into_iter(),
        }
    }
}

impl fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// Iterator over resolved element values. See [`ElementRegistry::resolved`].
pub struct Resolved {
    elems: std::vec::IntoIter<Element>,
}

impl Iterator for Resolved {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.elems.next().map(|element| element.resolve())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elems.size_hint()
    }
}

impl ExactSizeIterator for Resolved {}
