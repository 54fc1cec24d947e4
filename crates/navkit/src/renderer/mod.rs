//! Renderer registry and deferred renderer resolution.
//!
//! Renderers are strategies turning element values into markup. They are
//! registered per application, either as concrete values or as deferred
//! references: a (namespace, dotted path) pair resolved on every lookup.
//! Deferred registration lets a renderer pack be referenced before the pack
//! itself is wired into the application.

mod simple;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tera::Value;
use tracing::debug;

use crate::error::NavError;
use crate::extensions::NavHost;

pub use simple::SimpleRenderer;

/// Extension-container key for the per-application renderer registry.
pub const RENDERERS_KEY: &str = "nav_renderers";

/// Extension-container key for the per-application namespace registry.
pub const NAMESPACES_KEY: &str = "nav_namespaces";

/// Strategy converting a navigational element value into markup.
pub trait Renderer: Send + Sync {
    /// Render `element` to markup.
    fn render(&self, element: &Value) -> Result<String, NavError>;
}

/// A registered renderer: a concrete value, or a deferred reference resolved
/// at lookup time.
#[derive(Clone)]
pub enum RendererRef {
    /// A concrete renderer, returned verbatim on lookup.
    Direct(Arc<dyn Renderer>),
    /// A reference into a registered namespace, resolved on every lookup.
    Deferred { namespace: String, path: String },
}

impl RendererRef {
    /// Wrap a concrete renderer.
    pub fn direct(renderer: impl Renderer + 'static) -> Self {
        Self::Direct(Arc::new(renderer))
    }

    /// A deferred reference into `namespace`, walking the dot-separated
    /// `path`.
    pub fn deferred(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Deferred {
            namespace: namespace.into(),
            path: path.into(),
        }
    }
}

impl fmt::Debug for RendererRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(_) => f.write_str("Direct(..)"),
            Self::Deferred { namespace, path } => f
                .debug_struct("Deferred")
                .field("namespace", namespace)
                .field("path", path)
                .finish(),
        }
    }
}

/// Registry of renderers, keyed by id. `None` is the default renderer.
#[derive(Debug, Default)]
pub struct RendererRegistry {
    entries: HashMap<Option<String>, RendererRef>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `renderer` under `id`.
    ///
    /// With `force`, any prior registration is overwritten; without it the
    /// first registration wins and later ones are no-ops.
    pub fn register(&mut self, id: Option<&str>, renderer: RendererRef, force: bool) {
        let key = id.map(str::to_owned);
        if force {
            self.entries.insert(key, renderer);
        } else {
            self.entries.entry(key).or_insert(renderer);
        }
    }

    /// Look up the renderer reference registered under `id`.
    pub fn get(&self, id: Option<&str>) -> Option<&RendererRef> {
        self.entries.get(&id.map(str::to_owned))
    }

    /// Check whether `id` is registered.
    pub fn contains(&self, id: Option<&str>) -> bool {
        self.entries.contains_key(&id.map(str::to_owned))
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An entry in a renderer namespace.
pub enum NamespaceEntry {
    /// A renderer leaf.
    Renderer(Arc<dyn Renderer>),
    /// A nested group, addressed by a further path segment.
    Group(Namespace),
}

/// A named tree of renderers, walked one dot-separated segment at a time.
#[derive(Default)]
pub struct Namespace {
    entries: HashMap<String, NamespaceEntry>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add a renderer leaf under `name`.
    pub fn with_renderer(mut self, name: impl Into<String>, renderer: impl Renderer + 'static) -> Self {
        self.insert_renderer(name, Arc::new(renderer));
        self
    }

    /// Builder-style: add a nested group under `name`.
    pub fn with_group(mut self, name: impl Into<String>, group: Namespace) -> Self {
        self.entries.insert(name.into(), NamespaceEntry::Group(group));
        self
    }

    /// Add a renderer leaf under `name`.
    pub fn insert_renderer(&mut self, name: impl Into<String>, renderer: Arc<dyn Renderer>) {
        self.entries
            .insert(name.into(), NamespaceEntry::Renderer(renderer));
    }

    fn resolve(&self, namespace_id: &str, path: &str) -> Result<Arc<dyn Renderer>, NavError> {
        let resolution_error = |segment: &str| NavError::Resolution {
            namespace: namespace_id.to_string(),
            path: path.to_string(),
            segment: segment.to_string(),
        };

        let segments: Vec<&str> = path.split('.').collect();
        let mut current = self;
        for (idx, segment) in segments.iter().enumerate() {
            let is_last = idx + 1 == segments.len();
            match current.entries.get(*segment) {
                Some(NamespaceEntry::Renderer(renderer)) if is_last => {
                    return Ok(Arc::clone(renderer));
                }
                Some(NamespaceEntry::Group(group)) if !is_last => current = group,
                _ => return Err(resolution_error(segment)),
            }
        }
        Err(resolution_error(path))
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Per-application registry of renderer namespaces.
#[derive(Debug, Default)]
pub struct NamespaceRegistry {
    spaces: HashMap<String, Namespace>,
}

impl NamespaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `namespace` under `id`, replacing any prior namespace.
    pub fn register(&mut self, id: impl Into<String>, namespace: Namespace) {
        self.spaces.insert(id.into(), namespace);
    }

    /// Check whether a namespace is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.spaces.contains_key(id)
    }

    /// Resolve a deferred reference.
    pub fn resolve(&self, namespace: &str, path: &str) -> Result<Arc<dyn Renderer>, NavError> {
        let Some(space) = self.spaces.get(namespace) else {
            return Err(NavError::Resolution {
                namespace: namespace.to_string(),
                path: path.to_string(),
                segment: namespace.to_string(),
            });
        };
        space.resolve(namespace, path)
    }
}

/// Register a renderer on the application.
///
/// With `force`, any renderer already registered under `id` is overwritten;
/// without it the existing registration wins. `None` registers the default
/// renderer.
pub fn register_renderer<H: NavHost + ?Sized>(
    app: &mut H,
    id: Option<&str>,
    renderer: RendererRef,
    force: bool,
) {
    debug!(id = %renderer_label(id), force, "renderer registered");
    app.extensions_mut()
        .get_or_insert_with(RENDERERS_KEY, RendererRegistry::new)
        .register(id, renderer, force);
}

/// Retrieve a renderer from the application.
///
/// A deferred reference is resolved on every call; the resolved value is
/// not memoized, so a later namespace re-registration takes effect on the
/// next lookup.
pub fn get_renderer<H: NavHost + ?Sized>(
    app: &H,
    id: Option<&str>,
) -> Result<Arc<dyn Renderer>, NavError> {
    let registry = app
        .extensions()
        .get::<RendererRegistry>(RENDERERS_KEY)
        .ok_or_else(|| NavError::UnknownRenderer(renderer_label(id)))?;
    let renderer = registry
        .get(id)
        .ok_or_else(|| NavError::UnknownRenderer(renderer_label(id)))?;

    match renderer {
        RendererRef::Direct(renderer) => Ok(Arc::clone(renderer)),
        RendererRef::Deferred { namespace, path } => {
            let spaces = app
                .extensions()
                .get::<NamespaceRegistry>(NAMESPACES_KEY)
                .ok_or_else(|| NavError::Resolution {
                    namespace: namespace.clone(),
                    path: path.clone(),
                    segment: namespace.clone(),
                })?;
            spaces.resolve(namespace, path)
        }
    }
}

/// Register a renderer namespace on the application, making its renderers
/// reachable by deferred reference.
pub fn register_namespace<H: NavHost + ?Sized>(
    app: &mut H,
    id: impl Into<String>,
    namespace: Namespace,
) {
    let id = id.into();
    debug!(id = %id, "renderer namespace registered");
    app.extensions_mut()
        .get_or_insert_with(NAMESPACES_KEY, NamespaceRegistry::new)
        .register(id, namespace);
}

fn renderer_label(id: Option<&str>) -> String {
    id.unwrap_or("default").to_string()
}
