//! The navigation extension itself.

use std::sync::Arc;

use tracing::debug;

use crate::error::NavError;
use crate::extensions::NavHost;
use crate::registry::{Element, ElementRegistry};
use crate::renderer::{
    NAMESPACES_KEY, Namespace, NamespaceRegistry, RendererRef, SimpleRenderer, get_renderer,
    register_namespace, register_renderer,
};
use crate::template::NavGlobal;

/// Extension-container key the attached [`Nav`] handle lives under.
pub const EXTENSION_KEY: &str = "nav";

/// Namespace id of the renderers bundled with this crate.
pub const BUILTIN_NAMESPACE: &str = "navkit::renderers";

/// The navigation extension.
///
/// Owns the element registry and wires it, along with the bundled renderers,
/// into a host application via [`Nav::attach`]. Cloning is cheap and all
/// clones share one registry.
#[derive(Clone, Debug, Default)]
pub struct Nav {
    elems: Arc<ElementRegistry>,
}

impl Nav {
    /// Create an extension with an empty element registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a navigational element under `id`.
    ///
    /// Inside any template the element is then reachable as
    /// `nav(id="...")`. A factory element is re-invoked on every access.
    pub fn register_element(&self, id: impl Into<String>, element: impl Into<Element>) {
        self.elems.insert(id, element);
    }

    /// The shared element registry.
    pub fn elements(&self) -> &ElementRegistry {
        &self.elems
    }

    /// Attach the extension to an application.
    ///
    /// Stores the extension handle under [`EXTENSION_KEY`], registers the
    /// `nav` template global, and registers the bundled renderer under id
    /// `"simple"` (forced) and as the default renderer (unforced, so a
    /// pre-registered default survives). Attaching twice refreshes the
    /// handle and the `"simple"` registration.
    pub fn attach<H: NavHost + ?Sized>(&self, app: &mut H) {
        app.extensions_mut().insert(EXTENSION_KEY, self.clone());
        app.add_template_global("nav", NavGlobal::new(Arc::clone(&self.elems)));

        let seeded = app
            .extensions()
            .get::<NamespaceRegistry>(NAMESPACES_KEY)
            .is_some_and(|spaces| spaces.contains(BUILTIN_NAMESPACE));
        if !seeded {
            register_namespace(
                app,
                BUILTIN_NAMESPACE,
                Namespace::new().with_renderer("SimpleRenderer", SimpleRenderer::new()),
            );
        }

        let simple = RendererRef::deferred(BUILTIN_NAMESPACE, "SimpleRenderer");
        register_renderer(app, Some("simple"), simple.clone(), true);
        register_renderer(app, None, simple, false);

        debug!("navigation extension attached");
    }
}

/// Resolve the element registered under `id` and render it with the
/// renderer registered under `renderer` (`None` for the default renderer).
pub fn render_element<H: NavHost + ?Sized>(
    app: &H,
    id: &str,
    renderer: Option<&str>,
) -> Result<String, NavError> {
    let nav = app
        .extensions()
        .get::<Nav>(EXTENSION_KEY)
        .ok_or(NavError::NotAttached)?;
    let value = nav.elements().get(id)?;
    let renderer = get_renderer(app, renderer)?;
    renderer.render(&value)
}
