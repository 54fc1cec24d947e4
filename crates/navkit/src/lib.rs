//! Navigation extension for Tera-templated web applications.
//!
//! Applications register named navigational elements (menus, links, menu
//! bars) and renderers (strategies turning those elements into markup); the
//! registered elements surface inside templates through a single `nav`
//! global. Elements may be factories, re-invoked on every access, and
//! renderers may be deferred references resolved on every lookup. Both
//! registries live in the host application's extension container rather
//! than in process-wide state.
//!
//! ```no_run
//! use navkit::{Nav, NavItem};
//! # use navkit::{Extensions, NavGlobal, NavHost};
//! # struct App { tera: tera::Tera, extensions: Extensions }
//! # impl NavHost for App {
//! #     fn extensions(&self) -> &Extensions { &self.extensions }
//! #     fn extensions_mut(&mut self) -> &mut Extensions { &mut self.extensions }
//! #     fn add_template_global(&mut self, name: &str, global: NavGlobal) {
//! #         self.tera.register_function(name, global);
//! #     }
//! # }
//! # let mut app = App { tera: tera::Tera::default(), extensions: Extensions::new() };
//! let nav = Nav::new();
//! nav.attach(&mut app);
//!
//! let navbar = NavItem::navbar("Main", vec![NavItem::link("Home", "/")]);
//! nav.register_element("main", navbar.into_element()?);
//! # Ok::<(), navkit::NavError>(())
//! ```

pub mod elements;
pub mod error;
pub mod extensions;
pub mod nav;
pub mod registry;
pub mod renderer;
pub mod template;

pub use elements::NavItem;
pub use error::{NavError, NavResult};
pub use extensions::{Extensions, NavHost};
pub use nav::{BUILTIN_NAMESPACE, EXTENSION_KEY, Nav, render_element};
pub use registry::{Element, ElementRegistry};
pub use renderer::{
    Namespace, NamespaceEntry, NamespaceRegistry, Renderer, RendererRef, RendererRegistry,
    SimpleRenderer, get_renderer, register_namespace, register_renderer,
};
pub use template::NavGlobal;
