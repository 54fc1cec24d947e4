#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Renderer registration, deferred resolution, and custom renderer packs.

mod common;

use tera::Value;

use common::TestApp;
use navkit::{
    Nav, NavError, NavItem, Namespace, Renderer, RendererRef, get_renderer, register_namespace,
    register_renderer, render_element,
};

/// A renderer pack a theme crate might ship: lists item ids only.
struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn render(&self, element: &Value) -> Result<String, NavError> {
        let item: NavItem = serde_json::from_value(element.clone())?;
        Ok(format!("<!-- outline -->{}", outline(&item)))
    }
}

fn outline(item: &NavItem) -> String {
    match item {
        NavItem::Link { text, .. } | NavItem::Text { text } => text.clone(),
        NavItem::Separator => "-".to_string(),
        NavItem::Subgroup { title, items } | NavItem::Navbar {
            title: Some(title),
            items,
        } => format!("{title}({})", outline_all(items)),
        NavItem::Navbar { title: None, items } => format!("({})", outline_all(items)),
    }
}

fn outline_all(items: &[NavItem]) -> String {
    items.iter().map(outline).collect::<Vec<_>>().join(" ")
}

#[test]
fn custom_pack_resolves_through_deferred_reference() {
    let mut app = TestApp::new();
    let nav = Nav::new();
    nav.attach(&mut app);

    register_namespace(
        &mut app,
        "outline_pack",
        Namespace::new().with_renderer("OutlineRenderer", OutlineRenderer),
    );
    register_renderer(
        &mut app,
        Some("outline"),
        RendererRef::deferred("outline_pack", "OutlineRenderer"),
        true,
    );

    let navbar = NavItem::navbar(
        "Main",
        vec![
            NavItem::link("Home", "/"),
            NavItem::separator(),
            NavItem::subgroup("More", vec![NavItem::link("About", "/about")]),
        ],
    );
    nav.register_element("main", navbar.into_element().unwrap());

    let html = render_element(&app, "main", Some("outline")).unwrap();
    assert_eq!(html, "<!-- outline -->Main(Home - More(About))");
}

#[test]
fn forcing_replaces_the_default_renderer() {
    let mut app = TestApp::new();
    let nav = Nav::new();
    nav.attach(&mut app);

    register_renderer(&mut app, None, RendererRef::direct(OutlineRenderer), true);

    nav.register_element(
        "main",
        NavItem::bare_navbar(vec![NavItem::text("hi")])
            .into_element()
            .unwrap(),
    );
    let html = render_element(&app, "main", None).unwrap();
    assert_eq!(html, "<!-- outline -->(hi)");
}

#[test]
fn unknown_renderer_id_fails() {
    let mut app = TestApp::new();
    let nav = Nav::new();
    nav.attach(&mut app);
    nav.register_element(
        "main",
        NavItem::bare_navbar(vec![]).into_element().unwrap(),
    );

    assert!(matches!(
        render_element(&app, "main", Some("bootstrap")),
        Err(NavError::UnknownRenderer(id)) if id == "bootstrap"
    ));
}

#[test]
fn dangling_deferred_reference_fails_at_lookup_not_registration() {
    let mut app = TestApp::new();
    Nav::new().attach(&mut app);

    // Registration succeeds even though the pack is absent.
    register_renderer(
        &mut app,
        Some("themed"),
        RendererRef::deferred("theme_pack", "Themed"),
        true,
    );

    assert!(matches!(
        get_renderer(&app, Some("themed")),
        Err(NavError::Resolution { segment, .. }) if segment == "theme_pack"
    ));

    // Registering the pack afterwards repairs the reference.
    register_namespace(
        &mut app,
        "theme_pack",
        Namespace::new().with_renderer("Themed", OutlineRenderer),
    );
    assert!(get_renderer(&app, Some("themed")).is_ok());
}
