//! Attach the extension to a minimal Tera application and render a navbar
//! two ways: through a template and through the bundled renderer.

use navkit::{Element, Extensions, Nav, NavGlobal, NavHost, NavItem, render_element};
use tera::{Context, Tera};

struct App {
    tera: Tera,
    extensions: Extensions,
}

impl NavHost for App {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn add_template_global(&mut self, name: &str, global: NavGlobal) {
        self.tera.register_function(name, global);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App {
        tera: Tera::default(),
        extensions: Extensions::new(),
    };

    let nav = Nav::new();
    nav.attach(&mut app);

    let navbar = NavItem::navbar(
        "Example",
        vec![
            NavItem::link("Home", "/").active(),
            NavItem::link("Blog", "/blog"),
            NavItem::separator(),
            NavItem::subgroup("More", vec![NavItem::link("About", "/about")]),
        ],
    );
    nav.register_element("main", navbar.into_element()?);

    // A factory element, recomputed on every template render.
    nav.register_element(
        "year",
        Element::factory(|| serde_json::json!("2026")),
    );

    app.tera.add_raw_template(
        "page",
        "{% set main = nav(id=\"main\") %}<footer>{{ main.title }} | © {{ nav(id=\"year\") }}</footer>",
    )?;
    println!("{}", app.tera.render("page", &Context::new())?);

    println!("{}", render_element(&app, "main", None)?);
    Ok(())
}
