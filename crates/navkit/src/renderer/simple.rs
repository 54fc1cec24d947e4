//! Bundled renderer producing plain semantic HTML.

use tera::{Value, escape_html};

use crate::elements::NavItem;
use crate::error::NavError;

use super::Renderer;

/// Renders [`NavItem`] values as unstyled `<nav>`/`<ul>` markup, suitable as
/// a starting point before a theme ships its own renderer.
pub struct SimpleRenderer {
    _private: (),
}

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn render_item(&self, item: &NavItem) -> String {
        match item {
            NavItem::Navbar { title, items } => {
                let body = self.render_items(items);
                match title {
                    Some(title) => {
                        let title = escape_html(title);
                        format!(
                            "<nav class=\"navbar\"><span class=\"navbar-title\">{title}</span><ul>{body}</ul></nav>"
                        )
                    }
                    None => format!("<nav class=\"navbar\"><ul>{body}</ul></nav>"),
                }
            }
            NavItem::Subgroup { title, items } => {
                let title = escape_html(title);
                let body = self.render_items(items);
                format!(
                    "<li class=\"subgroup\"><span class=\"subgroup-title\">{title}</span><ul>{body}</ul></li>"
                )
            }
            NavItem::Link { text, dest, active } => {
                let text = escape_html(text);
                let dest = escape_html(dest);
                if *active {
                    format!("<li><a class=\"active\" href=\"{dest}\">{text}</a></li>")
                } else {
                    format!("<li><a href=\"{dest}\">{text}</a></li>")
                }
            }
            NavItem::Text { text } => {
                let text = escape_html(text);
                format!("<li><span class=\"nav-text\">{text}</span></li>")
            }
            NavItem::Separator => "<li class=\"separator\" role=\"separator\"></li>".to_string(),
        }
    }

    fn render_items(&self, items: &[NavItem]) -> String {
        let mut html = String::new();
        for item in items {
            html.push_str(&self.render_item(item));
        }
        html
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, element: &Value) -> Result<String, NavError> {
        let item: NavItem = serde_json::from_value(element.clone())?;
        Ok(self.render_item(&item))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn renders_link() {
        let renderer = SimpleRenderer::new();
        let value = NavItem::link("Home", "/").to_value().unwrap();

        assert_eq!(
            renderer.render(&value).unwrap(),
            "<li><a href=\"/\">Home</a></li>"
        );
    }

    #[test]
    fn renders_active_link_with_class() {
        let renderer = SimpleRenderer::new();
        let value = NavItem::link("Home", "/").active().to_value().unwrap();

        assert_eq!(
            renderer.render(&value).unwrap(),
            "<li><a class=\"active\" href=\"/\">Home</a></li>"
        );
    }

    #[test]
    fn renders_navbar_tree() {
        let renderer = SimpleRenderer::new();
        let value = NavItem::navbar(
            "Main",
            vec![
                NavItem::link("Home", "/"),
                NavItem::separator(),
                NavItem::subgroup("More", vec![NavItem::link("About", "/about")]),
            ],
        )
        .to_value()
        .unwrap();

        let html = renderer.render(&value).unwrap();
        assert_eq!(
            html,
            "<nav class=\"navbar\"><span class=\"navbar-title\">Main</span><ul>\
             <li><a href=\"/\">Home</a></li>\
             <li class=\"separator\" role=\"separator\"></li>\
             <li class=\"subgroup\"><span class=\"subgroup-title\">More</span>\
             <ul><li><a href=\"/about\">About</a></li></ul></li>\
             </ul></nav>"
        );
    }

    #[test]
    fn renders_untitled_navbar() {
        let renderer = SimpleRenderer::new();
        let value = NavItem::bare_navbar(vec![NavItem::text("v1.0")])
            .to_value()
            .unwrap();

        assert_eq!(
            renderer.render(&value).unwrap(),
            "<nav class=\"navbar\"><ul><li><span class=\"nav-text\">v1.0</span></li></ul></nav>"
        );
    }

    #[test]
    fn escapes_text_and_destinations() {
        let renderer = SimpleRenderer::new();
        let value = NavItem::link("<script>alert(1)</script>", "/q?a=1&b=\"2\"")
            .to_value()
            .unwrap();

        let html = renderer.render(&value).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;b="));
    }

    #[test]
    fn rejects_values_outside_the_vocabulary() {
        let renderer = SimpleRenderer::new();
        let value = serde_json::json!({"type": "widget"});

        assert!(matches!(
            renderer.render(&value),
            Err(NavError::MalformedElement(_))
        ));
    }
}
