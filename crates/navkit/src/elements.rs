//! Navigational item vocabulary.
//!
//! These are the structured values the bundled renderer understands. The
//! registries themselves store opaque [`tera::Value`]s, so applications are
//! free to register their own shapes alongside (or instead of) these, paired
//! with a renderer that knows how to interpret them.

use serde::{Deserialize, Serialize};
use tera::Value;

use crate::error::NavError;
use crate::registry::Element;

/// A navigational artifact: a link, a label, a divider, or a grouping of
/// further items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavItem {
    /// A hyperlink with a fixed destination.
    Link {
        text: String,
        dest: String,
        #[serde(default)]
        active: bool,
    },
    /// Plain, non-interactive text.
    Text { text: String },
    /// A visual divider between items.
    Separator,
    /// A titled group of nested items.
    Subgroup { title: String, items: Vec<NavItem> },
    /// A top-level menu bar.
    Navbar {
        #[serde(default)]
        title: Option<String>,
        items: Vec<NavItem>,
    },
}

impl NavItem {
    /// A link to `dest` labelled `text`.
    pub fn link(text: impl Into<String>, dest: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            dest: dest.into(),
            active: false,
        }
    }

    /// A plain text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// A divider.
    pub fn separator() -> Self {
        Self::Separator
    }

    /// A titled group of nested items.
    pub fn subgroup(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self::Subgroup {
            title: title.into(),
            items,
        }
    }

    /// A titled menu bar.
    pub fn navbar(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self::Navbar {
            title: Some(title.into()),
            items,
        }
    }

    /// An untitled menu bar.
    pub fn bare_navbar(items: Vec<NavItem>) -> Self {
        Self::Navbar { title: None, items }
    }

    /// Mark a link as the active item. No effect on other variants.
    pub fn active(mut self) -> Self {
        if let Self::Link { active, .. } = &mut self {
            *active = true;
        }
        self
    }

    /// Serialize into a template value.
    pub fn to_value(&self) -> Result<Value, NavError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize into a registrable element.
    pub fn into_element(self) -> Result<Element, NavError> {
        Ok(Element::Value(self.to_value()?))
    }
}
