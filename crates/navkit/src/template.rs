//! Template-layer surface of the element registry.
//!
//! Templates never see the raw element map. They see a registered Tera
//! function, `nav`, whose calls route through [`ElementRegistry::get`], so
//! factory elements are recomputed on every render.

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Function, Value};

use crate::registry::ElementRegistry;

/// Tera function exposing registered elements to templates.
///
/// Usage in a template: `{{ nav(id="main") }}` (or assign it with `set` and
/// index into the returned value).
#[derive(Clone)]
pub struct NavGlobal {
    elems: Arc<ElementRegistry>,
}

impl NavGlobal {
    pub(crate) fn new(elems: Arc<ElementRegistry>) -> Self {
        Self { elems }
    }
}

impl Function for NavGlobal {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let id = args
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("the `nav` function requires a string `id` argument"))?;

        self.elems
            .get(id)
            .map_err(|err| tera::Error::msg(err.to_string()))
    }

    fn is_safe(&self) -> bool {
        false
    }
}
