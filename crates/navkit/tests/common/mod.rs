//! Shared test host: a minimal Tera-backed application.

use navkit::{Extensions, NavGlobal, NavHost};
use tera::Tera;

pub struct TestApp {
    pub tera: Tera,
    pub extensions: Extensions,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
            extensions: Extensions::new(),
        }
    }
}

impl NavHost for TestApp {
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
