//! Client-side navigation seam.

use std::rc::Rc;

use leptos_router::NavigateOptions;

/// Pushes a route onto the browser history without a full reload.
pub trait Navigator {
    fn push(&self, path: &str);
}

/// Navigator backed by the Leptos Router `use_navigate()` closure.
#[derive(Clone)]
pub struct RouterNavigator(Rc<dyn Fn(&str, NavigateOptions)>);

impl RouterNavigator {
    pub fn new<F>(navigate: F) -> Self
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        Self(Rc::new(navigate))
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, path: &str) {
        log::debug!("navigate to {path}");
        (self.0)(path, NavigateOptions::default());
    }
}
