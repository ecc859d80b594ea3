//! Routing collaborator used by the navigation controller.

use std::cell::RefCell;

/// Read the current path; navigate on link activation.
pub trait NavRouter {
    fn current_path(&self) -> String;
    fn navigate(&self, href: &str);
}

/// Router with a fixed path. Used for server rendering, where navigation
/// is left to plain anchors; requested navigations are recorded.
#[derive(Debug, Default)]
pub struct StaticRouter {
    path: String,
    requested: RefCell<Vec<String>>,
}

impl StaticRouter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Hrefs passed to `navigate`, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl NavRouter for StaticRouter {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, href: &str) {
        tracing::debug!(href, "navigation requested");
        self.requested.borrow_mut().push(href.to_string());
    }
}
