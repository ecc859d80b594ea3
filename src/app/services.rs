//! Site-wide collaborators shared via context.
//!
//! The navbar never constructs its own analytics sink or router: the root of
//! each render (client layout or SSR page) provides them here.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::analytics::Analytics;
use crate::nav::NavRouter;

#[derive(Clone)]
pub struct SiteServices {
    pub analytics: Analytics,
    pub router: Rc<dyn NavRouter>,
}

impl SiteServices {
    pub fn new(analytics: Analytics, router: Rc<dyn NavRouter>) -> Self {
        Self { analytics, router }
    }
}

/// Provide services for the subtree - call once at the render root
pub fn use_site_services_provider(init: impl FnOnce() -> SiteServices) -> SiteServices {
    use_context_provider(init)
}

/// Get site services - use in any component
pub fn use_site_services() -> SiteServices {
    use_context::<SiteServices>()
}
