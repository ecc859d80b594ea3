//! Dioxus application: router, layout and the server-rendered page root.
//!
//! In the browser [`App`] drives client-side routing. On the server each
//! request renders [`SitePage`] for a fixed path.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::analytics::Analytics;
use crate::nav::{Cta, NavRouter, NavTree, StaticRouter};

pub mod components;
pub mod dom;
pub mod pages;
pub mod services;

use components::Navbar;
use pages::{Home, Section};
use services::{use_site_services_provider, SiteServices};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        Section { segments: Vec<String> },
}

/// [`NavRouter`] backed by the Dioxus router.
struct ClientRouter {
    navigator: Navigator,
}

impl NavRouter for ClientRouter {
    fn current_path(&self) -> String {
        dom::current_path()
    }

    fn navigate(&self, href: &str) {
        match href.parse::<Route>() {
            Ok(route) => {
                if let Some(failure) = self.navigator.push(route) {
                    tracing::warn!(href, "navigation failed: {:?}", failure);
                }
            }
            Err(_) => tracing::warn!(href, "no route for navigation target"),
        }
    }
}

#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let navigator = navigator();
    use_site_services_provider(move || {
        SiteServices::new(Analytics::tracing(), Rc::new(ClientRouter { navigator }))
    });
    let tree = use_hook(|| Arc::new(NavTree::zypp_default()));

    rsx! {
        Navbar { tree, cta: Cta::default(), current_path: route.to_string() }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SitePageProps {
    /// Request path being rendered
    pub path: String,
    /// Menu definition
    pub tree: Arc<NavTree>,
    /// Primary call to action
    pub cta: Cta,
}

/// Server-rendered page: navbar plus the body for `path`.
#[component]
pub fn SitePage(props: SitePageProps) -> Element {
    let path = props.path.clone();
    use_site_services_provider(move || {
        SiteServices::new(Analytics::tracing(), Rc::new(StaticRouter::new(path)))
    });

    let segments: Vec<String> = props
        .path
        .trim_start_matches('/')
        .split('/')
        .map(str::to_string)
        .collect();

    rsx! {
        Navbar {
            tree: props.tree.clone(),
            cta: props.cta.clone(),
            current_path: props.path.clone(),
        }
        main { class: "site-main",
            if props.path == "/" {
                Home {}
            } else {
                Section { segments }
            }
        }
    }
}
