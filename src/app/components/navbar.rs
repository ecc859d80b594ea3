//! Site header: logo, pill nav, language picker, CTA and the mobile sheet.
//!
//! Owns the [`NavController`] for the page. Collaborators come from
//! [`SiteServices`]; the browser document adapter is created here so the
//! Escape listener can reach back into the controller signal.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant, LinkButton};
use super::language_selector::LanguageSelector;
use super::mobile_sheet::MobileSheet;
use super::pill_nav::PillNav;
use crate::analytics::AnalyticsEvent;
use crate::app::dom::{self, BrowserDocument};
use crate::app::services::use_site_services;
use crate::nav::{Cta, NavController, NavKey, NavTree};

/// Scroll offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 8.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Menu definition
    pub tree: Arc<NavTree>,
    /// Primary call to action
    pub cta: Cta,
    /// Path of the page being shown
    pub current_path: String,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let services = use_site_services();
    let document = use_hook(|| Rc::new(BrowserDocument::new()));

    let mut menu = use_signal({
        let services = services.clone();
        let document = document.clone();
        let tree = props.tree.clone();
        move || {
            NavController::new(
                (*tree).clone(),
                services.analytics.clone(),
                services.router.clone(),
                document,
            )
        }
    });

    use_hook({
        let document = document.clone();
        move || {
            document.set_escape_handler(move || {
                let mut menu = menu;
                menu.write().sheet_key_down(NavKey::Escape);
            })
        }
    });

    let scrolled = use_signal(|| false);
    use_hook(move || {
        Rc::new(dom::listen_scroll(move |y| {
            let mut scrolled = scrolled;
            let now = is_scrolled(y);
            if *scrolled.peek() != now {
                scrolled.set(now);
            }
        }))
    });

    use_effect(use_reactive((&props.current_path,), move |(path,)| {
        menu.write().route_changed(&path);
    }));

    use_drop(move || {
        if let Ok(mut menu) = menu.try_write() {
            menu.unmount();
        }
    });

    let sheet_open = menu.read().is_sheet_open();
    let logo_analytics = services.analytics.clone();
    let language_analytics = services.analytics.clone();
    let cta = props.cta.clone();
    let navbar_label = cta.label.clone();
    let sticky_label = cta.label.clone();

    rsx! {
        header { class: if scrolled() { "site-header navbar-scrolled" } else { "site-header" },
            div { class: "site-header-inner",
                a {
                    class: "site-logo",
                    href: "/",
                    onclick: move |_| {
                        logo_analytics.track(AnalyticsEvent::NavClick { label: "Logo".to_string() })
                    },
                    img { src: "/logo-desktop.png", alt: "Zypp - Electric Last Mile Delivery" }
                }

                div { class: "desktop-nav", PillNav { menu } }

                div { class: "desktop-actions",
                    LanguageSelector {
                        on_change: move |language: String| {
                            language_analytics.track(AnalyticsEvent::LanguageChange { language })
                        },
                    }
                    LinkButton {
                        href: cta.href.clone(),
                        onclick: move |_| menu.read().cta_click(&navbar_label, "navbar"),
                        "{cta.label}"
                    }
                }

                div { class: "mobile-toggle",
                    Button {
                        variant: ButtonVariant::Ghost,
                        label: "Open mobile menu".to_string(),
                        expanded: sheet_open,
                        onclick: move |_| menu.write().toggle_sheet(),
                        "☰"
                    }
                }
            }
        }

        MobileSheet { menu, cta: cta.clone() }

        div { class: "mobile-cta-bar",
            LinkButton {
                href: cta.href.clone(),
                onclick: move |_| menu.read().cta_click(&sticky_label, "mobile_sticky"),
                "{cta.label}"
            }
        }
    }
}
