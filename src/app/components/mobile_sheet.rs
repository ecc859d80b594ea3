//! Bottom sheet shown on small screens.
//!
//! Rendered only while the controller reports the sheet open. Scroll lock and
//! the Escape listener live on the controller, not here.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant, LinkButton};
use crate::nav::{Cta, NavController, NavItem, NavKind, NavLink};

#[component]
pub fn MobileSheet(mut menu: Signal<NavController>, cta: Cta) -> Element {
    let (items, state) = {
        let menu = menu.read();
        (menu.tree().items().to_vec(), menu.state())
    };

    if !state.is_mobile_sheet_open {
        return rsx! {};
    }

    let cta_label = cta.label.clone();

    rsx! {
        div {
            class: "sheet-backdrop",
            "aria-hidden": "true",
            onclick: move |_| menu.write().sheet_backdrop_tap(),
        }
        div {
            class: "sheet",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Mobile Navigation Menu",
            div { class: "sheet-handle" }
            div { class: "sheet-header",
                h2 { "Menu" }
                Button {
                    variant: ButtonVariant::Ghost,
                    label: "Close menu".to_string(),
                    onclick: move |_| menu.write().close_sheet(),
                    "✕"
                }
            }
            div { class: "sheet-cta",
                LinkButton {
                    href: cta.href.clone(),
                    onclick: move |_| {
                        menu.read().cta_click(&cta_label, "mobile_sheet");
                        menu.write().close_sheet();
                    },
                    "{cta.label}"
                }
            }
            nav { class: "sheet-nav", "aria-label": "Mobile Navigation",
                for item in items {
                    SheetItem {
                        key: "{item.id}",
                        menu,
                        expanded: state.expanded_accordion_id.as_ref() == Some(&item.id),
                        item: item.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn SheetItem(mut menu: Signal<NavController>, item: NavItem, expanded: bool) -> Element {
    let id = item.id.to_string();

    match &item.kind {
        NavKind::Link { href } => rsx! {
            LinkButton {
                variant: ButtonVariant::Ghost,
                href: href.clone(),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    menu.write().sheet_item_click(&id);
                },
                "{item.label}"
            }
        },
        NavKind::Dropdown { children } => rsx! {
            div { class: "sheet-group",
                Button {
                    variant: ButtonVariant::Ghost,
                    expanded,
                    onclick: move |_| menu.write().sheet_item_click(&id),
                    "{item.label}"
                    span { class: if expanded { "chevron chevron-open" } else { "chevron" }, "aria-hidden": "true", "▾" }
                }
                if expanded {
                    div { class: "sheet-children",
                        for child in children.iter() {
                            SheetChildLink { key: "{child.id}", menu, link: child.clone() }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn SheetChildLink(mut menu: Signal<NavController>, link: NavLink) -> Element {
    let id = link.id.to_string();
    rsx! {
        a {
            class: "sheet-child-link",
            href: "{link.href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                menu.write().sheet_child_click(&id);
            },
            "{link.label}"
        }
    }
}
