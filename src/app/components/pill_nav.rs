//! Desktop pill navigation with hover-intent dropdowns.
//!
//! The controller decides when a dropdown should close; this component owns
//! the timer task that fires the close ticket. At most one task is alive: it
//! is cancelled before a new one is spawned and whenever the controller no
//! longer has a close pending.

use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use super::button::{Button, ButtonVariant, LinkButton};
use crate::app::dom;
use crate::nav::{CloseTicket, NavController, NavItem, NavKey, NavKind, NavLink, HOVER_CLOSE_DELAY};

/// DOM id of the nav root; presses outside it close the open dropdown.
pub const PILL_NAV_ROOT_ID: &str = "primary-nav";

#[component]
pub fn PillNav(menu: Signal<NavController>) -> Element {
    let close_task = use_signal(|| None::<Task>);

    // Outside presses close the dropdown for as long as the nav is mounted
    use_hook(move || {
        Rc::new(dom::listen_outside_pointer(PILL_NAV_ROOT_ID, move || {
            let mut menu = menu;
            menu.write().outside_pointer_down();
            settle_close_timer(menu, close_task);
        }))
    });

    let (items, state) = {
        let menu = menu.read();
        (menu.tree().items().to_vec(), menu.state())
    };

    rsx! {
        nav {
            id: PILL_NAV_ROOT_ID,
            class: "pill-nav",
            "aria-label": "Primary Navigation",
            for item in items {
                PillItem {
                    key: "{item.id}",
                    menu,
                    close_task,
                    active: state.active_item_id.as_ref() == Some(&item.id),
                    open: state.open_dropdown_id.as_ref() == Some(&item.id),
                    item: item.clone(),
                }
            }
        }
    }
}

#[component]
fn PillItem(
    mut menu: Signal<NavController>,
    close_task: Signal<Option<Task>>,
    item: NavItem,
    active: bool,
    open: bool,
) -> Element {
    let id = item.id.to_string();

    let onmouseenter = {
        let id = id.clone();
        move |_: MouseEvent| {
            menu.write().hover_enter(&id);
            settle_close_timer(menu, close_task);
        }
    };
    let onmouseleave = move |_: MouseEvent| {
        let ticket = menu.write().hover_leave();
        schedule_close(menu, close_task, ticket);
    };
    let onclick = {
        let id = id.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            menu.write().click(&id);
            settle_close_timer(menu, close_task);
        }
    };
    let onkeydown = {
        let id = id.clone();
        move |evt: KeyboardEvent| {
            let key = NavKey::from_key(&evt.key().to_string());
            if menu.write().key_down(key, &id) {
                evt.prevent_default();
            }
            settle_close_timer(menu, close_task);
        }
    };

    match &item.kind {
        NavKind::Link { href } => rsx! {
            div { class: "pill-nav-item", onmouseenter, onmouseleave,
                LinkButton {
                    variant: ButtonVariant::nav(active),
                    href: href.clone(),
                    label: item.label.clone(),
                    onclick,
                    onkeydown,
                    "{item.label}"
                }
            }
        },
        NavKind::Dropdown { children } => rsx! {
            div { class: "pill-nav-item", onmouseenter, onmouseleave,
                Button {
                    variant: ButtonVariant::nav(active),
                    expanded: open,
                    onclick,
                    onkeydown,
                    "{item.label}"
                    span { class: if open { "chevron chevron-open" } else { "chevron" }, "aria-hidden": "true", "▾" }
                }
                if open {
                    DropdownPanel { menu, close_task, links: children.clone() }
                }
                // Server-rendered pages keep every child reachable without script
                noscript {
                    ul { class: "pill-nav-fallback",
                        for child in children.iter() {
                            li { key: "{child.id}",
                                a { href: "{child.href}", "{child.label}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn DropdownPanel(
    mut menu: Signal<NavController>,
    close_task: Signal<Option<Task>>,
    links: Vec<NavLink>,
) -> Element {
    rsx! {
        div {
            class: "pill-nav-panel",
            role: "menu",
            onmouseenter: move |_| {
                menu.write().panel_hover_enter();
                settle_close_timer(menu, close_task);
            },
            onmouseleave: move |_| {
                let ticket = menu.write().panel_hover_leave();
                schedule_close(menu, close_task, ticket);
            },
            for child in links {
                PanelLink { key: "{child.id}", menu, close_task, link: child.clone() }
            }
        }
    }
}

#[component]
fn PanelLink(mut menu: Signal<NavController>, close_task: Signal<Option<Task>>, link: NavLink) -> Element {
    let id = link.id.to_string();
    rsx! {
        a {
            class: "pill-nav-link",
            role: "menuitem",
            href: "{link.href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                menu.write().child_click(&id);
                settle_close_timer(menu, close_task);
            },
            "{link.label}"
        }
    }
}

fn cancel_close_timer(mut close_task: Signal<Option<Task>>) {
    if let Some(task) = close_task.write().take() {
        task.cancel();
    }
}

/// Replace any running timer with one for `ticket`.
fn schedule_close(
    menu: Signal<NavController>,
    mut close_task: Signal<Option<Task>>,
    ticket: Option<CloseTicket>,
) {
    cancel_close_timer(close_task);
    let Some(ticket) = ticket else {
        return;
    };
    let task = spawn(async move {
        dom::sleep(HOVER_CLOSE_DELAY).await;
        let mut menu = menu;
        menu.write().expire_close(ticket);
    });
    close_task.set(Some(task));
}

/// Cancel the timer once the controller has nothing pending.
fn settle_close_timer(menu: Signal<NavController>, close_task: Signal<Option<Task>>) {
    if menu.peek().pending_close().is_none() {
        cancel_close_timer(close_task);
    }
}
