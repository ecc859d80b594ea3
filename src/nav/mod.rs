//! Navigation menu: data model and interaction state.
//!
//! Framework-free. The Dioxus components in `crate::app` hold a
//! [`NavController`] in a signal and forward DOM events to it; timers and
//! document listeners are driven from there.

pub mod active;
pub mod controller;
pub mod item;
pub mod pill;
pub mod router;
pub mod scope;
pub mod sheet;

use serde::{Deserialize, Serialize};

pub use active::resolve_active;
pub use controller::{NavController, NavMenuState};
pub use item::{NavError, NavId, NavItem, NavItemSpec, NavItemType, NavKind, NavLink, NavTree};
pub use pill::{CloseTicket, OpenMethod, PillNav, HOVER_CLOSE_DELAY};
pub use router::{NavRouter, StaticRouter};
pub use scope::{DocumentEnv, NoopDocument, Subscription};
pub use sheet::{CloseReason, MobileSheet, SheetState};

/// Keys the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// Call-to-action button shown next to the navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl Default for Cta {
    fn default() -> Self {
        Self {
            label: "Become a Partner".to_string(),
            href: "/delivery-partner".to_string(),
        }
    }
}
