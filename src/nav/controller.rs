//! Navigation menu controller.
//!
//! Single owner of the menu state for one mounted navbar. Every user input
//! (pointer, keyboard, sheet buttons, route changes) lands on one of the
//! methods below; analytics and navigation are side effects issued from here.

use std::rc::Rc;

use crate::analytics::{Analytics, AnalyticsEvent};

use super::active::resolve_active;
use super::item::{NavId, NavKind, NavTree};
use super::pill::{CloseTicket, OpenMethod, PillNav};
use super::router::NavRouter;
use super::scope::DocumentEnv;
use super::sheet::{CloseReason, MobileSheet};
use super::NavKey;

/// Snapshot of the menu state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub active_item_id: Option<NavId>,
    pub open_dropdown_id: Option<NavId>,
    pub hovered_item_id: Option<NavId>,
    pub is_mobile_sheet_open: bool,
    pub expanded_accordion_id: Option<NavId>,
}

pub struct NavController {
    tree: NavTree,
    active: Option<NavId>,
    pill: PillNav,
    sheet: MobileSheet,
    analytics: Analytics,
    router: Rc<dyn NavRouter>,
}

impl NavController {
    /// Mount: resolves the active item from the router's current path.
    pub fn new(
        tree: NavTree,
        analytics: Analytics,
        router: Rc<dyn NavRouter>,
        document: Rc<dyn DocumentEnv>,
    ) -> Self {
        let active = resolve_active(&tree, &router.current_path());
        Self {
            tree,
            active,
            pill: PillNav::new(),
            sheet: MobileSheet::new(document),
            analytics,
            router,
        }
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn state(&self) -> NavMenuState {
        NavMenuState {
            active_item_id: self.active.clone(),
            open_dropdown_id: self.pill.open_dropdown().cloned(),
            hovered_item_id: self.pill.hovered().cloned(),
            is_mobile_sheet_open: self.sheet.is_open(),
            expanded_accordion_id: self.sheet.expanded().cloned(),
        }
    }

    pub fn active_item(&self) -> Option<&NavId> {
        self.active.as_ref()
    }

    pub fn open_dropdown(&self) -> Option<&NavId> {
        self.pill.open_dropdown()
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pill.pending_close()
    }

    pub fn is_sheet_open(&self) -> bool {
        self.sheet.is_open()
    }

    pub fn expanded_accordion(&self) -> Option<&NavId> {
        self.sheet.expanded()
    }

    // =========================================================================
    // Desktop pill navigation
    // =========================================================================

    pub fn hover_enter(&mut self, id: &str) {
        let Some(item) = self.tree.get(id) else {
            tracing::debug!(id, "hover on unknown nav item");
            return;
        };
        if self.pill.hover_enter(item) {
            let (dropdown, label) = (item.id.to_string(), item.label.clone());
            self.dropdown_opened(OpenMethod::Hover, dropdown, label);
        }
    }

    /// Returns the ticket the caller must fire after [`super::HOVER_CLOSE_DELAY`].
    pub fn hover_leave(&mut self) -> Option<CloseTicket> {
        self.pill.hover_leave()
    }

    pub fn panel_hover_enter(&mut self) {
        self.pill.panel_hover_enter();
    }

    pub fn panel_hover_leave(&mut self) -> Option<CloseTicket> {
        self.pill.panel_hover_leave()
    }

    /// The hover-close delay elapsed for `ticket`.
    pub fn expire_close(&mut self, ticket: CloseTicket) -> bool {
        let closed = self.pill.expire(ticket);
        if closed {
            tracing::debug!("dropdown closed after hover delay");
        }
        closed
    }

    pub fn click(&mut self, id: &str) {
        self.activate_root(id, OpenMethod::Click);
    }

    /// Returns true if the key was handled (caller should prevent default).
    pub fn key_down(&mut self, key: NavKey, id: &str) -> bool {
        match key {
            NavKey::Enter | NavKey::Space => {
                self.activate_root(id, OpenMethod::Keyboard);
                true
            }
            NavKey::Escape => {
                self.pill.close();
                true
            }
            NavKey::Other => false,
        }
    }

    /// Pointer pressed anywhere outside the nav root.
    pub fn outside_pointer_down(&mut self) {
        if self.pill.close() {
            tracing::debug!("dropdown closed by outside pointer");
        }
    }

    /// A link inside an open dropdown panel was clicked.
    pub fn child_click(&mut self, child_id: &str) {
        self.activate_child(child_id);
        self.pill.close();
    }

    fn activate_root(&mut self, id: &str, method: OpenMethod) {
        let Some(item) = self.tree.get(id) else {
            tracing::debug!(id, "activation of unknown nav item");
            return;
        };
        match &item.kind {
            NavKind::Dropdown { .. } => {
                let (dropdown, label) = (item.id.clone(), item.label.clone());
                // Every root activation is a click; opening is reported too
                self.analytics.track(AnalyticsEvent::NavClick {
                    label: label.clone(),
                });
                if self.pill.toggle(&dropdown) {
                    self.dropdown_opened(method, dropdown.to_string(), label);
                }
            }
            NavKind::Link { href } => {
                let (root, label, href) = (item.id.clone(), item.label.clone(), href.clone());
                self.follow(root, label, &href);
            }
        }
    }

    fn activate_child(&mut self, child_id: &str) -> bool {
        let Some((parent, child)) = self.tree.find_child(child_id) else {
            tracing::debug!(child_id, "activation of unknown child item");
            return false;
        };
        let (root, label, href) = (parent.id.clone(), child.label.clone(), child.href.clone());
        self.follow(root, label, &href);
        true
    }

    /// Link activation: analytics first, then active item, then navigation.
    fn follow(&mut self, root: NavId, label: String, href: &str) {
        self.analytics.track(AnalyticsEvent::NavClick { label });
        self.active = Some(root);
        self.router.navigate(href);
    }

    fn dropdown_opened(&self, method: OpenMethod, dropdown: String, label: String) {
        self.analytics.track(AnalyticsEvent::AboutDropdownOpen {
            method,
            dropdown,
            label,
        });
    }

    // =========================================================================
    // Mobile sheet
    // =========================================================================

    pub fn open_sheet(&mut self) {
        if self.sheet.open() {
            self.analytics.track(AnalyticsEvent::MobileMenuOpen);
        }
    }

    /// Close button.
    pub fn close_sheet(&mut self) {
        self.close_sheet_for(CloseReason::Button);
    }

    /// Hamburger button.
    pub fn toggle_sheet(&mut self) {
        if self.sheet.is_open() {
            self.close_sheet();
        } else {
            self.open_sheet();
        }
    }

    pub fn sheet_backdrop_tap(&mut self) {
        self.close_sheet_for(CloseReason::Backdrop);
    }

    /// Document-level key press while the sheet listens.
    pub fn sheet_key_down(&mut self, key: NavKey) -> bool {
        if key == NavKey::Escape && self.sheet.is_open() {
            self.close_sheet_for(CloseReason::Escape);
            return true;
        }
        false
    }

    /// Root item tapped in the sheet: dropdowns toggle their accordion,
    /// links navigate and close the sheet.
    pub fn sheet_item_click(&mut self, id: &str) {
        let Some(item) = self.tree.get(id) else {
            tracing::debug!(id, "sheet tap on unknown nav item");
            return;
        };
        match &item.kind {
            NavKind::Dropdown { .. } => {
                let (id, label) = (item.id.clone(), item.label.clone());
                self.analytics.track(AnalyticsEvent::NavClick { label });
                self.sheet.toggle_accordion(&id);
            }
            NavKind::Link { href } => {
                let (root, label, href) = (item.id.clone(), item.label.clone(), href.clone());
                self.follow(root, label, &href);
                self.close_sheet_for(CloseReason::Link);
            }
        }
    }

    pub fn sheet_child_click(&mut self, child_id: &str) {
        self.activate_child(child_id);
        self.close_sheet_for(CloseReason::Link);
    }

    fn close_sheet_for(&mut self, reason: CloseReason) {
        if self.sheet.close(reason) && reason.is_user_initiated() {
            self.analytics
                .track(AnalyticsEvent::MobileMenuClose { reason });
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn cta_click(&self, label: &str, location: &str) {
        self.analytics.track(AnalyticsEvent::CtaClick {
            label: label.to_string(),
            location: location.to_string(),
        });
    }

    /// Route changed: recompute the active item and drop transient UI state.
    pub fn route_changed(&mut self, path: &str) {
        self.active = resolve_active(&self.tree, path);
        self.pill.close();
        self.close_sheet_for(CloseReason::RouteChange);
    }

    /// Explicit teardown; dropping the controller releases the same resources.
    pub fn unmount(&mut self) {
        self.pill.close();
        self.close_sheet_for(CloseReason::Unmount);
    }
}

impl std::fmt::Debug for NavController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavController")
            .field("active", &self.active)
            .field("pill", &self.pill)
            .field("sheet", &self.sheet)
            .finish_non_exhaustive()
    }
}
