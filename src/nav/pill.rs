//! Desktop pill navigation state.
//!
//! Dropdowns open instantly and close after [`HOVER_CLOSE_DELAY`] so the
//! pointer can cross the gap between trigger and panel. The delayed close is a
//! ticket: at most one is outstanding, every cancel path clears it, and a
//! ticket that is no longer current does nothing when it fires.

use std::time::Duration;

use serde::Serialize;

use super::item::{NavId, NavItem};

/// Grace period before a hover-opened dropdown closes.
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Handle for a scheduled hover close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// How a dropdown was opened (analytics property).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMethod {
    Hover,
    Click,
    Keyboard,
}

#[derive(Debug, Default)]
pub struct PillNav {
    open: Option<NavId>,
    hovered: Option<NavId>,
    pending_close: Option<CloseTicket>,
    next_ticket: u64,
}

impl PillNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dropdown(&self) -> Option<&NavId> {
        self.open.as_ref()
    }

    pub fn hovered(&self) -> Option<&NavId> {
        self.hovered.as_ref()
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    pub fn is_open(&self, id: &NavId) -> bool {
        self.open.as_ref() == Some(id)
    }

    /// Pointer entered a root item. Returns true if a dropdown just opened.
    ///
    /// Entering any root item cancels a pending close. A dropdown trigger
    /// then opens (or keeps) its own panel; a plain link leaves the open
    /// dropdown as it is until the pointer leaves again.
    pub fn hover_enter(&mut self, item: &NavItem) -> bool {
        self.hovered = Some(item.id.clone());
        self.pending_close = None;
        if !item.is_dropdown() {
            return false;
        }
        let opened = !self.is_open(&item.id);
        self.open = Some(item.id.clone());
        opened
    }

    /// Pointer left a root item; schedules the delayed close.
    pub fn hover_leave(&mut self) -> Option<CloseTicket> {
        self.hovered = None;
        self.schedule_close()
    }

    /// Pointer entered the open dropdown's panel.
    pub fn panel_hover_enter(&mut self) {
        self.pending_close = None;
        self.hovered = self.open.clone();
    }

    pub fn panel_hover_leave(&mut self) -> Option<CloseTicket> {
        self.hovered = None;
        self.schedule_close()
    }

    /// A scheduled close fired. Returns true if it closed the dropdown;
    /// stale or cancelled tickets are ignored.
    pub fn expire(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close != Some(ticket) {
            return false;
        }
        self.pending_close = None;
        self.open.take().is_some()
    }

    /// Toggle a dropdown. Returns true if it is now open.
    pub fn toggle(&mut self, id: &NavId) -> bool {
        self.pending_close = None;
        if self.is_open(id) {
            self.open = None;
            false
        } else {
            self.open = Some(id.clone());
            true
        }
    }

    /// Immediate close; supersedes any pending hover close.
    pub fn close(&mut self) -> bool {
        self.pending_close = None;
        self.open.take().is_some()
    }

    fn schedule_close(&mut self) -> Option<CloseTicket> {
        if self.open.is_none() {
            self.pending_close = None;
            return None;
        }
        self.next_ticket += 1;
        let ticket = CloseTicket(self.next_ticket);
        self.pending_close = Some(ticket);
        Some(ticket)
    }
}
