//! Mobile slide-out sheet.
//!
//! ```text
//! Closed --open()--> Open(None)
//! Open(_) --close / Escape / backdrop / link--> Closed
//! Open(x) --click dropdown d--> Open(d) if x != d, else Open(None)
//! Open(x) --click child--> Closed
//! ```
//!
//! While open the sheet holds the scroll lock and the Escape listener. Both
//! are [`Subscription`]s stored in the sheet, so they are released on every
//! close path and when the sheet itself is dropped.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::item::NavId;
use super::scope::{DocumentEnv, Subscription};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetState {
    Closed,
    Open { expanded: Option<NavId> },
}

/// Why the sheet closed (analytics property).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    Button,
    Escape,
    Backdrop,
    Link,
    RouteChange,
    Unmount,
}

impl CloseReason {
    /// User-initiated closes are reported; lifecycle closes are silent.
    pub fn is_user_initiated(self) -> bool {
        !matches!(self, CloseReason::RouteChange | CloseReason::Unmount)
    }
}

pub struct MobileSheet {
    state: SheetState,
    scroll_lock: Option<Subscription>,
    escape_listener: Option<Subscription>,
    document: Rc<dyn DocumentEnv>,
}

impl MobileSheet {
    pub fn new(document: Rc<dyn DocumentEnv>) -> Self {
        Self {
            state: SheetState::Closed,
            scroll_lock: None,
            escape_listener: None,
            document,
        }
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SheetState::Open { .. })
    }

    pub fn expanded(&self) -> Option<&NavId> {
        match &self.state {
            SheetState::Open { expanded } => expanded.as_ref(),
            SheetState::Closed => None,
        }
    }

    /// Returns true on the Closed -> Open transition. Opening an open sheet
    /// acquires nothing.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.scroll_lock = Some(self.document.lock_scroll());
        self.escape_listener = Some(self.document.listen_escape());
        self.state = SheetState::Open { expanded: None };
        tracing::debug!("mobile sheet opened");
        true
    }

    /// Returns true on the Open -> Closed transition. Resources are released
    /// regardless of the current state.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.escape_listener = None;
        self.scroll_lock = None;
        let was_open = self.is_open();
        self.state = SheetState::Closed;
        if was_open {
            tracing::debug!(?reason, "mobile sheet closed");
        }
        was_open
    }

    /// Toggle an accordion section; only one is expanded at a time.
    /// Ignored while the sheet is closed.
    pub fn toggle_accordion(&mut self, id: &NavId) -> Option<&NavId> {
        if let SheetState::Open { expanded } = &mut self.state {
            *expanded = match expanded.take() {
                Some(current) if current == *id => None,
                _ => Some(id.clone()),
            };
        }
        self.expanded()
    }
}

impl fmt::Debug for MobileSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MobileSheet")
            .field("state", &self.state)
            .field("scroll_locked", &self.scroll_lock.is_some())
            .field("escape_listening", &self.escape_listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingDocument {
        locks: Rc<Cell<i32>>,
        listeners: Rc<Cell<i32>>,
    }

    impl DocumentEnv for CountingDocument {
        fn lock_scroll(&self) -> Subscription {
            let locks = self.locks.clone();
            locks.set(locks.get() + 1);
            Subscription::new(move || locks.set(locks.get() - 1))
        }

        fn listen_escape(&self) -> Subscription {
            let listeners = self.listeners.clone();
            listeners.set(listeners.get() + 1);
            Subscription::new(move || listeners.set(listeners.get() - 1))
        }
    }

    fn sheet() -> (MobileSheet, Rc<Cell<i32>>, Rc<Cell<i32>>) {
        let doc = CountingDocument::default();
        let (locks, listeners) = (doc.locks.clone(), doc.listeners.clone());
        (MobileSheet::new(Rc::new(doc)), locks, listeners)
    }

    #[test]
    fn test_open_acquires_once() {
        let (mut sheet, locks, listeners) = sheet();
        assert!(sheet.open());
        assert!(!sheet.open());
        assert_eq!(locks.get(), 1);
        assert_eq!(listeners.get(), 1);
        assert_eq!(sheet.state(), &SheetState::Open { expanded: None });
    }

    #[test]
    fn test_every_close_reason_releases() {
        for reason in [
            CloseReason::Button,
            CloseReason::Escape,
            CloseReason::Backdrop,
            CloseReason::Link,
            CloseReason::RouteChange,
            CloseReason::Unmount,
        ] {
            let (mut sheet, locks, listeners) = sheet();
            sheet.open();
            assert!(sheet.close(reason));
            assert_eq!(locks.get(), 0, "{reason:?} left scroll locked");
            assert_eq!(listeners.get(), 0, "{reason:?} left escape listener");
            assert!(!sheet.close(reason));
        }
    }

    #[test]
    fn test_drop_releases() {
        let (mut sheet, locks, listeners) = sheet();
        sheet.open();
        drop(sheet);
        assert_eq!(locks.get(), 0);
        assert_eq!(listeners.get(), 0);
    }

    #[test]
    fn test_accordion_toggle_and_switch() {
        let (mut sheet, _, _) = sheet();
        let about = NavId::from("about");
        let legal = NavId::from("legal");

        assert_eq!(sheet.toggle_accordion(&about), None, "ignored while closed");

        sheet.open();
        assert_eq!(sheet.toggle_accordion(&about), Some(&about));
        assert_eq!(sheet.toggle_accordion(&legal), Some(&legal));
        assert_eq!(sheet.toggle_accordion(&legal), None);
    }

    #[test]
    fn test_reopen_starts_collapsed() {
        let (mut sheet, _, _) = sheet();
        sheet.open();
        sheet.toggle_accordion(&NavId::from("about"));
        sheet.close(CloseReason::Button);
        sheet.open();
        assert_eq!(sheet.expanded(), None);
    }
}
