//! Scoped document resources.
//!
//! Anything attached to the document (scroll lock, key listeners, pointer
//! listeners) is handed out as a [`Subscription`]: the teardown runs exactly
//! once, either through [`Subscription::release`] or when the handle drops.

use std::fmt;

/// Teardown handle returned by every acquire/subscribe call.
#[must_use = "dropping a Subscription releases the resource immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to release (SSR, missing document).
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Process-wide document hooks the mobile sheet needs while it is open.
pub trait DocumentEnv {
    /// Disable background scrolling until the subscription is released.
    fn lock_scroll(&self) -> Subscription;

    /// Deliver Escape key presses to the menu until the subscription is released.
    fn listen_escape(&self) -> Subscription;
}

/// Document without side effects, used for server rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDocument;

impl DocumentEnv for NoopDocument {
    fn lock_scroll(&self) -> Subscription {
        Subscription::noop()
    }

    fn listen_escape(&self) -> Subscription {
        Subscription::noop()
    }
}
