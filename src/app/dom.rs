//! Browser bindings for the navigation menu.
//!
//! Every listener and style change is returned as a [`Subscription`]. Off
//! wasm (server rendering, native tests) the same calls are no-ops.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::nav::{DocumentEnv, Subscription};

/// Document hooks used by the mobile sheet.
#[derive(Default)]
pub struct BrowserDocument {
    on_escape: RefCell<Option<Rc<dyn Fn()>>>,
}

impl BrowserDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where Escape presses go while the sheet is listening.
    pub fn set_escape_handler(&self, handler: impl Fn() + 'static) {
        *self.on_escape.borrow_mut() = Some(Rc::new(handler));
    }
}

impl DocumentEnv for BrowserDocument {
    fn lock_scroll(&self) -> Subscription {
        platform::lock_body_scroll()
    }

    fn listen_escape(&self) -> Subscription {
        let Some(handler) = self.on_escape.borrow().clone() else {
            tracing::debug!("no escape handler registered");
            return Subscription::noop();
        };
        platform::listen_key("Escape", move || handler())
    }
}

/// Call `on_outside` for every pointer press outside the element `root_id`.
pub fn listen_outside_pointer(
    root_id: &'static str,
    on_outside: impl Fn() + 'static,
) -> Subscription {
    platform::listen_outside_pointer(root_id, on_outside)
}

/// Call `on_scroll` with `window.scrollY` after every window scroll.
pub fn listen_scroll(on_scroll: impl Fn(f64) + 'static) -> Subscription {
    platform::listen_scroll(on_scroll)
}

/// Current `location.pathname` ("/" off the browser).
pub fn current_path() -> String {
    platform::current_path()
}

/// Timer used for the hover-close delay and counter frames.
pub async fn sleep(delay: Duration) {
    platform::sleep(delay).await
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
mod platform {
    use std::time::Duration;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::nav::Subscription;

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    /// Attach `handler` to `target` for `event`; detach on release.
    fn add_listener(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Subscription {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!(event, "failed to attach listener");
            return Subscription::noop();
        }
        Subscription::new(move || {
            let _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            // Release can run inside this very callback (Escape closes the
            // sheet), so the closure is freed on the next turn.
            wasm_bindgen_futures::spawn_local(async move { drop(closure) });
        })
    }

    fn add_document_listener(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Subscription {
        match document() {
            Some(document) => add_listener(document.into(), event, handler),
            None => Subscription::noop(),
        }
    }

    pub fn listen_scroll(on_scroll: impl Fn(f64) + 'static) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };
        add_listener(window.into(), "scroll", move |_| {
            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                on_scroll(y);
            }
        })
    }

    pub fn listen_key(key: &'static str, on_key: impl Fn() + 'static) -> Subscription {
        add_document_listener("keydown", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if event.key() == key {
                    on_key();
                }
            }
        })
    }

    pub fn listen_outside_pointer(
        root_id: &'static str,
        on_outside: impl Fn() + 'static,
    ) -> Subscription {
        add_document_listener("mousedown", move |event| {
            let Some(root) = document().and_then(|d| d.get_element_by_id(root_id)) else {
                return;
            };
            let target = event.target();
            let inside = target
                .as_ref()
                .and_then(|t| t.dyn_ref::<web_sys::Node>())
                .is_some_and(|node| root.contains(Some(node)));
            if !inside {
                on_outside();
            }
        })
    }

    pub fn lock_body_scroll() -> Subscription {
        let Some(body) = document().and_then(|d| d.body()) else {
            return Subscription::noop();
        };
        if body.style().set_property("overflow", "hidden").is_err() {
            return Subscription::noop();
        }
        Subscription::new(move || {
            let _ = body.style().remove_property("overflow");
        })
    }

    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    pub async fn sleep(delay: Duration) {
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
}

// ============ Native (SSR / tests) ============

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use std::time::Duration;

    use crate::nav::Subscription;

    pub fn listen_key(_key: &'static str, _on_key: impl Fn() + 'static) -> Subscription {
        Subscription::noop()
    }

    pub fn listen_outside_pointer(
        _root_id: &'static str,
        _on_outside: impl Fn() + 'static,
    ) -> Subscription {
        Subscription::noop()
    }

    pub fn listen_scroll(_on_scroll: impl Fn(f64) + 'static) -> Subscription {
        Subscription::noop()
    }

    pub fn lock_body_scroll() -> Subscription {
        Subscription::noop()
    }

    pub fn current_path() -> String {
        "/".to_string()
    }

    #[cfg(feature = "server")]
    pub async fn sleep(delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    #[cfg(not(feature = "server"))]
    pub async fn sleep(_delay: Duration) {}
}
