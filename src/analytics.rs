//! Fire-and-forget analytics.
//!
//! UI code calls [`Analytics::track`] with a typed [`AnalyticsEvent`]. The
//! event is flattened to `(name, properties)` and handed to an
//! [`AnalyticsSink`]. Sink failures are logged and dropped: tracking never
//! returns an error and never blocks navigation.
//!
//! `AppDownload`, `VideoModalOpen` and `VideoPlay` are catalogue-only: no
//! component in this crate emits them, they exist so sinks share one list.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::nav::{CloseReason, OpenMethod};

/// Events emitted by the site.
/// Serialized as `{"event": "nav_click", "properties": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "properties", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    NavClick { label: String },
    CtaClick { label: String, location: String },
    MobileMenuOpen,
    MobileMenuClose { reason: CloseReason },
    AboutDropdownOpen {
        method: OpenMethod,
        dropdown: String,
        label: String,
    },
    AppDownload { platform: String },
    VideoModalOpen { video: String },
    VideoPlay { video: String },
    LanguageChange { language: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::NavClick { .. } => "nav_click",
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::MobileMenuOpen => "mobile_menu_open",
            AnalyticsEvent::MobileMenuClose { .. } => "mobile_menu_close",
            AnalyticsEvent::AboutDropdownOpen { .. } => "about_dropdown_open",
            AnalyticsEvent::AppDownload { .. } => "app_download",
            AnalyticsEvent::VideoModalOpen { .. } => "video_modal_open",
            AnalyticsEvent::VideoPlay { .. } => "video_play",
            AnalyticsEvent::LanguageChange { .. } => "language_change",
        }
    }

    /// Event properties as a JSON object (empty for events without any).
    pub fn properties(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut obj)) => match obj.remove("properties") {
                Some(Value::Object(props)) => props,
                _ => Map::new(),
            },
            _ => Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("analytics backend unavailable: {0}")]
    Unavailable(String),
    #[error("analytics event rejected: {0}")]
    Rejected(String),
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    fn record(&self, name: &str, properties: &Map<String, Value>) -> Result<(), AnalyticsError>;
}

/// Emits each event as a structured `tracing` record on the `analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, name: &str, properties: &Map<String, Value>) -> Result<(), AnalyticsError> {
        let props = Value::Object(properties.clone());
        tracing::info!(target: "analytics", event = name, properties = %props, "analytics event");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _name: &str, _properties: &Map<String, Value>) -> Result<(), AnalyticsError> {
        Ok(())
    }
}

/// One event captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

/// Keeps events in memory; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.clone()).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, name: &str, properties: &Map<String, Value>) -> Result<(), AnalyticsError> {
        self.events.borrow_mut().push(RecordedEvent {
            name: name.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }
}

/// Cheap-to-clone tracking handle shared by the UI.
#[derive(Clone)]
pub struct Analytics {
    sink: Rc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    /// Default: structured log records.
    pub fn tracing() -> Self {
        Self::new(TracingSink)
    }

    pub fn disabled() -> Self {
        Self::new(NoopSink)
    }

    /// Record an event. Failures are logged at warn and discarded.
    pub fn track(&self, event: AnalyticsEvent) {
        let name = event.name();
        let properties = event.properties();
        if let Err(e) = self.sink.record(name, &properties) {
            tracing::warn!(event = name, "analytics event dropped: {}", e);
        }
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::tracing()
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingSink;

    impl AnalyticsSink for FailingSink {
        fn record(&self, _: &str, _: &Map<String, Value>) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn test_event_names_and_properties() {
        let event = AnalyticsEvent::NavClick {
            label: "Technologies".into(),
        };
        assert_eq!(event.name(), "nav_click");
        assert_eq!(Value::Object(event.properties()), json!({"label": "Technologies"}));

        let event = AnalyticsEvent::AboutDropdownOpen {
            method: OpenMethod::Keyboard,
            dropdown: "about-zypp".into(),
            label: "About Zypp".into(),
        };
        assert_eq!(event.name(), "about_dropdown_open");
        assert_eq!(event.properties()["method"], "keyboard");
        assert_eq!(event.properties()["label"], "About Zypp");

        let event = AnalyticsEvent::MobileMenuClose {
            reason: CloseReason::Backdrop,
        };
        assert_eq!(event.properties()["reason"], "backdrop");
    }

    #[test]
    fn test_unit_event_has_empty_properties() {
        assert!(AnalyticsEvent::MobileMenuOpen.properties().is_empty());
        assert_eq!(
            serde_json::to_value(AnalyticsEvent::MobileMenuOpen).unwrap(),
            json!({"event": "mobile_menu_open"})
        );
    }

    #[test]
    fn test_serialized_name_matches_name() {
        let events = [
            AnalyticsEvent::CtaClick {
                label: "Become a Partner".into(),
                location: "navbar".into(),
            },
            AnalyticsEvent::AppDownload {
                platform: "android".into(),
            },
            AnalyticsEvent::VideoModalOpen {
                video: "hero".into(),
            },
            AnalyticsEvent::VideoPlay {
                video: "hero".into(),
            },
            AnalyticsEvent::LanguageChange {
                language: "hi".into(),
            },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["event"], event.name());
        }
    }

    #[test]
    fn test_failing_sink_is_swallowed() {
        let analytics = Analytics::new(FailingSink);
        analytics.track(AnalyticsEvent::MobileMenuOpen);
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let analytics = Analytics::new(sink.clone());
        analytics.track(AnalyticsEvent::LanguageChange {
            language: "fr".into(),
        });
        assert_eq!(sink.names(), ["language_change"]);
        assert_eq!(sink.events()[0].properties["language"], "fr");
        sink.clear();
        assert!(sink.events().is_empty());
    }
}
