//! Toast event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::ToastEvent;

/// Trait for receiving toast events.
///
/// `emit()` must be fast and must not fail the caller; implementations log
/// their own problems.
pub trait ToastEventSink: Send + Sync {
    /// Emit a single toast event.
    fn emit(&self, event: ToastEvent);

    /// Emit multiple toast events.
    fn emit_batch(&self, events: Vec<ToastEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpToastEventSink;

impl ToastEventSink for NoOpToastEventSink {
    fn emit(&self, _event: ToastEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockToastEventSink {
    events: Arc<Mutex<Vec<ToastEvent>>>,
}

impl MockToastEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ToastEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of Destroyed events seen for a title.
    pub fn destroyed_count(&self, title: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, ToastEvent::Destroyed { title: t } if t == title))
            .count()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ToastEventSink for MockToastEventSink {
    fn emit(&self, event: ToastEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Forwards every event to each inner sink, in insertion order.
#[derive(Clone, Default)]
pub struct CompositeToastEventSink {
    sinks: Vec<Arc<dyn ToastEventSink>>,
}

impl CompositeToastEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Arc<dyn ToastEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ToastEventSink for CompositeToastEventSink {
    fn emit(&self, event: ToastEvent) {
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}
