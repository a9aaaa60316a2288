//! Per-toast lifecycle: show once, hide on request, report destruction once.

use std::sync::Arc;

use log::debug;

use super::{EffectOptions, ToastEvent, ToastEventSink, ToastRecord, ToastState};

/// Visual show/hide effect bound to one toast element.
///
/// The effect reports the end of a hide transition asynchronously; the host
/// forwards that signal to [`ToastLifecycle::on_hidden`].
pub trait ToastEffect: Send {
    fn show(&mut self, options: EffectOptions);

    /// Starts the hide transition.
    fn hide(&mut self);
}

/// Subscription to the effect's hide completion. Armed once per toast.
#[derive(Debug)]
struct HiddenListener {
    title: String,
}

/// Drives one toast through `Created -> Showing -> Dismissed`.
///
/// The lifecycle owns its effect handle exclusively. Rendering more than
/// once never re-shows the effect or re-arms the listener, so the
/// `Destroyed` event is emitted at most once. Dropping the lifecycle before
/// the hide completes releases the listener and emits nothing.
pub struct ToastLifecycle {
    record: ToastRecord,
    state: ToastState,
    effect: Box<dyn ToastEffect>,
    sink: Arc<dyn ToastEventSink>,
    hidden_listener: Option<HiddenListener>,
    hide_requested: bool,
}

impl ToastLifecycle {
    pub fn new(
        record: ToastRecord,
        effect: Box<dyn ToastEffect>,
        sink: Arc<dyn ToastEventSink>,
    ) -> Self {
        Self {
            record,
            state: ToastState::Created,
            effect,
            sink,
            hidden_listener: None,
            hide_requested: false,
        }
    }

    pub fn record(&self) -> &ToastRecord {
        &self.record
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    /// Whether a hide has been requested through [`ToastLifecycle::dismiss`].
    pub fn is_hiding(&self) -> bool {
        self.hide_requested && self.state == ToastState::Showing
    }

    /// Render pass. Only the first call has an effect.
    pub fn render(&mut self) {
        match self.state {
            ToastState::Created => {
                self.effect.show(EffectOptions::persistent());
                self.hidden_listener = Some(HiddenListener {
                    title: self.record.title.clone(),
                });
                self.state = ToastState::Showing;
                debug!("Toast '{}' shown", self.record.title);
            }
            ToastState::Showing | ToastState::Dismissed => {}
        }
    }

    /// User close or forced hide. Returns false when there is nothing to
    /// hide (not shown yet, already hiding, or already dismissed).
    pub fn dismiss(&mut self) -> bool {
        if self.state != ToastState::Showing || self.hide_requested {
            debug!(
                "Ignoring dismiss for toast '{}' in state {:?}",
                self.record.title, self.state
            );
            return false;
        }

        self.hide_requested = true;
        self.effect.hide();
        true
    }

    /// Hide-completion signal from the effect.
    ///
    /// Emits `Destroyed` the first time it fires while the listener is
    /// armed and returns whether it did.
    pub fn on_hidden(&mut self) -> bool {
        match self.hidden_listener.take() {
            Some(listener) => {
                self.state = ToastState::Dismissed;
                self.sink.emit(ToastEvent::destroyed(listener.title));
                true
            }
            None => {
                debug!(
                    "Ignoring hide completion for toast '{}' in state {:?}",
                    self.record.title, self.state
                );
                false
            }
        }
    }
}

impl Drop for ToastLifecycle {
    fn drop(&mut self) {
        if let Some(listener) = self.hidden_listener.take() {
            debug!(
                "Toast '{}' torn down before hide completed; listener released",
                listener.title
            );
        }
    }
}
