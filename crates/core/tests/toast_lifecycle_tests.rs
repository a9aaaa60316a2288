//! End-to-end toast scenarios: producer enqueue, host render, user dismiss,
//! effect completion and removal from the shared store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vaultboard_core::store::AppStore;
use vaultboard_core::toasts::{
    CompositeToastEventSink, EffectOptions, MockToastEventSink, ToastEffect, ToastEffectFactory,
    ToastEventSink, ToastHost, ToastRecord, ToastState,
};

/// Counts effect calls per toast title.
#[derive(Clone, Default)]
struct EffectLog {
    shows: Arc<Mutex<HashMap<String, usize>>>,
    hides: Arc<Mutex<HashMap<String, usize>>>,
}

impl EffectLog {
    fn shows(&self, title: &str) -> usize {
        *self.shows.lock().unwrap().get(title).unwrap_or(&0)
    }

    fn hides(&self, title: &str) -> usize {
        *self.hides.lock().unwrap().get(title).unwrap_or(&0)
    }
}

struct LoggedEffect {
    title: String,
    log: EffectLog,
}

impl ToastEffect for LoggedEffect {
    fn show(&mut self, options: EffectOptions) {
        assert!(!options.autohide, "toasts must not auto-dismiss");
        *self.log.shows.lock().unwrap().entry(self.title.clone()).or_default() += 1;
    }

    fn hide(&mut self) {
        *self.log.hides.lock().unwrap().entry(self.title.clone()).or_default() += 1;
    }
}

struct LoggedFactory {
    log: EffectLog,
}

impl ToastEffectFactory for LoggedFactory {
    fn create(&self, record: &ToastRecord) -> Box<dyn ToastEffect> {
        Box::new(LoggedEffect {
            title: record.title.clone(),
            log: self.log.clone(),
        })
    }
}

fn setup() -> (AppStore, ToastHost, EffectLog, MockToastEventSink) {
    let store = AppStore::new();
    let log = EffectLog::default();
    let observer = MockToastEventSink::new();

    let sink = CompositeToastEventSink::new()
        .with_sink(Arc::new(store.toasts().clone()) as Arc<dyn ToastEventSink>)
        .with_sink(Arc::new(observer.clone()));

    let host = store
        .toast_host(Arc::new(LoggedFactory { log: log.clone() }))
        .with_event_sink(Arc::new(sink));

    (store, host, log, observer)
}

#[test]
fn test_toast_removed_after_hide_completion() {
    let (store, mut host, log, observer) = setup();

    store
        .toasts()
        .enqueue(ToastRecord::new("T1", "msg", "info", "primary"))
        .unwrap();
    host.render().unwrap();
    assert_eq!(host.state_of("T1"), Some(ToastState::Showing));
    assert_eq!(log.shows("T1"), 1);

    host.dismiss("T1").unwrap();
    assert!(store.toasts().contains("T1").unwrap());

    host.complete_hide("T1").unwrap();
    assert!(!store.toasts().contains("T1").unwrap());
    assert_eq!(observer.destroyed_count("T1"), 1);
}

#[test]
fn test_rerenders_while_showing_emit_single_destroy() {
    let (store, mut host, log, observer) = setup();

    store
        .toasts()
        .enqueue(ToastRecord::new("T1", "msg", "info", "primary"))
        .unwrap();
    host.render().unwrap();
    host.render().unwrap();

    assert!(host.dismiss("T1").unwrap());
    assert!(host.complete_hide("T1").unwrap());
    // A duplicate completion signal is ignored.
    assert!(!host.complete_hide("T1").unwrap());

    assert_eq!(log.shows("T1"), 1);
    assert_eq!(log.hides("T1"), 1);
    assert_eq!(observer.destroyed_count("T1"), 1);

    host.render().unwrap();
    assert_eq!(host.state_of("T1"), None);
    assert_eq!(observer.len(), 1);
}

#[test]
fn test_toasts_stay_until_dismissed() {
    let (store, mut host, _log, observer) = setup();

    store
        .toasts()
        .enqueue(ToastRecord::new("Deposit failed", "rejected", "x-circle", "danger"))
        .unwrap();
    store
        .toasts()
        .enqueue(ToastRecord::new("Approved", "done", "check", "success"))
        .unwrap();

    for _ in 0..5 {
        host.render().unwrap();
    }

    assert_eq!(store.toasts().len().unwrap(), 2);
    assert!(observer.is_empty());

    host.dismiss("Approved").unwrap();
    host.complete_hide("Approved").unwrap();
    host.render().unwrap();

    assert_eq!(host.live_titles(), vec!["Deposit failed"]);
    assert_eq!(observer.events().len(), 1);
}

#[test]
fn test_teardown_before_completion_emits_nothing() {
    let (store, mut host, _log, observer) = setup();

    store
        .toasts()
        .enqueue(ToastRecord::new("T1", "msg", "info", "primary"))
        .unwrap();
    host.render().unwrap();
    host.dismiss("T1").unwrap();

    // The owner reclaims the entry itself, e.g. on unmount.
    store.toasts().remove("T1").unwrap();
    host.render().unwrap();

    assert!(host.live_titles().is_empty());
    assert!(observer.is_empty());
}
