//! Renders the shared toast list and routes effect signals to lifecycles.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use super::{ToastEffect, ToastEventSink, ToastLifecycle, ToastRecord, ToastState, ToastStore};
use crate::errors::{Error, Result};

/// Creates the visual effect handle for a newly rendered toast.
pub trait ToastEffectFactory: Send + Sync {
    fn create(&self, record: &ToastRecord) -> Box<dyn ToastEffect>;
}

/// Owns one [`ToastLifecycle`] per live toast title.
///
/// Each [`ToastHost::render`] reconciles the lifecycles with the store
/// snapshot: new records get a lifecycle, while dismissed lifecycles and
/// those whose record left the store are torn down (releasing their
/// listener).
pub struct ToastHost {
    store: ToastStore,
    sink: Arc<dyn ToastEventSink>,
    factory: Arc<dyn ToastEffectFactory>,
    live: Vec<ToastLifecycle>,
}

impl ToastHost {
    /// Destroy events go straight to `store`.
    pub fn new(store: ToastStore, factory: Arc<dyn ToastEffectFactory>) -> Self {
        let sink: Arc<dyn ToastEventSink> = Arc::new(store.clone());
        Self {
            store,
            sink,
            factory,
            live: Vec::new(),
        }
    }

    /// Sets the sink receiving destroy events for lifecycles created from now on.
    pub fn with_event_sink(mut self, sink: Arc<dyn ToastEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// One render pass over the current store snapshot.
    pub fn render(&mut self) -> Result<()> {
        let snapshot = self.store.snapshot()?;
        let titles: HashSet<&str> = snapshot.iter().map(|t| t.title.as_str()).collect();

        let before = self.live.len();
        // A dismissed lifecycle is finished; a record still (or again) under
        // its title gets a fresh one below.
        self.live.retain(|lifecycle| {
            lifecycle.state() != ToastState::Dismissed && titles.contains(lifecycle.title())
        });
        if self.live.len() != before {
            debug!("Tore down {} toast(s)", before - self.live.len());
        }

        for record in &snapshot {
            if self.position(&record.title).is_none() {
                let effect = self.factory.create(record);
                self.live.push(ToastLifecycle::new(
                    record.clone(),
                    effect,
                    Arc::clone(&self.sink),
                ));
            }
        }

        for lifecycle in &mut self.live {
            lifecycle.render();
        }
        Ok(())
    }

    /// User close or forced hide of a live toast.
    pub fn dismiss(&mut self, title: &str) -> Result<bool> {
        let index = self.require(title)?;
        Ok(self.live[index].dismiss())
    }

    /// Forwards the effect's hide-completion signal for a toast.
    pub fn complete_hide(&mut self, title: &str) -> Result<bool> {
        let index = self.require(title)?;
        Ok(self.live[index].on_hidden())
    }

    pub fn state_of(&self, title: &str) -> Option<ToastState> {
        self.position(title).map(|i| self.live[i].state())
    }

    /// Titles with a lifecycle, in render order.
    pub fn live_titles(&self) -> Vec<String> {
        self.live.iter().map(|l| l.title().to_string()).collect()
    }

    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.live.iter().position(|l| l.title() == title)
    }

    fn require(&self, title: &str) -> Result<usize> {
        self.position(title)
            .ok_or_else(|| Error::NotFound(format!("No rendered toast titled '{}'", title)))
    }
}
