//! Shared toast list.

use std::sync::{Arc, RwLock};

use log::{debug, error, warn};

use super::{ToastEvent, ToastEventSink, ToastRecord};
use crate::errors::{Error, Result};

/// The live toast list, in enqueue order.
///
/// Producers append through [`ToastStore::enqueue`]; records leave the list
/// only when a `Destroyed` event reaches the store (or through an explicit
/// [`ToastStore::remove`] by the owner).
#[derive(Clone, Default)]
pub struct ToastStore {
    toasts: Arc<RwLock<Vec<ToastRecord>>>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast. Titles are expected to be unique among live toasts;
    /// a duplicate is logged and still appended.
    pub fn enqueue(&self, record: ToastRecord) -> Result<()> {
        let mut toasts = self
            .toasts
            .write()
            .map_err(|e| Error::Store(e.to_string()))?;

        if toasts.iter().any(|t| t.title == record.title) {
            warn!(
                "Toast '{}' enqueued while another toast with the same title is live",
                record.title
            );
        }

        debug!("Enqueued toast '{}'", record.title);
        toasts.push(record);
        Ok(())
    }

    /// Removes the first toast with the given title. Returns whether one was
    /// removed.
    pub fn remove(&self, title: &str) -> Result<bool> {
        let mut toasts = self
            .toasts
            .write()
            .map_err(|e| Error::Store(e.to_string()))?;

        match toasts.iter().position(|t| t.title == title) {
            Some(index) => {
                toasts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn snapshot(&self) -> Result<Vec<ToastRecord>> {
        let toasts = self
            .toasts
            .read()
            .map_err(|e| Error::Store(e.to_string()))?;
        Ok(toasts.clone())
    }

    pub fn contains(&self, title: &str) -> Result<bool> {
        let toasts = self
            .toasts
            .read()
            .map_err(|e| Error::Store(e.to_string()))?;
        Ok(toasts.iter().any(|t| t.title == title))
    }

    pub fn len(&self) -> Result<usize> {
        let toasts = self
            .toasts
            .read()
            .map_err(|e| Error::Store(e.to_string()))?;
        Ok(toasts.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ToastEventSink for ToastStore {
    fn emit(&self, event: ToastEvent) {
        match event {
            ToastEvent::Destroyed { title } => match self.remove(&title) {
                Ok(true) => debug!("Removed destroyed toast '{}'", title),
                Ok(false) => debug!("Destroyed toast '{}' was not in the list", title),
                Err(e) => error!("Failed to remove destroyed toast '{}': {}", title, e),
            },
        }
    }
}
