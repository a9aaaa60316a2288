//! Toast module - notification records, the shared toast list and the
//! per-toast lifecycle.
//!
//! Any producer enqueues a [`ToastRecord`] into the [`ToastStore`]. The
//! [`ToastHost`] renders the list, owns one [`ToastLifecycle`] per toast and
//! feeds the single `Destroyed` event of each toast back into the store.

mod toast_event;
mod toast_host;
mod toast_lifecycle;
mod toast_model;
mod toast_sink;
mod toast_store;

pub use toast_event::*;
pub use toast_host::{ToastEffectFactory, ToastHost};
pub use toast_lifecycle::{ToastEffect, ToastLifecycle};
pub use toast_model::*;
pub use toast_sink::*;
pub use toast_store::ToastStore;
