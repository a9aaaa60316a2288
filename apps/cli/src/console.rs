//! Terminal rendering of toasts.

use vaultboard_core::toasts::{EffectOptions, ToastEffect, ToastEffectFactory, ToastRecord};

/// A terminal has no transition: showing logs the toast, hiding is instant
/// and the caller signals completion right after dismissing.
pub struct ConsoleToastEffect {
    title: String,
    style: String,
}

impl ToastEffect for ConsoleToastEffect {
    fn show(&mut self, options: EffectOptions) {
        tracing::info!(
            title = %self.title,
            style = %self.style,
            autohide = options.autohide,
            "toast shown"
        );
    }

    fn hide(&mut self) {
        tracing::debug!(title = %self.title, "toast hidden");
    }
}

pub struct ConsoleToastEffectFactory;

impl ToastEffectFactory for ConsoleToastEffectFactory {
    fn create(&self, record: &ToastRecord) -> Box<dyn ToastEffect> {
        Box::new(ConsoleToastEffect {
            title: record.title.clone(),
            style: record.style.clone(),
        })
    }
}
