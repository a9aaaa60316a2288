//! Application store shared by the dashboard.

use std::sync::Arc;

use crate::toasts::{ToastEffectFactory, ToastHost, ToastStore};
use crate::vaults::VaultStore;

/// Process-wide state: the vault list and the toast list.
///
/// Created once at startup and handed to every producer and reader. Clones
/// share the same underlying lists.
#[derive(Clone, Default)]
pub struct AppStore {
    vaults: VaultStore,
    toasts: ToastStore,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vaults(&self) -> &VaultStore {
        &self.vaults
    }

    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    /// A toast host rendering this store's toast list.
    pub fn toast_host(&self, factory: Arc<dyn ToastEffectFactory>) -> ToastHost {
        ToastHost::new(self.toasts.clone(), factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::ToastRecord;
    use crate::vaults::VaultRecord;

    #[test]
    fn test_clones_share_lists() {
        let store = AppStore::new();
        let handle = store.clone();

        handle
            .vaults()
            .replace(vec![VaultRecord::new("dai", 18)])
            .unwrap();
        handle
            .toasts()
            .enqueue(ToastRecord::new("T1", "msg", "info", "primary"))
            .unwrap();

        assert_eq!(store.vaults().snapshot().unwrap().len(), 1);
        assert!(store.toasts().contains("T1").unwrap());
    }
}
