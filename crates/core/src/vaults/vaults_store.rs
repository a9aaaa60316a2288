//! Shared vault list.

use std::sync::{Arc, RwLock};

use super::{AmountField, PortfolioTotal, VaultRecord};
use crate::errors::{Error, Result};

/// The committed vault list. Writers replace the whole list at once so a
/// reader never observes a partial update.
#[derive(Clone, Default)]
pub struct VaultStore {
    vaults: Arc<RwLock<Vec<VaultRecord>>>,
}

impl VaultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, records: Vec<VaultRecord>) -> Result<()> {
        let mut vaults = self
            .vaults
            .write()
            .map_err(|e| Error::Store(e.to_string()))?;
        *vaults = records;
        Ok(())
    }

    pub fn snapshot(&self) -> Result<Vec<VaultRecord>> {
        let vaults = self
            .vaults
            .read()
            .map_err(|e| Error::Store(e.to_string()))?;
        Ok(vaults.clone())
    }

    /// Aggregate of the selected amount over the current snapshot.
    pub fn portfolio_total(&self, field: AmountField) -> Result<PortfolioTotal> {
        let vaults = self
            .vaults
            .read()
            .map_err(|e| Error::Store(e.to_string()))?;
        Ok(PortfolioTotal::of(&vaults, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_and_snapshot() {
        let store = VaultStore::new();
        assert!(store.snapshot().unwrap().is_empty());

        store
            .replace(vec![VaultRecord::new("dai", 0).with_tvl(10u64)])
            .unwrap();
        assert_eq!(store.snapshot().unwrap().len(), 1);
        assert_eq!(
            store.portfolio_total(AmountField::Tvl).unwrap().render(),
            "$10.00"
        );

        store.replace(Vec::new()).unwrap();
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = VaultStore::new();
        let reader = store.clone();
        store
            .replace(vec![VaultRecord::new("usdc", 6).with_balance(1u64)])
            .unwrap();
        assert_eq!(reader.snapshot().unwrap()[0].token, "usdc");
    }
}
