//! Dashboard configuration.
//!
//! Loaded once at startup from a JSON document:
//!
//! ```json
//! {
//!   "defaultChainId": 137,
//!   "assets": [
//!     { "symbol": "dai", "chainId": 137, "tokenAddress": "0x..", "vaultAddress": "0x.." }
//!   ]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHAIN_ID;
use crate::errors::{Error, Result, ValidationError};
use crate::vaults::{AssetDefinition, AssetRegistry};

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Chain assumed when the wallet provider does not report one
    #[serde(default = "default_chain_id")]
    pub default_chain_id: u64,
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_chain_id: DEFAULT_CHAIN_ID,
            assets: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded dashboard config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_chain_id == 0 {
            return Err(Error::InvalidConfigValue(
                "defaultChainId must be non-zero".to_string(),
            ));
        }

        for (i, asset) in self.assets.iter().enumerate() {
            if asset.symbol.trim().is_empty() {
                return Err(ValidationError::MissingField(format!("assets[{}].symbol", i)).into());
            }
            if asset.chain_id == 0 {
                return Err(Error::InvalidConfigValue(format!(
                    "assets[{}].chainId must be non-zero",
                    i
                )));
            }
            if asset.token_address.trim().is_empty() {
                return Err(
                    ValidationError::MissingField(format!("assets[{}].tokenAddress", i)).into(),
                );
            }
            if asset.vault_address.trim().is_empty() {
                return Err(
                    ValidationError::MissingField(format!("assets[{}].vaultAddress", i)).into(),
                );
            }
        }
        Ok(())
    }

    pub fn build_registry(&self) -> AssetRegistry {
        let mut registry = AssetRegistry::with_default_chain_id(self.default_chain_id);
        for asset in &self.assets {
            registry.register(asset.clone());
        }
        registry
    }
}
