//! Registry of statically known token and vault definitions.
//!
//! Definitions are keyed by `(symbol, chain_id)` and populated once at
//! startup from configuration.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHAIN_ID;
use crate::errors::{Error, Result};

/// Contract addresses of a token and its vault on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDefinition {
    pub symbol: String,
    pub chain_id: u64,
    pub token_address: String,
    pub vault_address: String,
}

impl AssetDefinition {
    fn key(&self) -> (String, u64) {
        registry_key(&self.symbol, self.chain_id)
    }
}

fn registry_key(symbol: &str, chain_id: u64) -> (String, u64) {
    (symbol.trim().to_lowercase(), chain_id)
}

#[derive(Debug, Clone)]
pub struct AssetRegistry {
    definitions: HashMap<(String, u64), AssetDefinition>,
    default_chain_id: u64,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::with_default_chain_id(DEFAULT_CHAIN_ID)
    }

    pub fn with_default_chain_id(default_chain_id: u64) -> Self {
        Self {
            definitions: HashMap::new(),
            default_chain_id,
        }
    }

    pub fn default_chain_id(&self) -> u64 {
        self.default_chain_id
    }

    /// Inserts a definition, replacing any previous one under the same key.
    pub fn register(&mut self, definition: AssetDefinition) {
        let key = definition.key();
        if let Some(previous) = self.definitions.insert(key, definition) {
            warn!(
                "Replaced asset definition for '{}' on chain {}",
                previous.symbol, previous.chain_id
            );
        }
    }

    pub fn lookup(&self, symbol: &str, chain_id: u64) -> Result<&AssetDefinition> {
        self.definitions
            .get(&registry_key(symbol, chain_id))
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "No asset definition for '{}' on chain {}",
                    symbol, chain_id
                ))
            })
    }

    /// Looks up a definition on the chain reported by the wallet provider.
    pub fn lookup_for_provider(
        &self,
        symbol: &str,
        provider_chain_id: Option<&str>,
    ) -> Result<&AssetDefinition> {
        self.lookup(symbol, self.resolve_chain_id(provider_chain_id))
    }

    /// Parses a hex (`0x89`) or decimal chain id. Absent or malformed ids
    /// fall back to the default chain.
    pub fn resolve_chain_id(&self, provider_chain_id: Option<&str>) -> u64 {
        let Some(raw) = provider_chain_id.map(str::trim).filter(|s| !s.is_empty()) else {
            return self.default_chain_id;
        };

        let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => raw.parse::<u64>().ok(),
        };

        parsed.unwrap_or_else(|| {
            debug!(
                "Unparseable chain id '{}', using default {}",
                raw, self.default_chain_id
            );
            self.default_chain_id
        })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
