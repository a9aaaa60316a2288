//! Vault module - records, display views, the asset registry and the shared
//! vault list.

mod vaults_model;
mod vaults_registry;
mod vaults_store;
mod vaults_view;

pub use vaults_model::{AmountField, RawAmount, VaultRecord};
pub use vaults_registry::{AssetDefinition, AssetRegistry};
pub use vaults_store::VaultStore;
pub use vaults_view::{PortfolioTotal, VaultRow};
