//! Vaultboard Core - vault portfolio aggregation and toast lifecycle.
//!
//! This crate turns on-chain base-unit amounts into exact decimal totals and
//! display strings, and manages the lifecycle of dashboard notifications.
//! It has no network or storage dependencies; vault data is supplied by the
//! caller as a list of [`VaultRecord`]s.

pub mod amounts;
pub mod config;
pub mod constants;
pub mod errors;
pub mod store;
pub mod toasts;
pub mod vaults;

pub use amounts::{aggregate, format_amount, rescale, to_percentage, ScaledAmount};
pub use config::DashboardConfig;
pub use store::AppStore;
pub use vaults::{AmountField, PortfolioTotal, VaultRecord, VaultRow};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
