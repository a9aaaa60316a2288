use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use vaultboard_core::{
    toasts::ToastRecord,
    vaults::{AmountField, AssetRegistry, VaultRecord, VaultRow},
    AppStore, DashboardConfig,
};

use crate::config::{Config, LogFormat};
use crate::console::ConsoleToastEffectFactory;

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn load_dashboard_config(config: &Config) -> anyhow::Result<DashboardConfig> {
    match &config.dashboard_config_path {
        Some(path) => Ok(DashboardConfig::load(path)?),
        None => Ok(DashboardConfig::default()),
    }
}

pub fn load_vaults(config: &Config) -> anyhow::Result<Vec<VaultRecord>> {
    let path = config
        .vaults_path
        .as_ref()
        .context("no vault snapshot given (pass a path or set VAULTBOARD_VAULTS)")?;
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let vaults: Vec<VaultRecord> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse vault snapshot {}", path.display()))?;
    Ok(vaults)
}

/// Enqueues a warning toast for every vault without a known definition on
/// the provider's chain.
fn check_registry(
    store: &AppStore,
    registry: &AssetRegistry,
    provider_chain_id: Option<&str>,
) -> anyhow::Result<()> {
    for vault in store.vaults().snapshot()? {
        if let Err(e) = registry.lookup_for_provider(&vault.token, provider_chain_id) {
            tracing::warn!(token = %vault.token, "{}", e);
            // Titles are keyed by token so each live warning stays unique.
            let title = format!("{} unavailable", vault.token);
            if store.toasts().contains(&title)? {
                continue;
            }
            store.toasts().enqueue(ToastRecord::new(
                title,
                format!("{}: {}", vault.display_symbol(), e),
                "exclamation-triangle",
                "warning",
            ))?;
        }
    }
    Ok(())
}

/// Loads config and vaults, prints vault rows, the TVL line and any live toasts.
pub fn run(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let dashboard = load_dashboard_config(config)?;
    let registry = dashboard.build_registry();

    let store = AppStore::new();
    store.vaults().replace(load_vaults(config)?)?;
    tracing::info!(
        vaults = store.vaults().snapshot()?.len(),
        assets = registry.len(),
        "dashboard loaded"
    );

    check_registry(&store, &registry, config.provider_chain_id.as_deref())?;

    writeln!(
        out,
        "{:<8} {:>16} {:>22} {:>16} {:>22} {:>10} {:>10} {:>18}",
        "Vault", "Balance $", "Balance", "Deposited $", "Deposited", "APY", "Daily", "TVL $"
    )?;
    for vault in store.vaults().snapshot()? {
        let row = VaultRow::from_record(&vault);
        writeln!(
            out,
            "{:<8} {:>16} {:>22} {:>16} {:>22} {:>10} {:>10} {:>18}",
            row.symbol,
            row.balance_usd,
            row.balance,
            row.deposited_usd,
            row.deposited,
            row.apy,
            row.daily,
            row.tvl_usd
        )?;
    }

    let total = store.vaults().portfolio_total(AmountField::Tvl)?;
    writeln!(out, "TVL {}", total.render())?;

    // Toasts never auto-dismiss; they are shown once and left to the reader.
    let mut host = store.toast_host(Arc::new(ConsoleToastEffectFactory));
    host.render()?;
    let toasts = store.toasts().snapshot()?;
    for title in host.live_titles() {
        if let Some(record) = toasts.iter().find(|t| t.title == title) {
            writeln!(out, "[{}] {}: {}", record.style, record.title, record.body)?;
        }
    }

    Ok(())
}
