use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Vault snapshot JSON (`VAULTBOARD_VAULTS`); the first CLI argument wins.
    pub vaults_path: Option<PathBuf>,
    /// Dashboard config JSON (`VAULTBOARD_CONFIG`).
    pub dashboard_config_path: Option<PathBuf>,
    /// Chain id as a wallet provider would report it (`VAULTBOARD_CHAIN_ID`, e.g. `0x89`).
    pub provider_chain_id: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let log_format = match non_empty("VAULTBOARD_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            vaults_path: non_empty("VAULTBOARD_VAULTS").map(PathBuf::from),
            dashboard_config_path: non_empty("VAULTBOARD_CONFIG").map(PathBuf::from),
            provider_chain_id: non_empty("VAULTBOARD_CHAIN_ID"),
            log_format,
        }
    }

    pub fn with_vaults_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vaults_path = Some(path.into());
        self
    }
}
