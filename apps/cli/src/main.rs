use vaultboard_cli::config::Config;
use vaultboard_cli::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env();
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_vaults_path(path);
    }
    init_tracing(config.log_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}
