use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber filtered by `level`.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = level.trim();
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", level, e))?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
