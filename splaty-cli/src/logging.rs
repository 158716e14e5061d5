use tracing_subscriber::EnvFilter;

fn resolve_env_filter(verbose: bool) -> EnvFilter {
    if let Some(filter) = std::env::var("SPLATY_LOG_LEVEL")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
    {
        return filter;
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Initialize stderr logging once per process.
///
/// Filter: `SPLATY_LOG_LEVEL`, then `RUST_LOG`, then `info` (`debug` with `--verbose`).
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(resolve_env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}
