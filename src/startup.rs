use crate::error::{other_error, AppResult};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
///
/// RUST_LOG takes precedence over the configured filter. Logs go to stderr
/// so command output on stdout stays parseable.
pub fn init_logging(filter: &str) -> AppResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

