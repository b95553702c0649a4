use anyhow::Context;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Subscriber for the HTTP server: `RUST_LOG` when set, `default_env_filter` otherwise.
fn get_subscriber(default_env_filter: &str) -> impl Subscriber + Sync + Send {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish()
}

/// Routes `log` records into `tracing` and installs the server subscriber.
pub fn init_logger(default_env_filter: &str) -> anyhow::Result<()> {
    let subscriber = get_subscriber(default_env_filter);
    LogTracer::init().context("log bridge already installed")?;
    set_global_default(subscriber).context("tracing subscriber already installed")?;
    Ok(())
}
