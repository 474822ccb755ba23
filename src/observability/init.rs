//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a stderr fmt layer.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` if set in the environment
/// 2. `config.trace_level` if set
/// 3. Default: `"warn"` (keeps the interactive screen quiet)
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times (only the first call takes
/// effect). Logs go to stderr; stdout belongs to the rendered UI.
pub fn init_tracing(config: &Config) {
    let fallback = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "warn".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
