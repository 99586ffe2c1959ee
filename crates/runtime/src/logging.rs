//! Tracing subscriber setup for hosts embedding the runtime.

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// `default_level` applies when `RUST_LOG` is unset. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(default_level: Level) -> bool {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
