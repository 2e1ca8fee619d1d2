//! Subscriber setup for hosts embedding the engine.
//!
//! Production environments get flattened JSON events with the current span
//! attached; anything else gets compact ANSI output.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber with an `info` fallback filter.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is kept.
pub fn init_logging() -> bool {
    init_logging_with_default("info")
}

/// Like [`init_logging`], with `default_directive` used when `RUST_LOG` is unset.
pub fn init_logging_with_default(default_directive: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if is_production(&get_environment()) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_ansi(true))
            .try_init()
    };
    installed.is_ok()
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}
