//! Logging setup for BlendFarm Submit.
//!
//! The compiler itself only emits `tracing` events; this module wires up a
//! subscriber for front-ends that want to see them.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to the provided default directive.
/// Should be called once at application startup.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_parses_default_directive() {
        // init() can only run once per process, so just exercise the filter.
        let filter = EnvFilter::new("info");
        assert!(!filter.to_string().is_empty());
    }
}
