//! Structured logging setup via the `tracing` ecosystem.
//!
//! The library itself only emits events (`debug!` in the concatenation
//! pipeline, `warn!` in the comparison harness); installing a subscriber is
//! left to the embedding application. [`init`] is a convenience for demos
//! and tests: a compact stderr subscriber filtered by `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a compact stderr subscriber filtered by `RUST_LOG`
/// (default level: `info`).
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialized twice without panic");
    }
}
