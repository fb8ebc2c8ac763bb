//! Structured logging via `tracing`.
//!
//! `init_tracing` is idempotent; the level filter is read from `RUST_LOG`
//! and falls back to `raycast_maze=info`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub const DEFAULT_FILTER: &str = "raycast_maze=info";

pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // Otro subscriber global (p. ej. en tests) no es un error fatal.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
    });
}
