//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG=canonjson=trace` shows library logs.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Canonicalize text and return text, panicking on failure.
pub fn canon(input: &str) -> String {
    init_tracing();
    canonjson::canonicalize_str(input).unwrap_or_else(|e| panic!("canonicalize {input:?}: {e}"))
}
