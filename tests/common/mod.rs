//! Shared test utilities.
//!
//! Provides structured logging for integration tests via the `tracing` crate,
//! bridging the library's `log` records into the test output.
//!
//! Import this module in an integration test and call `init_test_logging()`
//! at the start of tests that need logging:
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - enable debug logging in tests
//! - `RUST_LOG=textgrid::table=trace` - module-specific tracing
//! - `TEST_LOG_JSON=1` - output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Sets up tracing with a test writer (captured by cargo test unless
/// --nocapture is used), file and line information, and target filtering.
/// Idempotent, safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("textgrid=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}
