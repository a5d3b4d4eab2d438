/*!
 * Structured Tracing
 * Subscriber setup for the tracing events the heap emits
 *
 * The library only emits events:
 * - trace: priority bucket created / destroyed
 * - debug: insert dropped at the distinct-priority limit
 * - warn: insert rejected by a full bucket or an unallocatable ring
 *
 * Installing a subscriber is left to the embedding application.
 */

use crate::core::limits::ENV_TRACE_JSON;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - STABLE_HEAP_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    if !try_init_tracing() {
        warn!("Global tracing subscriber already installed, keeping it");
    }
}

/// Initialize structured tracing unless a subscriber is already installed
///
/// Returns `true` if this call installed the subscriber.
pub fn try_init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = json_requested(std::env::var(ENV_TRACE_JSON).ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_current_span(true),
            )
            .try_init()
            .is_ok()
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json = use_json, "Structured tracing initialized");
    }
    installed
}

fn json_requested(value: Option<&str>) -> bool {
    value.map(|v| v == "1" || v == "true").unwrap_or(false)
}
