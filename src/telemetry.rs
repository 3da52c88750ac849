//! Tracing initialization.
//!
//! The engine logs through `tracing` but never installs a subscriber
//! on its own - that is the hosting process's call to make, once, at
//! startup. These helpers wrap the usual fmt-subscriber wiring so
//! embedders don't have to repeat it.

use tracing_subscriber::EnvFilter;

/// Install the default fmt subscriber.
///
/// Respects `RUST_LOG` when set, falling back to `studyflow=info`.
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_with_filter("studyflow=info");
}

/// Install the fmt subscriber with a fallback filter directive.
///
/// `RUST_LOG` still wins when present.
pub fn init_with_filter(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
