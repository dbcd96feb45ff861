//! Tracing subscriber setup.

use tracing::dispatcher::DefaultGuard;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build a filter from `RUST_LOG`, or `default_level` when it is unset.
///
/// An unparsable `RUST_LOG` is reported on stderr and replaced by
/// `default_level`.
fn env_filter(default_level: LevelFilter) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!(
                "ignoring {}={directives:?} ({err}), using level '{default_level}'",
                EnvFilter::DEFAULT_ENV,
            );
            EnvFilter::new(default_level.to_string())
        }),
        Err(_) => EnvFilter::new(default_level.to_string()),
    }
}

/// Install the global `fmt` subscriber, at `info` unless `RUST_LOG` says
/// otherwise.
pub fn init_logging() {
    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter(LevelFilter::INFO))
        .try_init();

    if let Err(err) = installed {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

/// Install a `debug` subscriber for the current thread whose output is
/// captured by the test harness. Logging stops when the guard is dropped.
#[must_use]
pub fn init_test_logging() -> DefaultGuard {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(env_filter(LevelFilter::DEBUG))
        .set_default()
}

