//! Tracing setup for the demo binaries and unit tests
//!
//! `RUST_LOG` selects what is shown, e.g.
//! - `RUST_LOG=rustyshift=debug` - one event per synthesized waveform
//! - `RUST_LOG=rustyshift::pipeline=info` - run parameters only
//!
//! The binaries also report when the `binary_demo`, `mary_demo`, `modulate`
//! and `render_stacked` spans close, with their busy/idle times.

#[cfg(test)]
use once_cell::sync::Lazy;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` if set and valid, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a test-writer subscriber once per test binary; later calls are no-ops.
#[cfg(test)]
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        fmt()
            .with_env_filter(env_filter("rustyshift=warn"))
            .with_target(true)
            .with_test_writer()
            .init();
    });

    Lazy::force(&TRACING);
}

/// Install the stderr subscriber for a demo binary. Call once, first thing in `main`.
///
/// Logs go to stderr so stdout carries only the bits, symbols and the saved
/// plot path.
pub fn init_tracing() {
    fmt()
        .with_env_filter(env_filter("rustyshift=info"))
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}
