//! Tracing setup
//!
//! The subscriber is only installed when `BPNAME_LOG` (or `RUST_LOG`) is set,
//! so normal runs print nothing but breakpoint names. Output goes to stderr.
//!
//! ```bash
//! BPNAME_LOG=debug bpname name src/Button.cs --line 42
//! BPNAME_LOG="bpname_core::locate=trace" bpname list src
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives, checked before `RUST_LOG`
pub const LOG_ENV: &str = "BPNAME_LOG";

/// Build an `EnvFilter` from `BPNAME_LOG`, falling back to `RUST_LOG`
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, if logging was requested
pub fn init_tracing() {
    let has_bpname_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_bpname_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
