//! Logging infrastructure for the crush CLI.
//!
//! Structured logging on the `tracing` ecosystem. The CLI itself stays quiet
//! by default (`crush=warn`); set `RUST_LOG` for scan/validate/dispatch
//! detail, e.g. `RUST_LOG=crush_cli=debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Call once, before any logging occurs.
///
/// The filter comes from `RUST_LOG` when set, otherwise warnings only.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("crush_cli=warn,crush_preset=warn"));

    // Diagnostics go to stderr; stdout is reserved for the engine handoff.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// Respects the `NO_COLOR` and `FORCE_COLOR` environment variables, falling
/// back to terminal capability detection on stderr (where diagnostics go).
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
