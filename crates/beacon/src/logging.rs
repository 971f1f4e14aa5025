//! Tracing setup for the `beacon` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` when set.
///
/// Stdout carries command output (HTML, JSON), so logs never go there.
pub fn init_tracing(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .try_init();

    if let Err(err) = result {
        eprintln!("beacon: logging disabled: {err}");
    }
}
