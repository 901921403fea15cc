//! Log subscriber setup for the `tgstats` binary.
//!
//! The library only emits `tracing` events; this module installs a compact
//! stderr subscriber so stdout stays reserved for the console summary.
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (`-q`).
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Progress totals (`-v`).
    Info,
    /// Per-file details (`-vv`).
    Debug,
}

impl LogLevel {
    /// Picks a level from the CLI flags; `quiet` wins over `verbose`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Error,
            (false, 0) => Self::Warn,
            (false, 1) => Self::Info,
            (false, _) => Self::Debug,
        }
    }

    /// Env filter directive for this level.
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("tgstats={}", level.as_filter()))
    };

    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .ok();
}
