//! Tracing setup for the weighmaster binary
//!
//! Every workspace crate logs under a `weighmaster_*` target, so one prefix
//! directive covers the controller, the store and the window. Other crates
//! (eframe, the audio backend) stay silent unless `RUST_LOG` asks for them.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Target prefix shared by all workspace crates
pub const TARGET_PREFIX: &str = "weighmaster";

/// How chatty the ledger log is; picked from `-v`/`--quiet`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    /// Entry saves, deletes, relays and config fallbacks
    #[default]
    Normal,
    /// Adds form edits, searches and mute toggles
    Verbose,
    Trace,
}

impl Verbosity {
    /// Map `-v` occurrences (and `--quiet`) to a verbosity.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(verbosity: Verbosity) -> String {
    format!("{}={}", TARGET_PREFIX, verbosity.to_level_filter())
}

/// Install the subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        );

    // Already installed is fine
    let _ = subscriber.try_init();
}
