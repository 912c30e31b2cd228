//! GUI entry point for the weigh-station ledger

mod alarm_panel;
mod app;
mod host;
mod ledger_panel;

use app::WeighmasterApp;
use clap::Parser;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::warn;
use weighmaster_app::logging::{init_logging, Verbosity};
use weighmaster_app::Config;

/// Weigh-station ledger: record, edit and search truck weighings
#[derive(Parser, Debug)]
#[command(name = "weighmaster", version, about)]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the alarm muted
    #[arg(long)]
    muted: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default configuration");
        Config::default()
    })
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_logging(Verbosity::from_flags(args.verbose, args.quiet));

    let mut config = load_config(args.config.as_deref());
    if args.muted {
        config.start_muted = true;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Desert Weighmaster",
        options,
        Box::new(move |_cc| Ok(Box::new(WeighmasterApp::new(config)))),
    )
}
