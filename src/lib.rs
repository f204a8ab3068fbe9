//! rattendance library root.
//! Exposes the aggregation engine, the record store, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub use crate::core::calculator::metrics::Metrics;
pub use crate::core::clock::{ClockInstant, format_clock, parse_clock};
pub use crate::core::ingest::parse_tab_separated;
pub use crate::core::logic::Core;
pub use crate::core::store::RecordStore;
pub use crate::models::record::AttendanceRecord;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Table { .. } => cli::commands::table::handle(&cli.command),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Initialize the tracing subscriber on stderr.
/// `RUST_LOG` wins over the configured level; `--debug` forces debug output.
fn init_tracing(debug: bool, level: &str) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    // 3️⃣ diagnostics
    init_tracing(cli.debug, &cfg.log_level);

    // 4️⃣ dispatch
    dispatch(&cli, &cfg, &cfg_path)
}
