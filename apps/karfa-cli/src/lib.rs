//! # Karfa Console Library
//!
//! Start-up and wiring for the console shop.
//!
//! ## Module Organization
//! ```text
//! karfa_cli/
//! ├── lib.rs          ◄─── You are here (args, start-up, run)
//! ├── config.rs       ◄─── TOML + env configuration
//! ├── terminal.rs     ◄─── stdin/stdout/stderr Input & Output
//! ├── menu.rs         ◄─── Numbered menu loop
//! └── error.rs        ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load config: defaults → file → env → --catalog                      │
//! │  3. Initialize tracing (RUST_LOG, else config filter), to stderr        │
//! │  4. Build catalog: seed file if configured, else built-in products      │
//! │  5. Wire Session<LineInput, ConsoleOutput> and run the menu             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod terminal;

use std::path::{Path, PathBuf};

use clap::Parser;
use karfa_core::{Catalog, Session, Shop};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use error::{CliError, CliResult};
use terminal::{ConsoleOutput, LineInput};

/// Console web-shop cart.
#[derive(Debug, Parser)]
#[command(name = "karfa", version, about)]
pub struct Args {
    /// Config file (defaults to karfa.toml in the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON product list to open the shop with.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Runs the console shop until the user quits.
pub fn run(args: Args) -> CliResult<()> {
    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(path) = args.catalog {
        config.catalog.seed_path = Some(path);
    }

    init_tracing(&config.logging.filter);
    info!(
        seed = ?config.catalog.seed_path,
        "Starting Karfa console shop"
    );

    let catalog = load_catalog(config.catalog.seed_path.as_deref())?;
    info!(products = catalog.len(), "Catalog ready");

    let shop = Shop::new(catalog, config.display.currency_format());
    let mut session = Session::new(shop, LineInput::stdio(), ConsoleOutput::stdio());
    menu::run_menu(&mut session);

    Ok(())
}

/// Reads the seed catalog, or falls back to the built-in products.
pub fn load_catalog(seed_path: Option<&Path>) -> CliResult<Catalog> {
    let Some(path) = seed_path else {
        return Ok(Catalog::with_default_products());
    };

    let json = std::fs::read_to_string(path)?;
    Catalog::from_json(&json).map_err(|source| CliError::Seed {
        path: path.to_path_buf(),
        source,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=karfa_core=trace` - Trace for the core crate only
/// - Default: the `[logging] filter` from config
///
/// Logs go to stderr so they never mix with shop output on stdout.
fn init_tracing(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
