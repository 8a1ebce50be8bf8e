//! # Karfa Console Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use clap::Parser;
use karfa_cli::Args;

fn main() -> ExitCode {
    match karfa_cli::run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("karfa: {e}");
            ExitCode::FAILURE
        }
    }
}
