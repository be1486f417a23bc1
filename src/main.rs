//! Provides the main entry point to the program.
use anyhow::Result;
use buildright::cli::run_cli;
use human_panic::setup_panic;

fn main() -> Result<()> {
    // Show a friendly message with a support URL if the program panics
    setup_panic!();

    run_cli()
}
